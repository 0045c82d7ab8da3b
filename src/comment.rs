//! The Comment type: one forum post with its reply anchors.
//!
//! Comments come from an extraction collaborator (an HTML scraper or a
//! pasted-text parser) that has already resolved each post's numeric id,
//! body text, and the ids of the posts it anchors to with `>>123`-style
//! references. The core never mutates a comment; it only reorders and
//! reformats.

use std::collections::BTreeMap;

/// Sentinel the extraction collaborator appends when a post's body is an
/// image-only reply. The assembler strips it before narration.
pub const IMAGE_MARKER: &str = "[image]";

/// One forum post.
///
/// Anchors are kept in declaration order — the order the references
/// appear in the post — because the traversal expands them in that
/// order. They may point at ids that were never scraped (deleted posts,
/// cross-thread references); the traversal skips those silently.
///
/// ```rust
/// use serifu::Comment;
///
/// let comment = Comment::new(3, "そうだね").with_anchors([1, 2]);
/// assert_eq!(comment.id, 3);
/// assert_eq!(comment.anchors, vec![1, 2]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Comment {
    /// Numeric post id, unique within one scrape.
    pub id: u64,
    /// Body text, already stripped of anchor tokens and quoted sub-threads.
    pub text: String,
    /// Ids this post anchors to, in declaration order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub anchors: Vec<u64>,
    /// Display label, e.g. "3".
    #[cfg_attr(feature = "serde", serde(default))]
    pub number: Option<String>,
    /// Poster name, when the board exposes one.
    #[cfg_attr(feature = "serde", serde(default))]
    pub author: Option<String>,
    /// Post timestamp as shown on the board.
    #[cfg_attr(feature = "serde", serde(default))]
    pub date: Option<String>,
}

impl Comment {
    /// Create a comment with no anchors and no header fields.
    #[must_use]
    pub fn new(id: u64, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            anchors: Vec::new(),
            number: None,
            author: None,
            date: None,
        }
    }

    /// Attach anchor ids in declaration order.
    #[must_use]
    pub fn with_anchors(mut self, anchors: impl IntoIterator<Item = u64>) -> Self {
        self.anchors = anchors.into_iter().collect();
        self
    }

    /// Attach the header fields the board exposes.
    #[must_use]
    pub fn with_header(
        mut self,
        number: impl Into<String>,
        author: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        self.number = Some(number.into());
        self.author = Some(author.into());
        self.date = Some(date.into());
        self
    }
}

impl std::fmt::Display for Comment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Comment {{ id: {}, anchors: {:?}, len: {} }}",
            self.id,
            self.anchors,
            self.text.len()
        )
    }
}

/// Every addressable comment of one scrape, keyed by id.
///
/// `BTreeMap` so iteration yields ascending numeric id order, which is
/// exactly the root order the traversal wants.
pub type CommentTable = BTreeMap<u64, Comment>;

/// Build a table from pasted plain text: one comment per non-blank line,
/// ids assigned 1..n in line order, no anchors.
///
/// This is the ingestion path for text the operator pastes instead of
/// scraping — run [`clean_raw_text`](crate::clean_raw_text) over it
/// first.
///
/// ```rust
/// use serifu::table_from_lines;
///
/// let table = table_from_lines("一行目\n\n二行目");
/// assert_eq!(table.len(), 2);
/// assert_eq!(table[&1].text, "一行目");
/// assert_eq!(table[&2].text, "二行目");
/// ```
#[must_use]
pub fn table_from_lines(text: &str) -> CommentTable {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .enumerate()
        .map(|(i, line)| (i as u64 + 1, Comment::new(i as u64 + 1, line)))
        .collect()
}
