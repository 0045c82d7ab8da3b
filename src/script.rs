//! Script assembly: speakers, line wrapping, and the output budget.
//!
//! The last stage turns ordered comments into the tab-separated block
//! format the narration tools import:
//!
//! ```text
//! ゆっくり霊夢	"このスレ画の構図、\n何回見ても笑う"	17
//! ゆっくり魔理沙	"わかる"	3
//! ```
//!
//! One comment, one speaker — the roster advances per comment and wraps
//! around, so a long thread cycles through the cast evenly. A comment
//! split into several chunks keeps its speaker for every chunk; a voice
//! change mid-thought sounds like a glitch.
//!
//! The third column is the chunk's length *before* wrapping. Embedded
//! line breaks are display hints for the caption box; the narration
//! tool times each block off the raw count, so the two must never be
//! conflated.

use log::debug;
use unicode_segmentation::UnicodeSegmentation;

use crate::absorb::absorb_short;
use crate::bounds::ChunkBounds;
use crate::comment::{Comment, CommentTable, IMAGE_MARKER};
use crate::error::{Error, Result};
use crate::reorder::reorganize;
use crate::scored::ScoredSplitter;
use crate::Splitter;

fn glen(s: &str) -> usize {
    s.graphemes(true).count()
}

/// An ordered set of speaker labels, assigned to comments cyclically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    labels: Vec<String>,
}

impl Roster {
    /// Create a roster from arbitrary labels.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyRoster`] when no labels are given.
    pub fn new<I, S>(labels: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        if labels.is_empty() {
            return Err(Error::EmptyRoster);
        }
        Ok(Self { labels })
    }

    /// The classic three-voice yukkuri cast.
    #[must_use]
    pub fn yukkuri() -> Self {
        Self {
            labels: ["ゆっくり霊夢", "ゆっくり魔理沙", "ゆっくり妖夢"]
                .map(String::from)
                .to_vec(),
        }
    }

    /// The four-voice VOICEVOX cast.
    #[must_use]
    pub fn voicevox() -> Self {
        Self {
            labels: ["四国めたん", "春日部つむぎ", "ずんだもん", "青山龍星"]
                .map(String::from)
                .to_vec(),
        }
    }

    /// The labels, in rotation order.
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Number of voices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// A roster is never empty; this exists for clippy's sake.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::yukkuri()
    }
}

/// Explicit rotation cursor over a roster.
///
/// The cursor is plain local state, created per assembly and advanced
/// one comment at a time. Callers stitching multiple assemblies into
/// one script hold the cycle across calls so the rotation continues
/// seamlessly.
#[derive(Debug)]
pub struct SpeakerCycle<'a> {
    roster: &'a Roster,
    index: usize,
}

impl<'a> SpeakerCycle<'a> {
    /// Start a cycle at the first voice.
    #[must_use]
    pub fn new(roster: &'a Roster) -> Self {
        Self { roster, index: 0 }
    }

    /// The label the next call to [`advance`](Self::advance) will return.
    #[must_use]
    pub fn position(&self) -> usize {
        self.index
    }

    /// Take the current label and move the cursor, wrapping around.
    pub fn advance(&mut self) -> &'a str {
        let label = &self.roster.labels[self.index];
        self.index = (self.index + 1) % self.roster.len();
        label
    }
}

/// One speaker-tagged output block.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScriptLine {
    /// The voice performing this block.
    pub speaker: String,
    /// Chunk text re-wrapped with embedded line breaks.
    pub display_text: String,
    /// Grapheme count of the chunk before wrapping. Excludes the
    /// inserted line breaks; narration timing runs off this number.
    pub char_count: usize,
}

impl ScriptLine {
    /// Render as `speaker<TAB>"display"<TAB>count`.
    #[must_use]
    pub fn render(&self) -> String {
        format!("{}\t\"{}\"\t{}", self.speaker, self.display_text, self.char_count)
    }
}

impl std::fmt::Display for ScriptLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}

/// Assembly configuration.
///
/// Field defaults match the scraping deployment; [`compact`](Self::compact)
/// matches the clipboard paste deployment's tighter budget.
#[derive(Debug, Clone)]
pub struct ScriptOptions {
    /// The speaker cast.
    pub roster: Roster,
    /// Display line width in graphemes.
    pub line_width: usize,
    /// Total output budget in graphemes, summed over raw chunk counts.
    pub max_total_chars: usize,
    /// Whether comments longer than the chunk ceiling get split.
    pub split_long: bool,
    /// Chunk ceiling and absorption floor.
    pub bounds: ChunkBounds,
}

impl ScriptOptions {
    /// The tighter budget used when processing pasted text.
    #[must_use]
    pub fn compact() -> Self {
        Self {
            max_total_chars: 4800,
            ..Self::default()
        }
    }
}

impl Default for ScriptOptions {
    fn default() -> Self {
        Self {
            roster: Roster::yukkuri(),
            line_width: 22,
            max_total_chars: 20_000,
            split_long: true,
            bounds: ChunkBounds::default(),
        }
    }
}

/// Re-wrap a chunk into fixed-width display lines joined by `\n`.
///
/// The last line may be shorter; a chunk of `L` graphemes wraps into
/// `ceil(L / width)` lines.
#[must_use]
pub fn wrap_display(text: &str, width: usize) -> String {
    assert!(width > 0, "line width must be > 0");
    let graphemes: Vec<&str> = text.graphemes(true).collect();
    graphemes
        .chunks(width)
        .map(|line| line.concat())
        .collect::<Vec<_>>()
        .join("\n")
}

/// What actually gets narrated from a comment body: image sentinels
/// dropped, whitespace and wrapping quotes shed.
fn narration_text(raw: &str) -> String {
    raw.replace(IMAGE_MARKER, "")
        .trim()
        .trim_matches('"')
        .trim()
        .to_string()
}

/// Build script blocks for ordered comments, continuing an existing
/// speaker rotation.
///
/// Comments that narrate to nothing are skipped without consuming a
/// voice. Emission stops as soon as a chunk would push the running raw
/// count past the budget — unless nothing has been emitted yet, so one
/// oversized opening chunk still gets through.
pub fn script_lines_from(
    comments: &[&Comment],
    splitter: &dyn Splitter,
    opts: &ScriptOptions,
    cycle: &mut SpeakerCycle<'_>,
) -> Vec<ScriptLine> {
    assert!(opts.line_width > 0, "line width must be > 0");

    let mut lines = Vec::with_capacity(comments.len());
    let mut total = 0usize;

    'comments: for comment in comments {
        let text = narration_text(&comment.text);
        if text.is_empty() {
            continue;
        }
        let speaker = cycle.advance();

        let chunks = if opts.split_long && glen(&text) > opts.bounds.max() {
            absorb_short(splitter.split(&text), opts.bounds.min())
        } else {
            vec![text]
        };

        for chunk in chunks {
            let char_count = glen(&chunk);
            if char_count == 0 {
                continue;
            }
            if total.saturating_add(char_count) > opts.max_total_chars && total > 0 {
                debug!(
                    "budget reached at {total}/{} graphemes, truncating",
                    opts.max_total_chars
                );
                break 'comments;
            }
            lines.push(ScriptLine {
                speaker: speaker.to_string(),
                display_text: wrap_display(&chunk, opts.line_width),
                char_count,
            });
            total += char_count;
        }
    }

    lines
}

/// Build script blocks with a fresh speaker rotation.
pub fn script_lines(
    comments: &[&Comment],
    splitter: &dyn Splitter,
    opts: &ScriptOptions,
) -> Vec<ScriptLine> {
    let mut cycle = SpeakerCycle::new(&opts.roster);
    script_lines_from(comments, splitter, opts, &mut cycle)
}

/// Assemble ordered comments into the final newline-joined script.
#[must_use]
pub fn assemble(comments: &[&Comment], opts: &ScriptOptions) -> String {
    let splitter = ScoredSplitter::new(opts.bounds.max());
    assemble_with(comments, &splitter, opts)
}

/// Assemble with a caller-chosen splitter (e.g. the punctuation
/// fallback when the marker table is wrong for the input).
#[must_use]
pub fn assemble_with(
    comments: &[&Comment],
    splitter: &dyn Splitter,
    opts: &ScriptOptions,
) -> String {
    script_lines(comments, splitter, opts)
        .iter()
        .map(ScriptLine::render)
        .collect::<Vec<_>>()
        .join("\n")
}

/// The whole pipeline: reorder a comment table by anchor traversal,
/// then assemble the narration script.
///
/// ```rust
/// use serifu::{render_thread, Comment, CommentTable, ScriptOptions};
///
/// let mut table = CommentTable::new();
/// table.insert(1, Comment::new(1, "スレ立て乙"));
/// table.insert(2, Comment::new(2, "それな").with_anchors([1]));
///
/// let script = render_thread(&table, &ScriptOptions::default());
/// assert_eq!(script.lines().count(), 2);
/// assert!(script.starts_with("ゆっくり霊夢\t\"スレ立て乙\"\t5"));
/// ```
#[must_use]
pub fn render_thread(table: &CommentTable, opts: &ScriptOptions) -> String {
    let ordered = reorganize(table);
    assemble(&ordered, opts)
}
