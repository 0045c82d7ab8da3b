//! # serifu
//!
//! Turns anchor-linked forum threads into speaker-tagged narration
//! scripts ("yukkuri" style).
//!
//! ## The Problem
//!
//! A board thread is a flat list of posts in posting order, stitched
//! together by `>>123` anchors. Feeding it to a text-to-speech tool
//! raises three separate problems:
//!
//! - Replies sit far from the posts they answer. Narrated in posting
//!   order, every exchange is interleaved with unrelated posts.
//! - Posts are arbitrarily long. A 300-character rant has to become
//!   several utterances, and a cut mid-word sounds broken — Japanese
//!   has no spaces, so "cut at whitespace" is not available.
//! - The narration tool wants a rigid import format: a speaker label,
//!   display text wrapped to the caption width, and a raw character
//!   count it times the voice by.
//!
//! This crate is the pure core of that pipeline. A scraper (or the
//! operator's clipboard) supplies a [`CommentTable`]; the crate
//! reorders, splits, and formats; the caller gets back one string.
//!
//! ## The Pipeline
//!
//! ```text
//! CommentTable
//!      │ reorganize      ascending-id roots, depth-first anchor expansion
//!      ▼
//! ordered comments
//!      │ split           weighted break markers, half-buffer floor
//!      │ absorb          merge chunks below the minimum
//!      ▼
//! chunks
//!      │ assemble        speaker rotation, fixed-width wrap, output budget
//!      ▼
//! ゆっくり霊夢	"このスレ画の構図、\n何回見ても笑う"	17
//! ```
//!
//! ## Splitting Strategies
//!
//! ### Scored (default)
//!
//! [`ScoredSplitter`] extends a buffer grapheme by grapheme; at the
//! length cap it cuts at the highest-weighted break marker in the back
//! half of the buffer. Sentence punctuation outranks clause pauses,
//! which outrank connectives, which outrank bare case particles.
//!
//! **When to use**: Japanese prose — which is what forum threads are.
//! **Weakness**: marker-free runs (AA art, romaji) degrade to hard cuts.
//!
//! ### Punctuation fallback
//!
//! [`PunctSplitter`] walks fixed-width windows and snaps each cut back
//! to the nearest sentence or clause punctuation. No weights, no
//! particle table.
//!
//! **When to use**: resilience tier when the marker table is wrong for
//! the input. **Weakness**: particle boundaries are ignored entirely.
//!
//! Both are lossless: concatenating the chunks reproduces the input
//! exactly. The absorption pass ([`absorb_short`]) then merges
//! too-short chunks into their neighbors without disturbing order.
//!
//! ## Quick Start
//!
//! ```rust
//! use serifu::{render_thread, Comment, CommentTable, ScriptOptions};
//!
//! let mut table = CommentTable::new();
//! table.insert(1, Comment::new(1, "スレ画の勢いすき"));
//! table.insert(2, Comment::new(2, "わかる、今期一番笑った").with_anchors([1]));
//! table.insert(3, Comment::new(3, "原作も読んでほしい"));
//!
//! let script = render_thread(&table, &ScriptOptions::default());
//! for line in script.lines() {
//!     // speaker <TAB> "wrapped text" <TAB> raw length
//!     assert_eq!(line.split('\t').count(), 3);
//! }
//! ```
//!
//! Pasted text instead of a scrape:
//!
//! ```rust
//! use serifu::{clean_raw_text, render_thread, table_from_lines, ScriptOptions};
//!
//! let pasted = ">>3 それはそう\n0004 今北産業\n";
//! let table = table_from_lines(&clean_raw_text(pasted));
//! let script = render_thread(&table, &ScriptOptions::compact());
//! assert_eq!(script.lines().count(), 2);
//! ```
//!
//! ## What this crate does not do
//!
//! No HTTP, no HTML parsing, no clipboard, no files. The extraction
//! collaborator owns all I/O and hands the core a fully materialized
//! table; every operation here is deterministic and runs to completion.

mod absorb;
mod bounds;
mod clean;
mod comment;
mod error;
mod punct;
mod reorder;
mod score;
mod scored;
mod script;

pub use absorb::absorb_short;
pub use bounds::ChunkBounds;
pub use clean::{clean_raw_text, find_board_urls};
pub use comment::{table_from_lines, Comment, CommentTable, IMAGE_MARKER};
pub use error::{Error, Result};
pub use punct::PunctSplitter;
pub use reorder::reorganize;
pub use score::{best_break, default_markers, BreakMarker, BreakPoint};
pub use scored::ScoredSplitter;
pub use script::{
    assemble, assemble_with, render_thread, script_lines, script_lines_from, wrap_display,
    Roster, ScriptLine, ScriptOptions, SpeakerCycle,
};

/// A long-text splitting strategy.
///
/// Splitters carve a string into bounded chunks whose concatenation
/// reproduces the input exactly. The assembler takes one as a trait
/// object, so the fallback tier can be swapped in at the call site:
///
/// ```rust
/// use serifu::{PunctSplitter, ScoredSplitter, Splitter};
///
/// fn chunk_comment(splitter: &dyn Splitter, text: &str) -> Vec<String> {
///     splitter.split(text)
/// }
///
/// let text = "長いコメントはここで区切られて、読み上げ用の塊になるんだよね";
/// let scored = chunk_comment(&ScoredSplitter::new(12), text);
/// let punct = chunk_comment(&PunctSplitter::new(12), text);
/// assert_eq!(scored.concat(), punct.concat());
/// ```
pub trait Splitter: Send + Sync {
    /// Split text into chunks of bounded grapheme length.
    ///
    /// Lossless: `chunks.concat() == text`.
    fn split(&self, text: &str) -> Vec<String>;

    /// Estimate the number of chunks for a given grapheme count.
    ///
    /// Useful for pre-allocation. May be approximate.
    fn estimate_chunks(&self, text_len: usize) -> usize {
        (text_len / 80).max(1)
    }
}
