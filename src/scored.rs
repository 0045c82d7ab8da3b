//! Weighted rule-based splitting.
//!
//! The workhorse splitter for narration chunks. It extends a buffer one
//! grapheme at a time, and every time the buffer hits the length cap it
//! looks backward for the best-weighted break marker:
//!
//! ```text
//! cap = 12
//!
//! "昨日の夜は雨だったので、家でゲームをしていた"
//!          |----------- buffer reaches 12 ------|
//!                         ^ ので (70)  ^ 、(80)
//!                                      cut here
//! -> "昨日の夜は雨だったので、" + carry the rest forward
//! ```
//!
//! ## The half-buffer floor
//!
//! Only breaks in the second half of the buffer qualify (`start >
//! len/2`). Without the floor, a particle two graphemes in would
//! produce a near-empty chunk and the splitter would crawl. With it,
//! every emitted chunk is at least half the cap — except hard cuts,
//! which emit the whole buffer. A high-score marker sitting just past
//! the midpoint can still produce a noticeably short chunk; that is the
//! tuned behavior the downstream timing consumers expect, so it stays.
//!
//! ## Hard cuts
//!
//! A run with no punctuation and no particles (keyboard mashing, AA
//! art, romaji) yields no qualifying break. The whole buffer is emitted
//! as-is at the cap. Degraded output beats no output.

use log::trace;
use unicode_segmentation::UnicodeSegmentation;

use crate::score::{best_break, default_markers, BreakMarker};
use crate::Splitter;

/// Splitter that cuts at the highest-weighted break marker.
///
/// ## Example
///
/// ```rust
/// use serifu::{ScoredSplitter, Splitter};
///
/// let splitter = ScoredSplitter::new(12);
/// let chunks = splitter.split("昨日は雨だったので、今日は家でゲームをしていたんだ");
///
/// // Lossless: concatenation reproduces the input
/// assert_eq!(chunks.concat(), "昨日は雨だったので、今日は家でゲームをしていたんだ");
/// assert!(chunks.len() > 1);
/// ```
#[derive(Debug, Clone)]
pub struct ScoredSplitter {
    max_len: usize,
    markers: Vec<BreakMarker>,
}

impl ScoredSplitter {
    /// Create a splitter with the default marker table.
    ///
    /// # Arguments
    ///
    /// * `max_len` - Chunk length cap in grapheme clusters
    ///
    /// # Panics
    ///
    /// Panics if `max_len == 0`.
    #[must_use]
    pub fn new(max_len: usize) -> Self {
        assert!(max_len > 0, "max_len must be > 0");
        Self {
            max_len,
            markers: default_markers(),
        }
    }

    /// Replace the marker table.
    ///
    /// # Panics
    ///
    /// Panics if `markers` is empty.
    #[must_use]
    pub fn with_markers(mut self, markers: Vec<BreakMarker>) -> Self {
        assert!(!markers.is_empty(), "markers must not be empty");
        self.markers = markers;
        self
    }

    /// The chunk length cap.
    #[must_use]
    pub const fn max_len(&self) -> usize {
        self.max_len
    }
}

impl Splitter for ScoredSplitter {
    fn split(&self, text: &str) -> Vec<String> {
        let graphemes: Vec<&str> = text.graphemes(true).collect();
        if graphemes.len() <= self.max_len {
            return vec![text.to_string()];
        }

        let mut chunks = Vec::with_capacity(self.estimate_chunks(graphemes.len()));
        let mut buffer: Vec<&str> = Vec::with_capacity(self.max_len + 1);

        for grapheme in graphemes {
            buffer.push(grapheme);
            if buffer.len() < self.max_len {
                continue;
            }

            match best_break(&buffer, &self.markers, buffer.len() / 2) {
                Some(point) => {
                    chunks.push(buffer[..point.end].concat());
                    buffer.drain(..point.end);
                }
                None => {
                    trace!("no qualifying break in {} graphemes, hard cut", buffer.len());
                    chunks.push(buffer.concat());
                    buffer.clear();
                }
            }
        }

        if !buffer.is_empty() {
            chunks.push(buffer.concat());
        }

        chunks
    }

    fn estimate_chunks(&self, text_len: usize) -> usize {
        text_len.div_ceil(self.max_len).max(1)
    }
}
