//! Punctuation-preferring fixed-width splitting.
//!
//! The resilience tier. No weights, no particle table — walk the text
//! in `max_len`-grapheme windows and, before each cut, look backward
//! through the second half of the window for the nearest sentence or
//! clause punctuation:
//!
//! ```text
//! max_len = 10
//!
//! "ここで終わる。そして次の文が続いていく"
//!  |-- window --|
//!         ^ 。 found in the back half -> cut just after it
//! ```
//!
//! Use it when the weighted splitter's marker table is wrong for the
//! input (non-Japanese text, say) and you still need bounded chunks.
//! Quality is explicitly not the goal here.

use unicode_segmentation::UnicodeSegmentation;

use crate::Splitter;

/// Sentence and clause punctuation the window cut snaps back to.
const CUT_PUNCTUATION: &[&str] = &["。", "！", "？", "、", "，"];

/// Fixed-width splitter that prefers cutting just after punctuation.
///
/// ## Example
///
/// ```rust
/// use serifu::{PunctSplitter, Splitter};
///
/// let splitter = PunctSplitter::new(10);
/// let chunks = splitter.split("ここで終わる。そして次の文が続いていく");
///
/// assert_eq!(chunks.concat(), "ここで終わる。そして次の文が続いていく");
/// assert_eq!(chunks[0], "ここで終わる。");
/// ```
#[derive(Debug, Clone)]
pub struct PunctSplitter {
    max_len: usize,
}

impl PunctSplitter {
    /// Create a splitter with the given window width in graphemes.
    ///
    /// # Panics
    ///
    /// Panics if `max_len == 0`.
    #[must_use]
    pub fn new(max_len: usize) -> Self {
        assert!(max_len > 0, "max_len must be > 0");
        Self { max_len }
    }
}

impl Splitter for PunctSplitter {
    fn split(&self, text: &str) -> Vec<String> {
        let graphemes: Vec<&str> = text.graphemes(true).collect();
        if graphemes.len() <= self.max_len {
            return vec![text.to_string()];
        }

        let mut chunks = Vec::with_capacity(self.estimate_chunks(graphemes.len()));
        let mut current = 0;

        while current < graphemes.len() {
            let mut end = (current + self.max_len).min(graphemes.len());

            // Not the final window: snap back to punctuation if any sits
            // in the back half.
            if end < graphemes.len() {
                let floor = current + self.max_len / 2;
                for i in (floor + 1..end).rev() {
                    if CUT_PUNCTUATION.contains(&graphemes[i]) {
                        end = i + 1;
                        break;
                    }
                }
            }

            chunks.push(graphemes[current..end].concat());
            current = end;
        }

        chunks
    }

    fn estimate_chunks(&self, text_len: usize) -> usize {
        text_len.div_ceil(self.max_len).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn glen(s: &str) -> usize {
        s.graphemes(true).count()
    }

    #[test]
    fn test_short_text_passes_through() {
        let splitter = PunctSplitter::new(20);
        assert_eq!(splitter.split("そのまま"), vec!["そのまま"]);
    }

    #[test]
    fn test_snaps_to_punctuation() {
        let splitter = PunctSplitter::new(10);
        let chunks = splitter.split("ここで終わる。そして次の文が続いていく");
        assert_eq!(chunks[0], "ここで終わる。");
        assert_eq!(chunks.concat(), "ここで終わる。そして次の文が続いていく");
    }

    #[test]
    fn test_hard_cut_without_punctuation() {
        let splitter = PunctSplitter::new(8);
        let text = "ア".repeat(20);
        let chunks = splitter.split(&text);
        assert_eq!(chunks.concat(), text);
        assert_eq!(chunks.len(), 3);
        assert_eq!(glen(&chunks[0]), 8);
    }

    #[test]
    fn test_ignores_punctuation_in_front_half() {
        // 、 at index 1 is in the front half of the window; the cut must
        // not snap that far back.
        let splitter = PunctSplitter::new(10);
        let text = format!("あ、{}", "ア".repeat(18));
        let chunks = splitter.split(&text);
        assert_eq!(glen(&chunks[0]), 10);
        assert_eq!(chunks.concat(), text);
    }

    #[test]
    fn test_chunks_bounded() {
        let splitter = PunctSplitter::new(12);
        let text = "短い文。もう少し長めの文がここに続く。さらに続く文がある。そして終わり。";
        for chunk in splitter.split(text) {
            assert!(glen(&chunk) <= 12);
        }
    }

    #[test]
    #[should_panic]
    fn test_zero_width_panics() {
        let _ = PunctSplitter::new(0);
    }
}
