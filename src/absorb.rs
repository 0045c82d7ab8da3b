//! Short-chunk absorption.
//!
//! The splitter optimizes for not exceeding the cap; it happily emits a
//! three-grapheme tail. Narration hates that — each chunk becomes its
//! own speaker block, and a blurted "そう" kills the pacing. This pass
//! merges sub-minimum chunks into their neighbors:
//!
//! ```text
//! min = 5
//!
//! ["そう", "だね", "それで本題なんだけど", "以上"]
//!   ->  ["そうだね", "それで本題なんだけど以上"]
//! ```
//!
//! Two passes. The first folds runs of short chunks into a pending
//! buffer, flushing it before each long chunk (or appending the final
//! leftover to the last chunk). The second sweeps again and merges
//! anything still short into its predecessor — the first pass can leave
//! a short chunk when the buffer flushes right before end of input.
//!
//! Concatenation order is never disturbed, so the lossless guarantee of
//! the splitters survives this pass. Two chunks may legitimately stay
//! short: an entire input below the minimum (nothing to merge into),
//! and a leading run of shorts flushed ahead of the first long chunk —
//! merging forward would reorder text, and the splitters don't emit
//! that shape in practice.

use unicode_segmentation::UnicodeSegmentation;

fn glen(s: &str) -> usize {
    s.graphemes(true).count()
}

/// Merge chunks shorter than `min_len` graphemes into their neighbors.
///
/// ```rust
/// use serifu::absorb_short;
///
/// let chunks = vec!["そう".into(), "だね".into(), "それで本題なんだけど".into()];
/// let merged = absorb_short(chunks, 5);
/// assert_eq!(merged, vec!["そうだね", "それで本題なんだけど"]);
/// ```
#[must_use]
pub fn absorb_short(chunks: Vec<String>, min_len: usize) -> Vec<String> {
    if chunks.is_empty() {
        return Vec::new();
    }

    // Pass 1: fold short runs into a pending buffer.
    let mut merged: Vec<String> = Vec::with_capacity(chunks.len());
    let mut pending = String::new();
    for chunk in chunks {
        if glen(&chunk) < min_len {
            pending.push_str(&chunk);
        } else {
            if !pending.is_empty() {
                merged.push(std::mem::take(&mut pending));
            }
            merged.push(chunk);
        }
    }
    if !pending.is_empty() {
        match merged.last_mut() {
            Some(last) => last.push_str(&pending),
            None => merged.push(pending),
        }
    }

    // Pass 2: anything still short joins its predecessor.
    let mut result: Vec<String> = Vec::with_capacity(merged.len());
    for chunk in merged {
        match result.last_mut() {
            Some(prev) if glen(&chunk) < min_len => prev.push_str(&chunk),
            _ => result.push(chunk),
        }
    }
    result
}
