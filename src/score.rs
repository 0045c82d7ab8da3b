//! Weighted break markers.
//!
//! Japanese has no spaces, so "where can this sentence breathe?" is
//! answered by punctuation and grammar particles. Not all of them are
//! equal:
//!
//! ```text
//! 。！？        sentence end        — always a good break
//! 、，          clause pause        — good break
//! ので から     causal connectives  — decent break
//! は が を に   case particles      — break of last resort
//! ```
//!
//! Each marker carries a weight, and the splitter asks: of all markers
//! occurring late enough in the current buffer, which one has the
//! highest weight? The answer (the index just past the marker) becomes
//! the cut point.
//!
//! The table is configuration, not logic — swap in your own markers for
//! a different register of text.

use unicode_segmentation::UnicodeSegmentation;

/// A break token and how desirable it is as a cut point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakMarker {
    /// The token, e.g. `"。"` or `"ので"`.
    pub token: String,
    /// Break desirability; higher is better.
    pub weight: u32,
}

impl BreakMarker {
    /// Create a marker.
    #[must_use]
    pub fn new(token: impl Into<String>, weight: u32) -> Self {
        Self {
            token: token.into(),
            weight,
        }
    }
}

/// The default marker table, ordered by decreasing specificity.
#[must_use]
pub fn default_markers() -> Vec<BreakMarker> {
    [
        ("。", 100),
        ("！", 100),
        ("？", 100),
        ("、", 80),
        ("，", 80),
        ("ので", 70),
        ("から", 70),
        ("けれど", 70),
        ("という", 60),
        ("ところ", 60),
        ("について", 50),
        ("に対して", 50),
        ("は", 40),
        ("が", 40),
        ("を", 40),
        ("に", 40),
        ("と", 30),
        ("で", 30),
        ("の", 30),
    ]
    .into_iter()
    .map(|(token, weight)| BreakMarker::new(token, weight))
    .collect()
}

/// A chosen cut point inside a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreakPoint {
    /// Grapheme index just past the marker; the buffer is cut here.
    pub end: usize,
    /// Weight of the marker that won.
    pub weight: u32,
}

/// Find the best cut point in `buffer` (a grapheme sequence).
///
/// For each marker, only its rightmost occurrence counts, and only if
/// the occurrence starts strictly past `floor`. Among the surviving
/// candidates the highest weight wins; ties on weight go to the
/// rightmost start, maximizing chunk length under the cap.
///
/// Returns `None` when no marker occurs past the floor — the caller
/// falls back to a hard cut.
///
/// ```rust
/// use serifu::{best_break, default_markers};
/// use unicode_segmentation::UnicodeSegmentation;
///
/// let buffer: Vec<&str> = "雨だから、今日は家にいる".graphemes(true).collect();
/// let markers = default_markers();
///
/// // Floor 0: the pause 、 (weight 80) beats every particle.
/// let hit = best_break(&buffer, &markers, 0).unwrap();
/// assert_eq!(hit.weight, 80);
/// assert_eq!(buffer[..hit.end].concat(), "雨だから、");
/// ```
#[must_use]
pub fn best_break(buffer: &[&str], markers: &[BreakMarker], floor: usize) -> Option<BreakPoint> {
    let mut best: Option<(u32, usize, usize)> = None; // (weight, start, end)

    for marker in markers {
        let token: Vec<&str> = marker.token.graphemes(true).collect();
        if token.is_empty() || token.len() > buffer.len() {
            continue;
        }

        // Rightmost occurrence of this marker that starts past the floor.
        let hit = (0..=buffer.len() - token.len())
            .rev()
            .find(|&start| buffer[start..start + token.len()] == token[..]);

        let Some(start) = hit else { continue };
        if start <= floor {
            continue;
        }

        let candidate = (marker.weight, start, start + token.len());
        match best {
            Some((w, s, _)) if (marker.weight, start) <= (w, s) => {}
            _ => best = Some(candidate),
        }
    }

    best.map(|(weight, _, end)| BreakPoint { end, weight })
}
