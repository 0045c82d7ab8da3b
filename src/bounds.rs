//! Chunk length bounds.
//!
//! ## The Problem
//!
//! A narration chunk has two failure modes:
//!
//! - Too long: the synthesized line drags on and subtitles overflow the
//!   caption box.
//! - Too short: a two-character grunt gets its own speaker block and the
//!   narration turns staccato.
//!
//! So the splitter works against a ceiling, and a post-pass absorbs
//! anything that lands under a floor:
//!
//! ```text
//! max = 80:  "長い長いコメント……" -> carved at the best break under 80
//! min = 30:  ["そう", "だね、それで本題だけど……"] -> ["そうだね、それで本題だけど……"]
//! ```
//!
//! `ChunkBounds` carries both numbers. The floor is advisory — it drives
//! the absorption pass, and an input that is shorter than the floor in
//! its entirety stays short (there is nothing to merge it into).

use crate::error::{Error, Result};

/// Maximum and minimum chunk length, in grapheme clusters.
///
/// # Examples
///
/// ```rust
/// use serifu::ChunkBounds;
///
/// // Ceiling only: no absorption pass
/// let bounds = ChunkBounds::new(80);
/// assert_eq!(bounds.max(), 80);
/// assert_eq!(bounds.min(), 0);
///
/// // Ceiling plus floor
/// let bounds = ChunkBounds::new(80).with_min(30).unwrap();
/// assert_eq!(bounds.min(), 30);
///
/// // A floor above the ceiling is rejected
/// assert!(ChunkBounds::new(80).with_min(100).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkBounds {
    max: usize,
    min: usize,
}

impl ChunkBounds {
    /// Create bounds with the given ceiling and no floor.
    ///
    /// # Panics
    ///
    /// Panics if `max == 0`.
    #[must_use]
    pub fn new(max: usize) -> Self {
        assert!(max > 0, "max chunk length must be > 0");
        Self { max, min: 0 }
    }

    /// The maximum chunk length. The splitter never emits past this.
    #[must_use]
    pub const fn max(&self) -> usize {
        self.max
    }

    /// The minimum chunk length the absorption pass aims for.
    #[must_use]
    pub const fn min(&self) -> usize {
        self.min
    }

    /// Set the absorption floor.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MinExceedsMax`] if `min > max`.
    pub fn with_min(self, min: usize) -> Result<Self> {
        if min > self.max {
            Err(Error::MinExceedsMax { max: self.max, min })
        } else {
            Ok(Self { min, ..self })
        }
    }
}

impl Default for ChunkBounds {
    fn default() -> Self {
        // The thread-narration sweet spot: one chunk is one synthesized
        // utterance of a few seconds.
        Self { max: 80, min: 30 }
    }
}

impl From<usize> for ChunkBounds {
    fn from(max: usize) -> Self {
        Self::new(max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ceiling_only() {
        let bounds = ChunkBounds::new(100);
        assert_eq!(bounds.max(), 100);
        assert_eq!(bounds.min(), 0);
    }

    #[test]
    fn test_with_floor() {
        let bounds = ChunkBounds::new(100).with_min(40).unwrap();
        assert_eq!(bounds.max(), 100);
        assert_eq!(bounds.min(), 40);
    }

    #[test]
    fn test_floor_equal_to_ceiling_allowed() {
        assert!(ChunkBounds::new(50).with_min(50).is_ok());
    }

    #[test]
    fn test_floor_above_ceiling_rejected() {
        assert!(ChunkBounds::new(50).with_min(51).is_err());
    }

    #[test]
    fn test_default_matches_narration_tuning() {
        let bounds = ChunkBounds::default();
        assert_eq!(bounds.max(), 80);
        assert_eq!(bounds.min(), 30);
    }

    #[test]
    #[should_panic]
    fn test_zero_max_panics() {
        let _ = ChunkBounds::new(0);
    }
}
