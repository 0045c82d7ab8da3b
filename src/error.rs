//! Error types for serifu.

/// Errors that can occur while configuring the pipeline.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// Minimum chunk length exceeds the maximum.
    #[error("min chunk length {min} exceeds max {max}")]
    MinExceedsMax {
        /// The maximum chunk length.
        max: usize,
        /// The minimum that was too large.
        min: usize,
    },

    /// A speaker roster needs at least one label.
    #[error("speaker roster is empty")]
    EmptyRoster,
}

/// Result type for serifu operations.
pub type Result<T> = std::result::Result<T, Error>;
