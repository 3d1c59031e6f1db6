//! # Error Types

/// Errors from wordprep operations.
#[derive(Debug, thiserror::Error)]
pub enum WordprepError {
    /// Source and target vocab sizes must match when the vocabulary is shared.
    #[error("shared vocabulary requires equal sizes (source: {source_size}, target: {target_size})")]
    VocabSizeMismatch {
        /// The requested source vocab size.
        source_size: usize,
        /// The requested target vocab size.
        target_size: usize,
    },

    /// A required special token is not in the vocabulary.
    #[error("special token {0:?} is not in the vocabulary")]
    MissingSpecialToken(String),

    /// The configuration is incomplete or inconsistent.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Parse error (integer, format version, etc.)
    #[error("parse error: {0}")]
    Parse(String),
}

/// Result type for wordprep operations.
pub type WPResult<T> = core::result::Result<T, WordprepError>;
