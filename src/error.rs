//! Error types for strata.

/// Errors that can occur while building a chunker configuration.
///
/// Chunking itself never fails; every error surfaces at construction time.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid chunk size (must be > 0).
    #[error("invalid chunk size: {0} (must be > 0)")]
    InvalidChunkSize(usize),

    /// Overlap is not strictly smaller than the chunk size.
    #[error("chunk overlap {overlap} must be smaller than chunk size {size}")]
    OverlapNotLessThanSize {
        /// The chunk size.
        size: usize,
        /// The overlap that was too large.
        overlap: usize,
    },

    /// A separator pattern failed to compile as a regular expression.
    #[error("invalid separator pattern {pattern:?}: {source}")]
    InvalidPattern {
        /// The pattern as configured.
        pattern: String,
        /// The underlying regex error.
        #[source]
        source: regex::Error,
    },
}

/// Result type for strata operations.
pub type Result<T> = std::result::Result<T, Error>;
