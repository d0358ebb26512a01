//! Error types for artifact emission.

use thiserror::Error;

/// Result type for artifact operations.
pub type Result<T> = std::result::Result<T, ArtifactError>;

/// Failure to produce an output artifact.
///
/// These are fatal for the run: an unwritable output directory indicates
/// environment misconfiguration, not a data problem, so there is no retry
/// path here.
#[derive(Debug, Error)]
pub enum ArtifactError {
    /// Directory creation or file write failed
    #[error("I/O error writing artifact: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
