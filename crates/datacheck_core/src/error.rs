//! Error types for contract definitions.

use thiserror::Error;

/// Result type for contract operations.
pub type Result<T> = std::result::Result<T, ContractError>;

/// Errors in a contract definition itself.
///
/// These are fatal: a malformed contract aborts the run before any
/// validation happens. Failures of data against a valid contract are not
/// errors but violations, collected by the validation engine.
#[derive(Debug, Error)]
pub enum ContractError {
    /// Contract declares no fields
    #[error("Contract schema has no fields defined")]
    EmptySchema,

    /// Two fields share a name
    #[error("Duplicate field name in schema: '{0}'")]
    DuplicateField(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
