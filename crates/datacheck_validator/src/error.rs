//! Violations and dataset errors.
//!
//! A `Violation` is not an exception: it is a data element the engine
//! accumulates and reports. Only structurally unreadable datasets abort a
//! run, via `DatasetError`.

use thiserror::Error;

/// A single rule failure found while validating a dataset.
///
/// The engine emits at most one violation per field per category,
/// regardless of how many rows trip the rule. Rendering through `Display`
/// produces the report's error strings.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Violation {
    /// Contract columns absent from the dataset, in declaration order
    #[error("Missing columns: [{}]", .columns.join(", "))]
    MissingColumns {
        /// Missing column names
        columns: Vec<String>,
    },

    /// Dataset columns not declared by the contract, in table order
    #[error("Extra columns: [{}]", .columns.join(", "))]
    ExtraColumns {
        /// Unexpected column names
        columns: Vec<String>,
    },

    /// A value could not be coerced to the declared type
    #[error("Type mismatch on {field}: expected {expected}: {detail}")]
    TypeMismatch {
        /// Field name
        field: String,
        /// Declared type name
        expected: String,
        /// Description of the failed coercion
        detail: String,
    },

    /// Missing values in a non-nullable field
    #[error("Nulls not allowed in {field}")]
    NullsNotAllowed {
        /// Field name
        field: String,
    },

    /// Present values outside the allowed set
    #[error("{field} has values outside allowed set")]
    OutsideAllowedSet {
        /// Field name
        field: String,
    },

    /// Present values strictly below the declared minimum
    #[error("{field} below min {min}")]
    BelowMin {
        /// Field name
        field: String,
        /// Declared minimum
        min: f64,
    },

    /// Present values strictly above the declared maximum
    #[error("{field} above max {max}")]
    AboveMax {
        /// Field name
        field: String,
        /// Declared maximum
        max: f64,
    },
}

impl Violation {
    /// The field a per-field violation refers to, if any.
    pub fn field(&self) -> Option<&str> {
        match self {
            Violation::MissingColumns { .. } | Violation::ExtraColumns { .. } => None,
            Violation::TypeMismatch { field, .. }
            | Violation::NullsNotAllowed { field }
            | Violation::OutsideAllowedSet { field }
            | Violation::BelowMin { field, .. }
            | Violation::AboveMax { field, .. } => Some(field),
        }
    }
}

/// A structurally unreadable dataset.
///
/// Unlike violations this is fatal: the engine requires a rectangular
/// table with uniquely named columns before any rule can be evaluated.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// Columns have differing lengths
    #[error("Column '{name}' has {actual} rows, expected {expected}")]
    RaggedColumn {
        /// Offending column
        name: String,
        /// Its row count
        actual: usize,
        /// Row count of the first column
        expected: usize,
    },

    /// Two columns share a name
    #[error("Duplicate column name: '{0}'")]
    DuplicateColumn(String),
}
