//! # Datacheck Validator
//!
//! Validation engine for tabular datasets against data contracts. This
//! crate provides the core rule-evaluation logic:
//!
//! - Structural checks (missing and extra columns)
//! - Per-field checks (type coercion, nullability, allowed values, ranges)
//! - Sample-based PII classification (email and phone patterns)
//!
//! Validation never raises on bad data: every rule failure is collected as
//! a `Violation` and the full list is returned in one pass.
//!
//! ## Example
//!
//! ```rust
//! use datacheck_core::{ContractBuilder, FieldBuilder, FieldType};
//! use datacheck_validator::{validate, Column, Dataset};
//!
//! let contract = ContractBuilder::new("people")
//!     .field(FieldBuilder::new("age", FieldType::Int).min(0.0).max(120.0).build())
//!     .build();
//!
//! let dataset = Dataset::from_columns(vec![
//!     Column::new("age", vec![30i64.into(), 150i64.into()]),
//! ]).unwrap();
//!
//! let outcome = validate(&contract, &dataset);
//! assert!(!outcome.valid());
//! assert_eq!(outcome.error_messages(), vec!["age above max 120"]);
//! ```

mod dataset;
mod engine;
mod error;
mod pii;

pub use dataset::*;
pub use engine::*;
pub use error::*;
pub use pii::*;
