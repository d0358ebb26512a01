//! # Datacheck Core
//!
//! Core data structures and types for datacheck, a validator for tabular
//! datasets against declarative data contracts.
//!
//! A data contract is a formal agreement about the structure and content
//! of a dataset: which columns exist, their types, whether they may be
//! null, and what values they may hold.
//!
//! ## Key Concepts
//!
//! - **Contract**: the declarative schema plus constraints a dataset must
//!   satisfy
//! - **FieldSpec / FieldConstraint**: per-column type, nullability, range
//!   and enumeration rules
//! - **PiiFinding**: sample-based detection result for sensitive patterns
//!   in a column
//! - **TagSuggester**: collaborator seam for proposing governance tags
//!   from PII findings
//!
//! ## Example
//!
//! ```rust
//! use datacheck_core::{ContractBuilder, FieldBuilder, FieldType};
//!
//! let contract = ContractBuilder::new("customer_events")
//!     .owner("analytics-team")
//!     .field(FieldBuilder::new("customer_id", FieldType::String).nullable(false).build())
//!     .field(FieldBuilder::new("age", FieldType::Int).min(0.0).max(120.0).build())
//!     .build();
//!
//! assert!(contract.check_well_formed().is_ok());
//! ```

pub mod builder;
pub mod contract;
pub mod error;
pub mod pii;
pub mod tags;

pub use builder::*;
pub use contract::*;
pub use error::*;
pub use pii::*;
pub use tags::*;
