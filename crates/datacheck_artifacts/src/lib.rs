//! # Datacheck Artifacts
//!
//! Output artifacts of a validation run:
//!
//! - **Lineage** (`lineage.json`): a minimal provenance graph linking the
//!   source dataset to its derived feature table
//! - **Validation report** (`validation_result.json`): the assembled
//!   result combining violations, PII findings, lineage path, and
//!   suggested governance tags
//!
//! Both writers create the output directory on demand and fail fast on
//! I/O problems; lineage is written before the report, so a report-write
//! failure can leave a lineage artifact behind (surfaced as a fatal
//! error, never silently).

mod error;
mod lineage;
mod report;

pub use error::*;
pub use lineage::*;
pub use report::*;
