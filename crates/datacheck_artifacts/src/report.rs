//! Validation report artifact.
//!
//! The report assembler is pure aggregation: it wraps the validation
//! outcome, per-field PII findings, lineage path, and externally-supplied
//! tag suggestions into one serializable structure and writes it as
//! `validation_result.json`. No validation logic lives here.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use datacheck_core::PiiFinding;
use datacheck_validator::ValidationOutcome;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Result;

/// Fixed filename of the report artifact.
pub const REPORT_FILENAME: &str = "validation_result.json";

/// The final structured report of one validation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Contract name
    pub contract: String,

    /// True iff the violation list is empty
    pub valid: bool,

    /// Rendered violation messages in reporting order
    pub errors: Vec<String>,

    /// Per-field PII findings
    pub pii_summary: BTreeMap<String, PiiFinding>,

    /// Path of the lineage artifact written for this run
    pub lineage: String,

    /// Governance tags proposed by the external tag-suggestion collaborator
    pub suggested_tags: Vec<String>,
}

impl ValidationReport {
    /// Assembles the report from a validation outcome and its companion
    /// artifacts.
    pub fn assemble(
        outcome: &ValidationOutcome,
        lineage_path: &Path,
        suggested_tags: Vec<String>,
    ) -> Self {
        let pii_summary = outcome
            .findings
            .iter()
            .map(|f| (f.field.clone(), f.clone()))
            .collect();

        Self {
            contract: outcome.contract.clone(),
            valid: outcome.valid(),
            errors: outcome.error_messages(),
            pii_summary,
            lineage: lineage_path.display().to_string(),
            suggested_tags,
        }
    }
}

/// Writes the report artifact into `out_dir`, creating it if absent,
/// and returns the artifact path.
///
/// Callers emit lineage first; if this write fails the run aborts with a
/// lineage artifact already on disk and no matching report. That gap is
/// accepted and surfaced through the fatal error rather than hidden.
pub fn write_report(out_dir: &Path, report: &ValidationReport) -> Result<PathBuf> {
    fs::create_dir_all(out_dir)?;

    let path = out_dir.join(REPORT_FILENAME);
    fs::write(&path, serde_json::to_string_pretty(report)?)?;

    info!(path = %path.display(), contract = %report.contract, valid = report.valid, "wrote validation report");
    Ok(path)
}
