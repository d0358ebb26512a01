use std::path::Path;

use anyhow::{Context, Result};
use datacheck_artifacts::{emit_lineage, write_report, ValidationReport};
use datacheck_core::TagSuggester;
use datacheck_parser::parse_file;
use datacheck_validator::validate;
use tracing::info;

use crate::loader::load_csv;
use crate::output;
use crate::tags::GovernanceTagSuggester;

pub fn execute(
    contract_path: &str,
    data_path: &str,
    out_dir: &str,
    feature_table: Option<&str>,
    format: &str,
) -> Result<()> {
    info!("Validating dataset {} against contract {}", data_path, contract_path);

    let contract = parse_file(Path::new(contract_path))
        .with_context(|| format!("Failed to load contract file: {contract_path}"))?;

    output::print_info(&format!(
        "Contract loaded: {} (owner: {}, {} fields)",
        contract.name,
        if contract.owner.is_empty() { "unknown" } else { &contract.owner },
        contract.schema.len()
    ));

    let dataset = load_csv(Path::new(data_path))
        .with_context(|| format!("Failed to load dataset file: {data_path}"))?;

    let outcome = validate(&contract, &dataset);

    // Lineage goes first; a report-write failure after this point leaves
    // the lineage artifact behind and the run still fails loudly.
    let out = Path::new(out_dir);
    let feature_table = feature_table
        .map(str::to_string)
        .unwrap_or_else(|| format!("features_{}", contract.name));
    let lineage_path = emit_lineage(out, &contract.name, &feature_table)
        .with_context(|| format!("Failed to write lineage artifact in {out_dir}"))?;

    let suggested_tags = GovernanceTagSuggester.suggest_tags(&outcome.findings);

    let report = ValidationReport::assemble(&outcome, &lineage_path, suggested_tags);
    write_report(out, &report)
        .with_context(|| format!("Failed to write validation report in {out_dir}"))?;

    output::print_report(&report, format);

    if !report.valid {
        std::process::exit(1);
    }

    Ok(())
}
