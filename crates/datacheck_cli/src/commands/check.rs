use std::path::Path;

use anyhow::{Context, Result};
use datacheck_parser::parse_file;
use tracing::info;

use crate::output;

pub fn execute(contract_path: &str) -> Result<()> {
    info!("Checking contract definition: {}", contract_path);

    let contract = parse_file(Path::new(contract_path))
        .with_context(|| format!("Failed to load contract file: {contract_path}"))?;

    // Parsing already enforces required keys and unique field names.
    output::print_success("Contract definition is valid");

    println!("\nContract Summary:");
    println!("  Name:        {}", contract.name);
    println!(
        "  Owner:       {}",
        if contract.owner.is_empty() { "N/A" } else { &contract.owner }
    );
    println!(
        "  Description: {}",
        if contract.description.is_empty() { "N/A" } else { &contract.description }
    );
    println!("  Fields:      {}", contract.schema.len());

    for field in &contract.schema {
        let mut notes = Vec::new();
        if !field.nullable {
            notes.push("not null".to_string());
        }
        if let Some(min) = field.constraints.min {
            notes.push(format!("min {min}"));
        }
        if let Some(max) = field.constraints.max {
            notes.push(format!("max {max}"));
        }
        if let Some(allowed) = &field.constraints.allowed_values {
            notes.push(format!("{} allowed values", allowed.len()));
        }

        if notes.is_empty() {
            println!("    - {} ({})", field.name, field.field_type);
        } else {
            println!(
                "    - {} ({}, {})",
                field.name,
                field.field_type,
                notes.join(", ")
            );
        }
    }

    if !contract.pii.is_empty() {
        println!("  PII metadata: {} entries", contract.pii.len());
    }

    Ok(())
}
