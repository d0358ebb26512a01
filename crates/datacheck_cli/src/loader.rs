//! CSV dataset loader.
//!
//! Reads a headered CSV file into the columnar `Dataset` the engine
//! expects, inferring a scalar type per cell: empty cells become nulls,
//! then integer, float, and boolean parses are tried in order, and
//! anything else stays a string. Type conformance against the contract is
//! the engine's job, not the loader's.

use std::path::Path;

use anyhow::{Context, Result};
use datacheck_validator::{Column, DataValue, Dataset};

/// Loads a CSV file with a header row into a dataset.
pub fn load_csv(path: &Path) -> Result<Dataset> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open dataset file: {}", path.display()))?;

    let headers: Vec<String> = reader
        .headers()
        .context("Failed to read CSV header row")?
        .iter()
        .map(str::to_string)
        .collect();

    let mut columns: Vec<Vec<DataValue>> = vec![Vec::new(); headers.len()];
    for (row_idx, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("Failed to read CSV row {row_idx}"))?;
        for (col_idx, cell) in record.iter().enumerate() {
            if col_idx < columns.len() {
                columns[col_idx].push(infer_scalar(cell));
            }
        }
    }

    let columns = headers
        .into_iter()
        .zip(columns)
        .map(|(name, values)| Column::new(name, values))
        .collect();

    Dataset::from_columns(columns).context("Dataset is structurally unreadable")
}

/// Infers the scalar type of one CSV cell.
fn infer_scalar(cell: &str) -> DataValue {
    let trimmed = cell.trim();
    if trimmed.is_empty() {
        return DataValue::Null;
    }
    if let Ok(i) = trimmed.parse::<i64>() {
        return DataValue::Int(i);
    }
    if let Ok(x) = trimmed.parse::<f64>() {
        return DataValue::Float(x);
    }
    match trimmed {
        "true" | "True" => DataValue::Bool(true),
        "false" | "False" => DataValue::Bool(false),
        _ => DataValue::String(cell.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn csv_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_typed_columns() {
        let file = csv_file("id,age,score,active,note\nu1,34,1.5,true,hello\nu2,,2,false,\n");
        let dataset = load_csv(file.path()).unwrap();

        assert_eq!(dataset.width(), 5);
        assert_eq!(dataset.height(), 2);

        let age = dataset.column("age").unwrap();
        assert_eq!(age.values()[0], DataValue::Int(34));
        assert_eq!(age.values()[1], DataValue::Null);

        let score = dataset.column("score").unwrap();
        assert_eq!(score.values()[0], DataValue::Float(1.5));
        assert_eq!(score.values()[1], DataValue::Int(2));

        let active = dataset.column("active").unwrap();
        assert_eq!(active.values()[0], DataValue::Bool(true));

        let note = dataset.column("note").unwrap();
        assert_eq!(note.values()[0], DataValue::String("hello".to_string()));
        assert_eq!(note.values()[1], DataValue::Null);
    }

    #[test]
    fn scalar_inference_order() {
        assert_eq!(infer_scalar(""), DataValue::Null);
        assert_eq!(infer_scalar("12"), DataValue::Int(12));
        assert_eq!(infer_scalar("1.5"), DataValue::Float(1.5));
        assert_eq!(infer_scalar("true"), DataValue::Bool(true));
        assert_eq!(infer_scalar("False"), DataValue::Bool(false));
        assert_eq!(
            infer_scalar("a@b.co"),
            DataValue::String("a@b.co".to_string())
        );
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(load_csv(Path::new("does/not/exist.csv")).is_err());
    }
}
