//! Contract loader for datacheck (YAML and TOML formats).
//!
//! Parses contract documents into the strongly-typed `Contract` structure
//! and enforces the definition invariants (required keys present, no
//! duplicate field names). Any failure here is fatal: validation never
//! starts from a malformed contract.
//!
//! # Example
//!
//! ```rust
//! use datacheck_parser::parse_yaml;
//!
//! let yaml = r#"
//! name: customer_events
//! owner: analytics-team
//! schema:
//!   - name: customer_id
//!     type: string
//!     nullable: false
//!   - name: age
//!     type: int
//!     constraints:
//!       min: 0
//!       max: 120
//! "#;
//!
//! let contract = parse_yaml(yaml).expect("valid contract");
//! assert_eq!(contract.name, "customer_events");
//! assert_eq!(contract.schema.len(), 2);
//! ```

use std::path::Path;

use datacheck_core::{Contract, ContractError};
use thiserror::Error;

/// Errors that can occur while loading a contract.
#[derive(Debug, Error)]
pub enum ParserError {
    /// YAML parsing or deserialization failed
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// TOML parsing or deserialization failed
    #[error("Failed to parse TOML: {0}")]
    Toml(String),

    /// The document parsed but breaks a contract invariant
    #[error("Invalid contract: {0}")]
    InvalidContract(#[from] ContractError),

    /// File I/O error
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Unsupported file format
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// Invalid file extension
    #[error("Invalid or missing file extension")]
    InvalidExtension,
}

/// Result type alias for parser operations.
pub type Result<T> = std::result::Result<T, ParserError>;

/// Supported contract file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContractFormat {
    /// YAML format (.yml, .yaml)
    Yaml,
    /// TOML format (.toml)
    Toml,
}

/// Parses a contract from a YAML string.
///
/// # Example
///
/// ```rust
/// use datacheck_parser::parse_yaml;
///
/// let yaml = r#"
/// name: orders
/// schema:
///   - name: order_id
///     type: string
/// "#;
///
/// let contract = parse_yaml(yaml).unwrap();
/// assert_eq!(contract.name, "orders");
/// assert!(contract.schema[0].nullable);
/// ```
pub fn parse_yaml(content: &str) -> Result<Contract> {
    let contract: Contract = serde_yaml_ng::from_str(content)?;
    contract.check_well_formed()?;
    Ok(contract)
}

/// Parses a contract from a TOML string.
///
/// # Example
///
/// ```rust
/// use datacheck_parser::parse_toml;
///
/// let toml = r#"
/// name = "orders"
/// owner = "data-team"
///
/// [[schema]]
/// name = "order_id"
/// type = "string"
/// nullable = false
/// "#;
///
/// let contract = parse_toml(toml).unwrap();
/// assert_eq!(contract.owner, "data-team");
/// ```
pub fn parse_toml(content: &str) -> Result<Contract> {
    let contract: Contract =
        toml::from_str(content).map_err(|e| ParserError::Toml(e.to_string()))?;
    contract.check_well_formed()?;
    Ok(contract)
}

/// Detects the contract format from a file path based on its extension.
///
/// # Errors
///
/// Returns `ParserError::InvalidExtension` if the file has no extension,
/// or `ParserError::UnsupportedFormat` if the extension is not recognized.
pub fn detect_format(path: &Path) -> Result<ContractFormat> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .ok_or(ParserError::InvalidExtension)?;

    match extension.to_lowercase().as_str() {
        "yaml" | "yml" => Ok(ContractFormat::Yaml),
        "toml" => Ok(ContractFormat::Toml),
        other => Err(ParserError::UnsupportedFormat(other.to_string())),
    }
}

/// Parses a contract from a file with automatic format detection.
///
/// # Example
///
/// ```no_run
/// use datacheck_parser::parse_file;
/// use std::path::Path;
///
/// let contract = parse_file(Path::new("contracts/customer_events.yml")).unwrap();
/// println!("Loaded contract: {}", contract.name);
/// ```
pub fn parse_file(path: &Path) -> Result<Contract> {
    let content = std::fs::read_to_string(path)?;
    let format = detect_format(path)?;

    match format {
        ContractFormat::Yaml => parse_yaml(&content),
        ContractFormat::Toml => parse_toml(&content),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use datacheck_core::{FieldType, ScalarValue};
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_minimal_yaml() {
        let yaml = r#"
name: test_contract
schema:
  - name: id
    type: string
"#;

        let contract = parse_yaml(yaml).expect("Failed to parse valid YAML");

        assert_eq!(contract.name, "test_contract");
        assert_eq!(contract.description, "");
        assert_eq!(contract.owner, "");
        assert!(contract.pii.is_empty());
        assert_eq!(contract.schema.len(), 1);
        assert_eq!(contract.schema[0].field_type, FieldType::String);
        assert!(contract.schema[0].nullable);
        assert!(contract.schema[0].constraints.is_empty());
    }

    #[test]
    fn parse_yaml_with_constraints_and_pii_block() {
        let yaml = r#"
name: customer_events
description: Customer interaction events
owner: analytics-team
pii:
  review_required: true
schema:
  - name: customer_id
    type: string
    nullable: false
  - name: age
    type: int
    constraints:
      min: 0
      max: 120
  - name: tier
    type: string
    constraints:
      allowed_values: [bronze, silver, gold]
  - name: score
    type: float
    constraints:
      allowed_values: [1, 2.5]
"#;

        let contract = parse_yaml(yaml).expect("Failed to parse YAML with constraints");

        assert_eq!(contract.owner, "analytics-team");
        assert_eq!(contract.pii.len(), 1);

        let age = &contract.schema[1];
        assert_eq!(age.field_type, FieldType::Int);
        assert_eq!(age.constraints.min, Some(0.0));
        assert_eq!(age.constraints.max, Some(120.0));

        let tier = &contract.schema[2];
        let allowed = tier.constraints.allowed_values.as_ref().unwrap();
        assert_eq!(allowed[2], ScalarValue::String("gold".to_string()));

        let score = &contract.schema[3];
        let allowed = score.constraints.allowed_values.as_ref().unwrap();
        assert_eq!(allowed[0], ScalarValue::Int(1));
        assert_eq!(allowed[1], ScalarValue::Float(2.5));
    }

    #[test]
    fn missing_name_is_an_error() {
        let yaml = r#"
schema:
  - name: id
    type: string
"#;
        let result = parse_yaml(yaml);
        assert!(matches!(result.unwrap_err(), ParserError::Yaml(_)));
    }

    #[test]
    fn missing_schema_is_an_error() {
        let yaml = "name: test\n";
        assert!(parse_yaml(yaml).is_err());
    }

    #[test]
    fn schema_entry_without_type_is_an_error() {
        let yaml = r#"
name: test
schema:
  - name: id
"#;
        assert!(parse_yaml(yaml).is_err());
    }

    #[test]
    fn unknown_type_string_is_an_error() {
        let yaml = r#"
name: test
schema:
  - name: id
    type: decimal128
"#;
        assert!(matches!(parse_yaml(yaml).unwrap_err(), ParserError::Yaml(_)));
    }

    #[test]
    fn duplicate_field_names_are_an_error() {
        let yaml = r#"
name: test
schema:
  - name: id
    type: string
  - name: id
    type: int
"#;
        let result = parse_yaml(yaml);
        assert!(matches!(
            result.unwrap_err(),
            ParserError::InvalidContract(ContractError::DuplicateField(_))
        ));
    }

    #[test]
    fn parse_minimal_toml() {
        let toml = r#"
name = "toml_contract"
owner = "data-team"

[[schema]]
name = "id"
type = "string"
nullable = false

[[schema]]
name = "amount"
type = "float"

[schema.constraints]
min = 0.0
"#;

        let contract = parse_toml(toml).expect("Failed to parse valid TOML");

        assert_eq!(contract.name, "toml_contract");
        assert_eq!(contract.schema.len(), 2);
        assert!(!contract.schema[0].nullable);
        assert_eq!(contract.schema[1].constraints.min, Some(0.0));
    }

    #[test]
    fn parse_invalid_toml() {
        let invalid = "name = \"test\"\n[[[broken";
        assert!(matches!(
            parse_toml(invalid).unwrap_err(),
            ParserError::Toml(_)
        ));
    }

    #[test]
    fn detect_format_by_extension() {
        assert_eq!(
            detect_format(Path::new("c.yaml")).unwrap(),
            ContractFormat::Yaml
        );
        assert_eq!(
            detect_format(Path::new("c.yml")).unwrap(),
            ContractFormat::Yaml
        );
        assert_eq!(
            detect_format(Path::new("c.toml")).unwrap(),
            ContractFormat::Toml
        );
    }

    #[test]
    fn detect_format_rejects_unknown_and_missing_extensions() {
        assert!(matches!(
            detect_format(Path::new("c.json")).unwrap_err(),
            ParserError::UnsupportedFormat(_)
        ));
        assert!(matches!(
            detect_format(Path::new("contract")).unwrap_err(),
            ParserError::InvalidExtension
        ));
    }

    #[test]
    fn round_trip_yaml() {
        let yaml = r#"
name: round_trip
schema:
  - name: id
    type: string
    nullable: false
"#;
        let original = parse_yaml(yaml).unwrap();
        let serialized = serde_yaml_ng::to_string(&original).unwrap();
        let parsed = parse_yaml(&serialized).unwrap();

        assert_eq!(parsed.name, original.name);
        assert_eq!(parsed.schema.len(), original.schema.len());
        assert_eq!(parsed.schema[0].nullable, original.schema[0].nullable);
    }
}
