//! Data contract types and structures.
//!
//! This module contains the core types for defining data contracts: the
//! contract itself, per-field specifications, declared types, and value
//! constraints.

use std::collections::{BTreeMap, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ContractError, Result};

/// A data contract describing the expected shape and content of a dataset.
///
/// A `Contract` is a pure value object: it is loaded once per run from an
/// external source (YAML or TOML) and never mutated afterwards.
///
/// # Example
///
/// ```rust
/// use datacheck_core::{Contract, FieldSpec, FieldType};
///
/// let contract = Contract {
///     name: "customer_events".to_string(),
///     description: "Customer interaction events".to_string(),
///     owner: "analytics-team".to_string(),
///     schema: vec![FieldSpec::new("event_id", FieldType::String)],
///     pii: Default::default(),
/// };
/// assert!(contract.check_well_formed().is_ok());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contract {
    /// Unique name identifying this contract
    pub name: String,

    /// Human-readable description of the dataset
    #[serde(default)]
    pub description: String,

    /// Team or individual responsible for this contract
    #[serde(default)]
    pub owner: String,

    /// Ordered list of field specifications
    pub schema: Vec<FieldSpec>,

    /// Opaque PII/governance metadata carried alongside the schema
    #[serde(default)]
    pub pii: BTreeMap<String, serde_json::Value>,
}

impl Contract {
    /// Checks the structural invariants of the contract definition.
    ///
    /// A well-formed contract has at least one field and no two fields
    /// sharing a name. The parser runs this after deserialization;
    /// embedders constructing contracts in code can call it directly.
    pub fn check_well_formed(&self) -> Result<()> {
        if self.schema.is_empty() {
            return Err(ContractError::EmptySchema);
        }

        let mut seen = HashSet::new();
        for field in &self.schema {
            if !seen.insert(field.name.as_str()) {
                return Err(ContractError::DuplicateField(field.name.clone()));
            }
        }

        Ok(())
    }

    /// Returns the field names in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.schema.iter().map(|f| f.name.as_str())
    }
}

/// A single field specification in a contract schema.
///
/// Represents one expected column with its declared type, nullability,
/// and value constraints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Field name (unique within a contract)
    pub name: String,

    /// Declared type of the column
    #[serde(rename = "type")]
    pub field_type: FieldType,

    /// Whether the column may contain missing values
    #[serde(default = "default_nullable")]
    pub nullable: bool,

    /// Value constraints, all optional and AND-combined
    #[serde(default)]
    pub constraints: FieldConstraint,
}

fn default_nullable() -> bool {
    true
}

impl FieldSpec {
    /// Creates a nullable, unconstrained field specification.
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            nullable: true,
            constraints: FieldConstraint::default(),
        }
    }
}

/// The closed set of declared field types.
///
/// `Int` and `Float` columns require numeric coercion of every value;
/// the remaining types are accepted without coercion. Keeping the set
/// closed means an unrecognized type string is a load error rather than
/// a silently skipped check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// 64-bit integer
    Int,
    /// 64-bit float
    Float,
    /// UTF-8 string
    String,
    /// Boolean
    Bool,
    /// Timestamp (accepted without coercion)
    Timestamp,
}

impl FieldType {
    /// Returns the lowercase name used in contract sources and messages.
    pub fn name(&self) -> &'static str {
        match self {
            FieldType::Int => "int",
            FieldType::Float => "float",
            FieldType::String => "string",
            FieldType::Bool => "bool",
            FieldType::Timestamp => "timestamp",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Value constraints attached to a field.
///
/// Each bound is independently optional; an absent bound means the field
/// is unconstrained on that axis. When several constraints are present
/// they must all hold.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FieldConstraint {
    /// Minimum numeric value (inclusive)
    #[serde(default)]
    pub min: Option<f64>,

    /// Maximum numeric value (inclusive)
    #[serde(default)]
    pub max: Option<f64>,

    /// Set of permitted values
    #[serde(default)]
    pub allowed_values: Option<Vec<ScalarValue>>,
}

impl FieldConstraint {
    /// Returns true if no constraint is set.
    pub fn is_empty(&self) -> bool {
        self.min.is_none() && self.max.is_none() && self.allowed_values.is_none()
    }
}

/// A scalar literal appearing in an `allowed_values` list.
///
/// Contract sources may list allowed values of any scalar type; comparison
/// against column values goes through the canonical text form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScalarValue {
    /// Boolean literal
    Bool(bool),
    /// Integer literal
    Int(i64),
    /// Float literal
    Float(f64),
    /// String literal
    String(String),
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarValue::Bool(b) => write!(f, "{b}"),
            ScalarValue::Int(i) => write!(f, "{i}"),
            ScalarValue::Float(x) => write!(f, "{x}"),
            ScalarValue::String(s) => f.write_str(s),
        }
    }
}

impl From<&str> for ScalarValue {
    fn from(s: &str) -> Self {
        ScalarValue::String(s.to_string())
    }
}

impl From<i64> for ScalarValue {
    fn from(i: i64) -> Self {
        ScalarValue::Int(i)
    }
}

impl From<f64> for ScalarValue {
    fn from(x: f64) -> Self {
        ScalarValue::Float(x)
    }
}
