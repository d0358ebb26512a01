//! Dataset representation for validation.
//!
//! A dataset is a rectangular table: an ordered list of named columns of
//! equal length. The engine only needs column lookup by name and per-column
//! value iteration with a distinguishable missing marker, so this stays
//! deliberately small; loading from storage is the caller's concern.

use std::fmt;

use crate::error::DatasetError;

/// A single cell value in a dataset.
#[derive(Debug, Clone, PartialEq)]
pub enum DataValue {
    /// Missing value
    Null,
    /// Boolean value
    Bool(bool),
    /// Integer value
    Int(i64),
    /// Floating point value
    Float(f64),
    /// String value
    String(String),
}

impl DataValue {
    /// Returns true if this value is missing.
    pub fn is_null(&self) -> bool {
        matches!(self, DataValue::Null)
    }

    /// Numeric view of this value, if it has one.
    ///
    /// Booleans count as 0/1, matching the coercion behavior of the
    /// numeric type checks. Strings are not parsed here.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            DataValue::Int(i) => Some(*i as f64),
            DataValue::Float(x) => Some(*x),
            DataValue::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            _ => None,
        }
    }

    /// Canonical text rendering, used by the PII sampler and for
    /// allowed-value comparison. Null renders as the empty string.
    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for DataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataValue::Null => Ok(()),
            DataValue::Bool(b) => write!(f, "{b}"),
            DataValue::Int(i) => write!(f, "{i}"),
            DataValue::Float(x) => write!(f, "{x}"),
            DataValue::String(s) => f.write_str(s),
        }
    }
}

impl From<&str> for DataValue {
    fn from(s: &str) -> Self {
        DataValue::String(s.to_string())
    }
}

impl From<String> for DataValue {
    fn from(s: String) -> Self {
        DataValue::String(s)
    }
}

impl From<i64> for DataValue {
    fn from(i: i64) -> Self {
        DataValue::Int(i)
    }
}

impl From<f64> for DataValue {
    fn from(x: f64) -> Self {
        DataValue::Float(x)
    }
}

impl From<bool> for DataValue {
    fn from(b: bool) -> Self {
        DataValue::Bool(b)
    }
}

/// A named column of values in natural row order.
#[derive(Debug, Clone)]
pub struct Column {
    name: String,
    values: Vec<DataValue>,
}

impl Column {
    /// Creates a column from a name and values.
    pub fn new(name: impl Into<String>, values: Vec<DataValue>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// Column name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Values in natural row order.
    pub fn values(&self) -> &[DataValue] {
        &self.values
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the column has no rows.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns true if any value is missing.
    pub fn has_nulls(&self) -> bool {
        self.values.iter().any(DataValue::is_null)
    }
}

/// A rectangular table of named columns.
///
/// Column order follows insertion order (for CSV input, header order) and
/// only matters for reporting; the join key against a contract is the
/// column name.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    columns: Vec<Column>,
}

impl Dataset {
    /// Creates an empty dataset with no columns.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a dataset from columns.
    ///
    /// # Errors
    ///
    /// Returns `DatasetError` if two columns share a name or the columns
    /// have differing lengths; such input is structurally unreadable and
    /// validation never starts on it.
    pub fn from_columns(columns: Vec<Column>) -> Result<Self, DatasetError> {
        if let Some(first) = columns.first() {
            let expected = first.len();
            for column in &columns {
                if column.len() != expected {
                    return Err(DatasetError::RaggedColumn {
                        name: column.name.clone(),
                        actual: column.len(),
                        expected,
                    });
                }
            }
        }

        let mut seen = std::collections::HashSet::new();
        for column in &columns {
            if !seen.insert(column.name.as_str()) {
                return Err(DatasetError::DuplicateColumn(column.name.clone()));
            }
        }

        Ok(Self { columns })
    }

    /// Looks up a column by name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Column names in table order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.columns.first().map_or(0, Column::len)
    }
}
