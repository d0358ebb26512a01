//! Validation engine.
//!
//! Turns a contract plus a dataset into an ordered list of violations and
//! per-field PII findings. The engine is a pure function over its inputs:
//! deterministic, total, and read-only. Violations accumulate; nothing
//! short-circuits, so one run reports every failing check.

use std::collections::HashSet;

use datacheck_core::{Contract, FieldSpec, FieldType, PiiFinding};
use tracing::debug;

use crate::dataset::{Column, DataValue, Dataset};
use crate::error::Violation;
use crate::pii::classify_column;

/// Result of validating one dataset against one contract.
///
/// Constructed once per run and immutable after assembly. Violation order
/// is fixed: structural checks first, then per-field checks in
/// contract-declaration order. Findings follow declaration order too, so
/// reports are reproducible regardless of how checks are scheduled.
#[derive(Debug, Clone)]
pub struct ValidationOutcome {
    /// Name of the validated contract
    pub contract: String,
    /// All rule failures found, in reporting order
    pub violations: Vec<Violation>,
    /// PII findings for every contract field present in the dataset
    pub findings: Vec<PiiFinding>,
}

impl ValidationOutcome {
    /// True iff no violation was found.
    pub fn valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// Violations rendered as report error strings.
    pub fn error_messages(&self) -> Vec<String> {
        self.violations.iter().map(ToString::to_string).collect()
    }
}

/// Validates a dataset against a contract.
///
/// Runs the structural column-presence checks, then the per-field type,
/// nullability, allowed-value and range checks in contract-declaration
/// order, then classifies every present field for PII. Fields absent from
/// the dataset are reported once structurally and skipped by the
/// per-field checks to avoid cascading noise.
///
/// # Example
///
/// ```rust
/// use datacheck_core::{ContractBuilder, FieldBuilder, FieldType};
/// use datacheck_validator::{validate, Column, Dataset};
///
/// let contract = ContractBuilder::new("orders")
///     .field(FieldBuilder::new("amount", FieldType::Float).min(0.0).build())
///     .build();
/// let dataset = Dataset::from_columns(vec![
///     Column::new("amount", vec![12.5f64.into(), (-3.0f64).into()]),
/// ]).unwrap();
///
/// let outcome = validate(&contract, &dataset);
/// assert!(!outcome.valid());
/// assert_eq!(outcome.error_messages(), vec!["amount below min 0"]);
/// ```
pub fn validate(contract: &Contract, dataset: &Dataset) -> ValidationOutcome {
    let mut violations = Vec::new();

    debug!(
        contract = %contract.name,
        fields = contract.schema.len(),
        columns = dataset.width(),
        rows = dataset.height(),
        "validating dataset"
    );

    // Structural checks: compared as sets, reported in a fixed order.
    let expected: HashSet<&str> = contract.field_names().collect();

    let missing: Vec<String> = contract
        .field_names()
        .filter(|name| dataset.column(name).is_none())
        .map(str::to_string)
        .collect();
    if !missing.is_empty() {
        violations.push(Violation::MissingColumns { columns: missing });
    }

    let extra: Vec<String> = dataset
        .column_names()
        .filter(|name| !expected.contains(name))
        .map(str::to_string)
        .collect();
    if !extra.is_empty() {
        violations.push(Violation::ExtraColumns { columns: extra });
    }

    // Per-field checks, declaration order, present fields only.
    for field in &contract.schema {
        let Some(column) = dataset.column(&field.name) else {
            continue;
        };
        violations.extend(check_field(field, column));
    }

    // PII findings for every present field, independent of check outcomes.
    let findings: Vec<PiiFinding> = contract
        .schema
        .iter()
        .filter_map(|field| {
            dataset
                .column(&field.name)
                .map(|column| classify_column(&field.name, column))
        })
        .collect();

    debug!(
        contract = %contract.name,
        violations = violations.len(),
        findings = findings.len(),
        "validation finished"
    );

    ValidationOutcome {
        contract: contract.name.clone(),
        violations,
        findings,
    }
}

/// Runs every per-field check on one column. At most one violation per
/// category, however many rows trip it.
fn check_field(field: &FieldSpec, column: &Column) -> Vec<Violation> {
    let mut violations = Vec::new();

    if let Some(detail) = coercion_failure(field.field_type, column) {
        violations.push(Violation::TypeMismatch {
            field: field.name.clone(),
            expected: field.field_type.name().to_string(),
            detail,
        });
    }

    if !field.nullable && column.has_nulls() {
        violations.push(Violation::NullsNotAllowed {
            field: field.name.clone(),
        });
    }

    if let Some(allowed) = &field.constraints.allowed_values {
        // Canonical text comparison; nulls are excluded, a null is never
        // "outside the set".
        let allowed: HashSet<String> = allowed.iter().map(ToString::to_string).collect();
        let outside = column
            .values()
            .iter()
            .filter(|v| !v.is_null())
            .any(|v| !allowed.contains(&v.to_text()));
        if outside {
            violations.push(Violation::OutsideAllowedSet {
                field: field.name.clone(),
            });
        }
    }

    if let Some(min) = field.constraints.min {
        if numeric_values(column).any(|x| x < min) {
            violations.push(Violation::BelowMin {
                field: field.name.clone(),
                min,
            });
        }
    }

    if let Some(max) = field.constraints.max {
        if numeric_values(column).any(|x| x > max) {
            violations.push(Violation::AboveMax {
                field: field.name.clone(),
                max,
            });
        }
    }

    violations
}

/// Numeric view of a column for range checks. Values with no numeric
/// form are skipped here; when the declared type is numeric the type
/// check has already reported them.
fn numeric_values(column: &Column) -> impl Iterator<Item = f64> + '_ {
    column.values().iter().filter_map(DataValue::as_f64)
}

/// Attempts to coerce every non-null value to the declared type and
/// describes the first failure. Only `int` and `float` require coercion;
/// the remaining declared types accept any value.
fn coercion_failure(field_type: FieldType, column: &Column) -> Option<String> {
    let check: fn(&DataValue) -> Option<String> = match field_type {
        FieldType::Int => int_coercion_error,
        FieldType::Float => float_coercion_error,
        FieldType::String | FieldType::Bool | FieldType::Timestamp => return None,
    };

    column
        .values()
        .iter()
        .enumerate()
        .filter(|(_, v)| !v.is_null())
        .find_map(|(row, v)| check(v).map(|reason| format!("{reason} (row {row})")))
}

fn int_coercion_error(value: &DataValue) -> Option<String> {
    match value {
        DataValue::Null | DataValue::Int(_) | DataValue::Bool(_) => None,
        DataValue::Float(x) if x.fract() == 0.0 => None,
        DataValue::Float(x) => Some(format!("fractional value {x} is not an integer")),
        DataValue::String(s) => match s.trim().parse::<f64>() {
            Ok(x) if x.fract() == 0.0 => None,
            Ok(x) => Some(format!("fractional value {x} is not an integer")),
            Err(_) => Some(format!("cannot parse '{s}' as a number")),
        },
    }
}

fn float_coercion_error(value: &DataValue) -> Option<String> {
    match value {
        DataValue::Null | DataValue::Int(_) | DataValue::Float(_) | DataValue::Bool(_) => None,
        DataValue::String(s) => {
            if s.trim().parse::<f64>().is_ok() {
                None
            } else {
                Some(format!("cannot parse '{s}' as a number"))
            }
        }
    }
}
