//! Builder pattern for creating data contracts.
//!
//! Fluent constructors for contracts and field specifications, mainly for
//! tests and programmatic embedding; file-based loading lives in the
//! parser crate.

use crate::contract::{Contract, FieldConstraint, FieldSpec, FieldType, ScalarValue};

/// Builder for creating a `Contract`.
///
/// # Example
///
/// ```rust
/// use datacheck_core::{ContractBuilder, FieldBuilder, FieldType};
///
/// let contract = ContractBuilder::new("customer_events")
///     .owner("analytics-team")
///     .description("Customer interaction events")
///     .field(FieldBuilder::new("event_id", FieldType::String).nullable(false).build())
///     .build();
/// assert_eq!(contract.schema.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct ContractBuilder {
    name: Option<String>,
    description: Option<String>,
    owner: Option<String>,
    fields: Vec<FieldSpec>,
}

impl ContractBuilder {
    /// Creates a new contract builder.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    /// Sets the contract description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the contract owner.
    pub fn owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    /// Adds a field to the schema.
    pub fn field(mut self, field: FieldSpec) -> Self {
        self.fields.push(field);
        self
    }

    /// Builds the contract.
    ///
    /// # Panics
    ///
    /// Panics if the name was not set.
    pub fn build(self) -> Contract {
        Contract {
            name: self.name.expect("name is required"),
            description: self.description.unwrap_or_default(),
            owner: self.owner.unwrap_or_default(),
            schema: self.fields,
            pii: Default::default(),
        }
    }
}

/// Builder for creating a `FieldSpec`.
///
/// # Example
///
/// ```rust
/// use datacheck_core::{FieldBuilder, FieldType};
///
/// let age = FieldBuilder::new("age", FieldType::Int)
///     .nullable(false)
///     .min(0.0)
///     .max(120.0)
///     .build();
/// assert!(!age.nullable);
/// ```
#[derive(Debug)]
pub struct FieldBuilder {
    name: String,
    field_type: FieldType,
    nullable: bool,
    constraints: FieldConstraint,
}

impl FieldBuilder {
    /// Creates a new field builder. Fields default to nullable and
    /// unconstrained.
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            nullable: true,
            constraints: FieldConstraint::default(),
        }
    }

    /// Sets whether the field may contain missing values.
    pub fn nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    /// Sets the inclusive minimum.
    pub fn min(mut self, min: f64) -> Self {
        self.constraints.min = Some(min);
        self
    }

    /// Sets the inclusive maximum.
    pub fn max(mut self, max: f64) -> Self {
        self.constraints.max = Some(max);
        self
    }

    /// Sets the allowed-value set.
    pub fn allowed<V: Into<ScalarValue>>(mut self, values: impl IntoIterator<Item = V>) -> Self {
        self.constraints.allowed_values = Some(values.into_iter().map(Into::into).collect());
        self
    }

    /// Builds the field specification.
    pub fn build(self) -> FieldSpec {
        FieldSpec {
            name: self.name,
            field_type: self.field_type,
            nullable: self.nullable,
            constraints: self.constraints,
        }
    }
}
