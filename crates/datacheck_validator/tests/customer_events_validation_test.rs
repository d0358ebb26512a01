//! Integration tests for the validation engine.
//!
//! End-to-end scenarios with a complete contract and realistic datasets,
//! exercising structural checks, per-field checks, and PII classification
//! together in one run.

use datacheck_core::{Contract, ContractBuilder, FieldBuilder, FieldType, PiiLabel};
use datacheck_validator::{validate, Column, DataValue, Dataset};

/// A realistic customer-events contract covering every constraint kind.
fn customer_events_contract() -> Contract {
    ContractBuilder::new("customer_events")
        .description("Customer interaction events for analytics and ML")
        .owner("analytics-team")
        .field(
            FieldBuilder::new("event_id", FieldType::String)
                .nullable(false)
                .build(),
        )
        .field(
            FieldBuilder::new("customer_email", FieldType::String)
                .nullable(false)
                .build(),
        )
        .field(
            FieldBuilder::new("event_type", FieldType::String)
                .nullable(false)
                .allowed(["page_view", "purchase", "sign_up", "sign_out"])
                .build(),
        )
        .field(
            FieldBuilder::new("age", FieldType::Int)
                .min(0.0)
                .max(120.0)
                .build(),
        )
        .field(FieldBuilder::new("spend", FieldType::Float).min(0.0).build())
        .build()
}

fn conforming_dataset() -> Dataset {
    Dataset::from_columns(vec![
        Column::new("event_id", vec!["e1".into(), "e2".into(), "e3".into()]),
        Column::new(
            "customer_email",
            vec![
                "ada@example.com".into(),
                "grace@example.org".into(),
                "alan@example.net".into(),
            ],
        ),
        Column::new(
            "event_type",
            vec!["page_view".into(), "purchase".into(), "sign_up".into()],
        ),
        Column::new("age", vec![34i64.into(), DataValue::Null, 51i64.into()]),
        Column::new("spend", vec![0.0f64.into(), 129.9f64.into(), 15i64.into()]),
    ])
    .unwrap()
}

#[test]
fn conforming_dataset_passes_with_pii_flagged() {
    let contract = customer_events_contract();
    let dataset = conforming_dataset();

    let outcome = validate(&contract, &dataset);

    assert!(outcome.valid(), "errors: {:?}", outcome.error_messages());
    assert_eq!(outcome.findings.len(), 5);

    let email = outcome
        .findings
        .iter()
        .find(|f| f.field == "customer_email")
        .unwrap();
    assert_eq!(email.hits, vec![PiiLabel::Email]);
    assert_eq!(email.count, 3);

    let age = outcome.findings.iter().find(|f| f.field == "age").unwrap();
    assert!(age.hits.is_empty());
    assert_eq!(age.count, 2); // null excluded from the sample
}

#[test]
fn broken_dataset_reports_every_failure_in_one_run() {
    let contract = customer_events_contract();
    let dataset = Dataset::from_columns(vec![
        // event_id missing entirely
        Column::new(
            "customer_email",
            vec![DataValue::Null, "ada@example.com".into()],
        ),
        Column::new("event_type", vec!["teleport".into(), "purchase".into()]),
        Column::new("age", vec![150i64.into(), "abc".into()]),
        Column::new("spend", vec![(-4.5f64).into(), 10.0f64.into()]),
        Column::new("debug_flag", vec![true.into(), false.into()]),
    ])
    .unwrap();

    let outcome = validate(&contract, &dataset);
    assert!(!outcome.valid());

    let messages = outcome.error_messages();
    assert_eq!(
        messages,
        vec![
            "Missing columns: [event_id]".to_string(),
            "Extra columns: [debug_flag]".to_string(),
            "Nulls not allowed in customer_email".to_string(),
            "event_type has values outside allowed set".to_string(),
            "Type mismatch on age: expected int: cannot parse 'abc' as a number (row 1)"
                .to_string(),
            "age above max 120".to_string(),
            "spend below min 0".to_string(),
        ]
    );

    // PII findings still cover every present field, failures or not.
    assert_eq!(outcome.findings.len(), 4);
    assert!(outcome
        .findings
        .iter()
        .any(|f| f.field == "customer_email" && f.hits == vec![PiiLabel::Email]));
}

#[test]
fn phone_numbers_are_flagged_alongside_violations() {
    let contract = ContractBuilder::new("support_tickets")
        .field(FieldBuilder::new("callback", FieldType::String).nullable(false).build())
        .build();
    let dataset = Dataset::from_columns(vec![Column::new(
        "callback",
        vec!["+44 20 7946 0958".into(), DataValue::Null],
    )])
    .unwrap();

    let outcome = validate(&contract, &dataset);
    assert_eq!(
        outcome.error_messages(),
        vec!["Nulls not allowed in callback"]
    );
    assert_eq!(outcome.findings[0].hits, vec![PiiLabel::Phone]);
    assert_eq!(outcome.findings[0].count, 1);
}
