//! Default governance tag policy.
//!
//! The engine treats tag suggestion as an opaque collaborator; this is the
//! policy the CLI ships. Embedders can swap in their own `TagSuggester`.

use datacheck_core::{PiiFinding, PiiLabel, TagSuggester};

/// Tags datasets from their PII findings: a blanket `pii` tag when any
/// field matched a sensitive pattern, plus one tag per pattern kind seen
/// anywhere in the dataset. Output order is fixed.
pub struct GovernanceTagSuggester;

impl TagSuggester for GovernanceTagSuggester {
    fn suggest_tags(&self, findings: &[PiiFinding]) -> Vec<String> {
        let mut tags = Vec::new();

        if findings.iter().any(PiiFinding::is_sensitive) {
            tags.push("pii".to_string());
        }
        if findings.iter().any(|f| f.hits.contains(&PiiLabel::Email)) {
            tags.push("pii:email".to_string());
        }
        if findings.iter().any(|f| f.hits.contains(&PiiLabel::Phone)) {
            tags.push("pii:phone".to_string());
        }

        tags
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn finding(field: &str, hits: Vec<PiiLabel>) -> PiiFinding {
        PiiFinding {
            field: field.to_string(),
            hits,
            count: 10,
        }
    }

    #[test]
    fn clean_findings_suggest_nothing() {
        let tags = GovernanceTagSuggester.suggest_tags(&[finding("age", vec![])]);
        assert!(tags.is_empty());
    }

    #[test]
    fn labels_map_to_tags() {
        let tags = GovernanceTagSuggester.suggest_tags(&[
            finding("email", vec![PiiLabel::Email]),
            finding("phone", vec![PiiLabel::Phone]),
            finding("age", vec![]),
        ]);
        assert_eq!(tags, vec!["pii", "pii:email", "pii:phone"]);
    }

    #[test]
    fn duplicate_labels_yield_one_tag() {
        let tags = GovernanceTagSuggester.suggest_tags(&[
            finding("work_email", vec![PiiLabel::Email]),
            finding("home_email", vec![PiiLabel::Email]),
        ]);
        assert_eq!(tags, vec!["pii", "pii:email"]);
    }
}
