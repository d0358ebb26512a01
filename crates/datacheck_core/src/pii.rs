//! Shared PII finding types.
//!
//! The classifier itself lives in the validator crate; the finding types
//! live here because report assembly and tag suggestion consume them too.

use serde::{Deserialize, Serialize};

/// The closed set of sensitive patterns the classifier recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PiiLabel {
    /// Email-address pattern
    Email,
    /// Phone-number pattern
    Phone,
}

impl PiiLabel {
    /// Returns the label as it appears in report artifacts.
    pub fn as_str(&self) -> &'static str {
        match self {
            PiiLabel::Email => "EMAIL",
            PiiLabel::Phone => "PHONE",
        }
    }
}

/// Result of scanning one column for sensitive patterns.
///
/// `count` is the number of non-missing values actually examined, bounded
/// by the classifier's sample limit. An empty `hits` list on a small
/// sample is not proof of absence; the classifier is a heuristic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PiiFinding {
    /// Column name
    pub field: String,

    /// Matched pattern labels, EMAIL before PHONE, each at most once
    pub hits: Vec<PiiLabel>,

    /// Number of sampled non-missing values
    pub count: usize,
}

impl PiiFinding {
    /// Returns true if any sensitive pattern matched.
    pub fn is_sensitive(&self) -> bool {
        !self.hits.is_empty()
    }
}
