//! Sample-based PII classifier.
//!
//! Scans a bounded sample of a column's textual representation for
//! sensitive patterns. This is a heuristic: a pattern first appearing
//! after the sample limit goes unseen, and an empty match list is never
//! proof of absence.

use std::sync::LazyLock;

use datacheck_core::{PiiFinding, PiiLabel};
use regex::Regex;
use tracing::debug;

use crate::dataset::Column;

/// Upper bound on the number of non-missing values examined per column.
pub const SAMPLE_LIMIT: usize = 200;

/// Email-address pattern: local part, `@`, domain with at least one dot,
/// letter-only top-level segment of length two or more.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\w.+-]+@[\w-]+\.[A-Za-z]{2,}").expect("valid email pattern"));

/// Phone-number pattern: optional leading `+`, a digit, then seven or more
/// digit/space/hyphen/parenthesis characters, bounded by word edges.
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\+?\d[\d\s()-]{7,}\b").expect("valid phone pattern"));

/// Classifies one column by scanning a bounded sample for PII patterns.
///
/// The first `SAMPLE_LIMIT` non-missing values in natural row order are
/// rendered to text and joined into a single blob; each pattern is applied
/// once against the blob. Labels are reported EMAIL before PHONE, each at
/// most once.
pub fn classify_column(field: &str, column: &Column) -> PiiFinding {
    let sample: Vec<String> = column
        .values()
        .iter()
        .filter(|v| !v.is_null())
        .take(SAMPLE_LIMIT)
        .map(|v| v.to_text())
        .collect();
    let blob = sample.join(" ");

    let mut hits = Vec::new();
    if EMAIL_RE.is_match(&blob) {
        hits.push(PiiLabel::Email);
    }
    if PHONE_RE.is_match(&blob) {
        hits.push(PiiLabel::Phone);
    }

    debug!(field, sampled = sample.len(), hits = hits.len(), "classified column");

    PiiFinding {
        field: field.to_string(),
        hits,
        count: sample.len(),
    }
}
