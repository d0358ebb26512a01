//! Tag-suggestion collaborator seam.
//!
//! The validation engine guarantees only that a complete per-field PII
//! findings list reaches the suggester; the tagging policy itself is an
//! external concern.

use crate::pii::PiiFinding;

/// Proposes governance tags from PII findings.
///
/// Implementations must be pure: the same findings always yield the same
/// tags, in a deterministic order.
///
/// # Example
///
/// ```rust
/// use datacheck_core::{PiiFinding, TagSuggester};
///
/// struct FlagEverything;
///
/// impl TagSuggester for FlagEverything {
///     fn suggest_tags(&self, findings: &[PiiFinding]) -> Vec<String> {
///         findings
///             .iter()
///             .filter(|f| f.is_sensitive())
///             .map(|f| format!("review:{}", f.field))
///             .collect()
///     }
/// }
/// ```
pub trait TagSuggester {
    /// Returns suggested tags for the given findings.
    fn suggest_tags(&self, findings: &[PiiFinding]) -> Vec<String>;
}
