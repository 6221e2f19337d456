//! # Diagnostics
//!
//! Non-fatal reports produced by calculation operations. A diagnostic never
//! aborts anything: the operation that detects the condition returns it next
//! to its normal result and the caller decides what to do with it.
//!
//! There is no shared accumulator. Every list is owned by the caller that
//! received it, so a later scan cannot see stale entries from an earlier one.

use serde::{Deserialize, Serialize};

/// A single usability report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Diagnostic {
    /// A key in a loosely-typed input does not name a known field. It was ignored.
    UnrecognizedField { field: String, allowed: Vec<String> },

    /// A field has not been supplied or could not be derived yet
    UnresolvedField { field: String },

    /// The weighted moment sum about the weld group is zero
    SymmetryCondition { moment_sum: f64 },

    /// A circular weld group is using the default radius of 1.0
    DefaultRadius { group: String },
}

impl Diagnostic {
    /// Human-readable message for console output
    pub fn message(&self) -> String {
        match self {
            Diagnostic::UnrecognizedField { field, allowed } => {
                format!("Unrecognized field '{}' ignored (allowed: {})", field, allowed.join(", "))
            }
            Diagnostic::UnresolvedField { field } => format!("{} still needs a value", field),
            Diagnostic::SymmetryCondition { moment_sum } => format!(
                "Sum of moments about the weld group is {}; the structure is symmetric, secondary shear skipped",
                moment_sum
            ),
            Diagnostic::DefaultRadius { group } => format!(
                "{} is a circular weld using the default radius r = 1.0; pass a radius override to change it",
                group
            ),
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

/// Ordered list of diagnostics returned by one operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Diagnostics(Vec<Diagnostic>);

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.0.push(diagnostic);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.0.iter()
    }

    /// Names of every unresolved field, in report order
    pub fn unresolved_fields(&self) -> Vec<&str> {
        self.0
            .iter()
            .filter_map(|d| match d {
                Diagnostic::UnresolvedField { field } => Some(field.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FromIterator<Diagnostic> for Diagnostics {
    fn from_iter<I: IntoIterator<Item = Diagnostic>>(iter: I) -> Self {
        Diagnostics(iter.into_iter().collect())
    }
}
