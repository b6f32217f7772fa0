//! Error types for `roster-core`.

use thiserror::Error;

/// A single failed validation rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
  /// Wire name of the offending field, e.g. `"phoneNumber"`.
  pub field:   &'static str,
  pub message: &'static str,
}

/// Every rule a record failed, collected in rule order.
///
/// Displays as the rule messages joined by newlines. The list of offending
/// fields is available separately through [`ValidationError::fields_summary`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", join_messages(.violations))]
pub struct ValidationError {
  violations: Vec<Violation>,
}

impl ValidationError {
  pub(crate) fn new(violations: Vec<Violation>) -> Self { Self { violations } }

  pub fn violations(&self) -> &[Violation] { &self.violations }

  /// Wire names of the offending fields, deduplicated, in rule order.
  pub fn fields(&self) -> Vec<&'static str> {
    let mut fields: Vec<&'static str> = Vec::with_capacity(self.violations.len());
    for v in &self.violations {
      if !fields.contains(&v.field) {
        fields.push(v.field);
      }
    }
    fields
  }

  /// `"Error validating the following fields: userName,email"`
  pub fn fields_summary(&self) -> String {
    format!(
      "Error validating the following fields: {}",
      self.fields().join(",")
    )
  }
}

fn join_messages(violations: &[Violation]) -> String {
  violations
    .iter()
    .map(|v| v.message)
    .collect::<Vec<_>>()
    .join("\n")
}
