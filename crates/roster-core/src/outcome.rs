//! The result type every repository operation returns.
//!
//! An [`Outcome`] separates "the store answered, but no" (a [`Failure`]
//! carrying a caller-facing message) from faults, which travel as `Err` in
//! the surrounding `Result` where an operation propagates them.
//!
//! [`Failure`]: Outcome::Failure

use serde::Serialize;

/// Success with a typed payload, or failure with a message. Both carry the
/// store-reported processing cost when one is known.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
  Success { data: T, cost: Option<f64> },
  Failure { message: String, cost: Option<f64> },
}

impl<T> Outcome<T> {
  pub fn success(data: T, cost: f64) -> Self {
    Self::Success { data, cost: Some(cost) }
  }

  pub fn failure(message: impl Into<String>, cost: Option<f64>) -> Self {
    Self::Failure { message: message.into(), cost }
  }

  /// `"<user_name> already exists."`
  pub fn already_exists(user_name: &str, cost: Option<f64>) -> Self {
    Self::failure(format!("{user_name} already exists."), cost)
  }

  /// `"<user_name> does not exist."`
  pub fn does_not_exist(user_name: &str, cost: Option<f64>) -> Self {
    Self::failure(format!("{user_name} does not exist."), cost)
  }

  pub fn is_success(&self) -> bool { matches!(self, Self::Success { .. }) }

  pub fn cost(&self) -> Option<f64> {
    match self {
      Self::Success { cost, .. } | Self::Failure { cost, .. } => *cost,
    }
  }

  pub fn message(&self) -> Option<&str> {
    match self {
      Self::Success { .. } => None,
      Self::Failure { message, .. } => Some(message),
    }
  }

  pub fn data(&self) -> Option<&T> {
    match self {
      Self::Success { data, .. } => Some(data),
      Self::Failure { .. } => None,
    }
  }

  /// Collapse into `Ok(data)` or `Err(message)`, dropping the cost.
  pub fn into_result(self) -> Result<T, String> {
    match self {
      Self::Success { data, .. } => Ok(data),
      Self::Failure { message, .. } => Err(message),
    }
  }

  /// Flatten into the uniform `{success, cost, message, data}` shape.
  pub fn into_envelope(self) -> Envelope<T> {
    match self {
      Self::Success { data, cost } => Envelope {
        success: true,
        cost,
        message: None,
        data: Some(data),
      },
      Self::Failure { message, cost } => Envelope {
        success: false,
        cost,
        message: Some(message),
        data: None,
      },
    }
  }
}

/// Uniform serialised shape of an [`Outcome`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Envelope<T> {
  pub success: bool,
  pub cost:    Option<f64>,
  pub message: Option<String>,
  pub data:    Option<T>,
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  #[test]
  fn canned_messages() {
    let o: Outcome<()> = Outcome::already_exists("jdoe", Some(2.0));
    assert_eq!(o.message(), Some("jdoe already exists."));
    assert_eq!(o.cost(), Some(2.0));

    let o: Outcome<()> = Outcome::does_not_exist("jdoe", None);
    assert_eq!(o.message(), Some("jdoe does not exist."));
    assert!(!o.is_success());
  }

  #[test]
  fn envelope_shapes() {
    let ok = serde_json::to_value(Outcome::success("x", 1.5).into_envelope()).unwrap();
    assert_eq!(
      ok,
      json!({ "success": true, "cost": 1.5, "message": null, "data": "x" })
    );

    let err = serde_json::to_value(
      Outcome::<String>::does_not_exist("jdoe", None).into_envelope(),
    )
    .unwrap();
    assert_eq!(
      err,
      json!({
        "success": false,
        "cost": null,
        "message": "jdoe does not exist.",
        "data": null,
      })
    );
  }

  #[test]
  fn into_result_splits_variants() {
    assert_eq!(Outcome::success(1, 1.0).into_result(), Ok(1));
    assert_eq!(
      Outcome::<i32>::failure("nope", None).into_result(),
      Err("nope".to_string())
    );
  }
}
