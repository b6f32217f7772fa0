//! One handler per route, plus the helpers they share.

pub mod add;
pub mod delete;
pub mod get;
pub mod update;

use roster_core::{Outcome, PersonView};
use serde::Serialize;

use crate::error::ApiError;

/// `{"message": ..., "data": ...}`; `data` is omitted when empty.
#[derive(Debug, Serialize)]
pub struct Reply<T> {
  pub message: &'static str,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub data:    Option<T>,
}

impl<T> Reply<T> {
  pub fn with_data(message: &'static str, data: T) -> Self {
    Self { message, data: Some(data) }
  }
}

impl Reply<()> {
  pub fn message(message: &'static str) -> Self { Self { message, data: None } }
}

/// Parse a request body into a [`PersonView`].
pub(crate) fn parse_view(body: &[u8]) -> Result<PersonView, ApiError> {
  if body.iter().all(u8::is_ascii_whitespace) {
    return Err(ApiError::BadRequest("Request body is required.".to_owned()));
  }
  serde_json::from_slice(body).map_err(|e| ApiError::BadRequest(e.to_string()))
}

/// Log the outcome's cost and unwrap its payload; a failure becomes
/// [`ApiError::Rejected`] carrying the repository's message verbatim.
pub(crate) fn settle<T>(op: &'static str, outcome: Outcome<T>) -> Result<T, ApiError> {
  tracing::debug!(op, cost = ?outcome.cost(), success = outcome.is_success(), "repository outcome");
  outcome.into_result().map_err(ApiError::Rejected)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn empty_and_blank_bodies_are_rejected() {
    for body in [&b""[..], &b"  \n"[..]] {
      let err = parse_view(body).unwrap_err();
      assert_eq!(err.to_string(), "Request body is required.");
    }
  }

  #[test]
  fn malformed_json_reports_parser_message() {
    let err = parse_view(b"{not json").unwrap_err();
    assert!(matches!(err, ApiError::BadRequest(_)));
    assert!(!err.to_string().is_empty());
  }

  #[test]
  fn reply_omits_missing_data() {
    let json = serde_json::to_value(Reply::message("done")).unwrap();
    assert_eq!(json, serde_json::json!({ "message": "done" }));
  }

  #[test]
  fn settle_maps_failure_to_rejected() {
    let err = settle::<()>("get", Outcome::does_not_exist("jdoe", None)).unwrap_err();
    assert!(matches!(err, ApiError::Rejected(ref m) if m == "jdoe does not exist."));
  }
}
