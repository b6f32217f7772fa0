//! API error type and [`axum::response::IntoResponse`] implementation.
//!
//! Every variant answers `400 Bad Request` with the error text as a plain
//! body, storage faults included. Callers cannot tell an infrastructure
//! fault from bad input by status alone; the log line can.

use axum::{
  http::StatusCode,
  response::{IntoResponse, Response},
};
use roster_core::ValidationError;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  /// Missing or unparseable request input.
  #[error("{0}")]
  BadRequest(String),

  #[error(transparent)]
  Validation(#[from] ValidationError),

  /// The repository answered with a failure outcome.
  #[error("{0}")]
  Rejected(String),

  #[error("{0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    match &self {
      ApiError::Validation(e) => {
        tracing::warn!(fields = %e.fields_summary(), "validation failed");
      }
      ApiError::Store(e) => tracing::error!(error = %e, "store fault"),
      ApiError::BadRequest(m) | ApiError::Rejected(m) => {
        tracing::info!(reason = %m, "request rejected");
      }
    }
    (StatusCode::BAD_REQUEST, self.to_string()).into_response()
  }
}
