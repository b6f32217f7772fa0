//! Error type for `roster-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("io error: {0}")]
  Io(#[from] std::io::Error),

  #[error("date/time parse error: {0}")]
  DateParse(String),

  /// The supplied credential does not match the one bound to the database.
  #[error("access denied: credential does not match this database")]
  AccessDenied,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
