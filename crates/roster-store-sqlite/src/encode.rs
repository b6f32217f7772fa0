//! Encoding and decoding helpers between Rust domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Timestamps are stored as RFC 3339 strings.

use chrono::{DateTime, Utc};
use roster_core::Person;
use sha2::{Digest, Sha256};

use crate::{Error, Result};

// ─── DateTime<Utc> ───────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── Credential ──────────────────────────────────────────────────────────────

/// Hex SHA-256 of the access credential. Only the digest is persisted.
pub fn credential_digest(key: &str) -> String {
  hex::encode(Sha256::digest(key.as_bytes()))
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Raw strings read directly from a `persons` row, in
/// [`PERSON_COLUMNS`](crate::schema::PERSON_COLUMNS) order.
pub struct RawPerson {
  pub id:          String,
  pub user_name:   String,
  pub first_name:  Option<String>,
  pub last_name:   Option<String>,
  pub address:     Option<String>,
  pub phone:       Option<String>,
  pub email:       Option<String>,
  pub added_on:    String,
  pub modified_on: Option<String>,
}

impl RawPerson {
  /// Read the person columns starting at column index `start`.
  pub fn from_row(row: &rusqlite::Row<'_>, start: usize) -> rusqlite::Result<Self> {
    Ok(RawPerson {
      id:          row.get(start)?,
      user_name:   row.get(start + 1)?,
      first_name:  row.get(start + 2)?,
      last_name:   row.get(start + 3)?,
      address:     row.get(start + 4)?,
      phone:       row.get(start + 5)?,
      email:       row.get(start + 6)?,
      added_on:    row.get(start + 7)?,
      modified_on: row.get(start + 8)?,
    })
  }

  pub fn into_person(self) -> Result<Person> {
    Ok(Person {
      id:          self.id,
      user_name:   self.user_name,
      first_name:  self.first_name,
      last_name:   self.last_name,
      address:     self.address,
      phone:       self.phone,
      email:       self.email,
      added_on:    decode_dt(&self.added_on)?,
      modified_on: self.modified_on.as_deref().map(decode_dt).transpose()?,
    })
  }
}

/// Owned column values for an `INSERT` or `UPDATE`, ready to move into a
/// connection closure.
pub struct PersonRow {
  pub id:          String,
  pub user_name:   String,
  pub first_name:  Option<String>,
  pub last_name:   Option<String>,
  pub address:     Option<String>,
  pub phone:       Option<String>,
  pub email:       Option<String>,
  pub added_on:    String,
  pub modified_on: Option<String>,
}

impl From<&Person> for PersonRow {
  fn from(p: &Person) -> Self {
    PersonRow {
      id:          p.id.clone(),
      user_name:   p.user_name.clone(),
      first_name:  p.first_name.clone(),
      last_name:   p.last_name.clone(),
      address:     p.address.clone(),
      phone:       p.phone.clone(),
      email:       p.email.clone(),
      added_on:    encode_dt(p.added_on),
      modified_on: p.modified_on.map(encode_dt),
    }
  }
}

#[cfg(test)]
mod tests {
  use chrono::TimeZone;

  use super::*;

  #[test]
  fn dt_round_trips_through_rfc3339() {
    let dt = Utc.with_ymd_and_hms(2024, 2, 29, 13, 45, 7).unwrap();
    assert_eq!(decode_dt(&encode_dt(dt)).unwrap(), dt);
  }

  #[test]
  fn bad_dt_is_a_parse_error() {
    assert!(matches!(decode_dt("yesterday"), Err(Error::DateParse(_))));
  }

  #[test]
  fn credential_digest_is_stable_hex() {
    let a = credential_digest("s3cret");
    assert_eq!(a.len(), 64);
    assert_eq!(a, credential_digest("s3cret"));
    assert_ne!(a, credential_digest("other"));
  }
}
