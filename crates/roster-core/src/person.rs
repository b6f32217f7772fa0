//! Person — the storage-side record.
//!
//! Field names follow the stored document layout. The public-facing shape
//! lives in [`crate::view::PersonView`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored person, partitioned by `user_name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
  /// Opaque identifier assigned once at creation.
  #[serde(default)]
  pub id:          String,
  /// Partition key; unique within the collection.
  #[serde(default)]
  pub user_name:   String,
  pub first_name:  Option<String>,
  pub last_name:   Option<String>,
  pub address:     Option<String>,
  #[serde(rename = "phoneNumber")]
  pub phone:       Option<String>,
  pub email:       Option<String>,
  /// Set by the store on create, never changed afterwards.
  pub added_on:    DateTime<Utc>,
  /// Set by the store on every modify; `None` until the first one.
  pub modified_on: Option<DateTime<Utc>>,
}

impl Person {
  /// `first_name + " " + last_name`; missing parts render as empty strings.
  pub fn full_name(&self) -> String {
    format!(
      "{} {}",
      self.first_name.as_deref().unwrap_or_default(),
      self.last_name.as_deref().unwrap_or_default(),
    )
  }

  /// Give the record a fresh opaque identifier.
  pub fn assign_new_id(&mut self) -> &str {
    self.id = Uuid::new_v4().to_string();
    &self.id
  }
}

/// The identity pair returned by a successful create.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Created {
  pub id:        String,
  pub user_name: String,
}

#[cfg(test)]
mod tests {
  use super::*;

  fn person(first: Option<&str>, last: Option<&str>) -> Person {
    Person {
      id:          String::new(),
      user_name:   "jdoe".into(),
      first_name:  first.map(Into::into),
      last_name:   last.map(Into::into),
      address:     None,
      phone:       None,
      email:       None,
      added_on:    DateTime::<Utc>::MIN_UTC,
      modified_on: None,
    }
  }

  #[test]
  fn full_name_joins_parts() {
    assert_eq!(person(Some("John"), Some("Doe")).full_name(), "John Doe");
  }

  #[test]
  fn full_name_renders_missing_parts_empty() {
    assert_eq!(person(Some("John"), None).full_name(), "John ");
    assert_eq!(person(None, None).full_name(), " ");
  }

  #[test]
  fn assign_new_id_produces_distinct_uuids() {
    let mut a = person(None, None);
    let mut b = person(None, None);
    a.assign_new_id();
    b.assign_new_id();
    assert!(!a.id.is_empty());
    assert_ne!(a.id, b.id);
    assert!(Uuid::parse_str(&a.id).is_ok());
  }

  #[test]
  fn serializes_with_document_field_names() {
    let mut p = person(Some("John"), Some("Doe"));
    p.phone = Some("09171234567".into());
    let json = serde_json::to_value(&p).unwrap();
    assert_eq!(json["userName"], "jdoe");
    assert_eq!(json["phoneNumber"], "09171234567");
    assert!(json.get("fullName").is_none());
  }
}
