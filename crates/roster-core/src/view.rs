//! PersonView — the wire shape, and the explicit mapping to and from
//! [`Person`].
//!
//! | `PersonView`    | JSON          | `Person`     |
//! |-----------------|---------------|--------------|
//! | `id`            | `id`          | `id`         |
//! | `user_name`     | `userName`    | `user_name`  |
//! | `first_name`    | `firstName`   | `first_name` |
//! | `last_name`     | `lastName`    | `last_name`  |
//! | `full_name`     | `fullName`    | computed     |
//! | `address`       | `address`     | `address`    |
//! | `phone_number`  | `phoneNumber` | `phone`      |
//! | `email_address` | `email`       | `email`      |
//!
//! Timestamps are storage-only and never cross the wire.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::person::Person;

/// A person as seen by API callers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonView {
  #[serde(default)]
  pub id:            String,
  #[serde(default)]
  pub user_name:     String,
  pub first_name:    Option<String>,
  pub last_name:     Option<String>,
  /// Carried as a plain value; ignored when mapping to storage.
  pub full_name:     Option<String>,
  pub address:       Option<String>,
  pub phone_number:  Option<String>,
  #[serde(rename = "email", alias = "emailAddress")]
  pub email_address: Option<String>,
}

impl From<PersonView> for Person {
  fn from(v: PersonView) -> Self {
    Person {
      id:          v.id,
      user_name:   v.user_name,
      first_name:  v.first_name,
      last_name:   v.last_name,
      address:     v.address,
      phone:       v.phone_number,
      email:       v.email_address,
      // Both timestamps are assigned by the store.
      added_on:    DateTime::<Utc>::default(),
      modified_on: None,
    }
  }
}

impl From<&Person> for PersonView {
  fn from(p: &Person) -> Self {
    PersonView {
      id:            p.id.clone(),
      user_name:     p.user_name.clone(),
      first_name:    p.first_name.clone(),
      last_name:     p.last_name.clone(),
      full_name:     Some(p.full_name()),
      address:       p.address.clone(),
      phone_number:  p.phone.clone(),
      email_address: p.email.clone(),
    }
  }
}

impl From<Person> for PersonView {
  fn from(p: Person) -> Self {
    let full_name = p.full_name();
    PersonView {
      id:            p.id,
      user_name:     p.user_name,
      first_name:    p.first_name,
      last_name:     p.last_name,
      full_name:     Some(full_name),
      address:       p.address,
      phone_number:  p.phone,
      email_address: p.email,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn sample_view() -> PersonView {
    PersonView {
      id:            "c0ffee".into(),
      user_name:     "jdoe".into(),
      first_name:    Some("John".into()),
      last_name:     Some("Doe".into()),
      full_name:     Some("whatever the caller sent".into()),
      address:       Some("1 Main St".into()),
      phone_number:  Some("09171234567".into()),
      email_address: Some("j@d.com".into()),
    }
  }

  #[test]
  fn round_trip_preserves_all_but_full_name() {
    let view = sample_view();
    let back = PersonView::from(Person::from(view.clone()));

    assert_eq!(back.full_name.as_deref(), Some("John Doe"));
    assert_eq!(
      PersonView { full_name: None, ..back },
      PersonView { full_name: None, ..view },
    );
  }

  #[test]
  fn storage_ignores_supplied_full_name() {
    let person = Person::from(sample_view());
    assert_eq!(person.full_name(), "John Doe");
  }

  #[test]
  fn phone_and_email_are_renamed() {
    let person = Person::from(sample_view());
    assert_eq!(person.phone.as_deref(), Some("09171234567"));
    assert_eq!(person.email.as_deref(), Some("j@d.com"));
  }

  #[test]
  fn deserializes_wire_names() {
    let view: PersonView = serde_json::from_str(
      r#"{"userName":"jdoe","firstName":"John","lastName":"Doe","phoneNumber":"09171234567","email":"j@d.com"}"#,
    )
    .unwrap();
    assert_eq!(view.id, "");
    assert_eq!(view.user_name, "jdoe");
    assert_eq!(view.phone_number.as_deref(), Some("09171234567"));
    assert_eq!(view.email_address.as_deref(), Some("j@d.com"));
  }

  #[test]
  fn accepts_email_address_alias() {
    let view: PersonView =
      serde_json::from_str(r#"{"userName":"a","emailAddress":"a@b.com"}"#).unwrap();
    assert_eq!(view.email_address.as_deref(), Some("a@b.com"));
  }

  #[test]
  fn view_from_reference_matches_owned() {
    let person = Person::from(sample_view());
    assert_eq!(PersonView::from(&person), PersonView::from(person));
  }
}
