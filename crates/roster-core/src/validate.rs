//! Field validation for [`Person`] records.
//!
//! Every rule runs; failures are collected into one [`ValidationError`]
//! rather than stopping at the first.

use std::sync::LazyLock;

use regex::Regex;

use crate::{
  error::{ValidationError, Violation},
  person::Person,
};

pub const USER_NAME_MAX: usize = 30;
pub const NAME_MAX: usize = 80;
pub const ADDRESS_MAX: usize = 250;

/// Local mobile numbers: `09` or `+639` followed by nine digits.
static PHONE_RE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^(09|\+639)\d{9}$").expect("Invalid regex"));

/// Exactly one `@`, neither first nor last, no whitespace. Dotless domains
/// such as `user@localhost` are accepted.
static EMAIL_RE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+$").expect("Invalid regex"));

/// Check `person` against every field rule.
pub fn validate(person: &Person) -> Result<(), ValidationError> {
  let mut violations = Vec::new();
  let mut fail = |field, message| violations.push(Violation { field, message });

  if is_blank(&person.id) {
    fail("id", "Id is required");
  }

  if is_blank(&person.user_name) {
    fail("userName", "Username is required");
  } else if too_long(&person.user_name, USER_NAME_MAX) {
    fail("userName", "Username cannot be longer than 30 characters.");
  }

  if let Some(first) = &person.first_name
    && too_long(first, NAME_MAX)
  {
    fail("firstName", "Name cannot be longer than 80 characters.");
  }

  if let Some(last) = &person.last_name
    && too_long(last, NAME_MAX)
  {
    fail("lastName", "Last name cannot be longer than 80 characters.");
  }

  if let Some(address) = &person.address
    && too_long(address, ADDRESS_MAX)
  {
    fail("address", "Description must be a string with a maximum length of '250'.");
  }

  if let Some(phone) = present(&person.phone)
    && !PHONE_RE.is_match(phone)
  {
    fail("phoneNumber", "Invalid phone number");
  }

  if let Some(email) = present(&person.email)
    && !EMAIL_RE.is_match(email)
  {
    fail("email", "Invalid Email Address");
  }

  if violations.is_empty() {
    Ok(())
  } else {
    Err(ValidationError::new(violations))
  }
}

fn is_blank(s: &str) -> bool { s.trim().is_empty() }

fn too_long(s: &str, max: usize) -> bool { s.chars().count() > max }

/// Optional values that are absent or empty skip pattern checks.
fn present(value: &Option<String>) -> Option<&str> {
  value.as_deref().filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
  use chrono::Utc;

  use super::*;

  fn valid() -> Person {
    Person {
      id:          "8d0b7c1e-4c55-4a5e-9a51-0d6f0b5c2f11".into(),
      user_name:   "jdoe".into(),
      first_name:  Some("John".into()),
      last_name:   Some("Doe".into()),
      address:     Some("1 Main St".into()),
      phone:       Some("09171234567".into()),
      email:       Some("a@b.com".into()),
      added_on:    Utc::now(),
      modified_on: None,
    }
  }

  #[test]
  fn valid_record_passes() {
    assert!(validate(&valid()).is_ok());
  }

  #[test]
  fn optional_fields_may_be_absent() {
    let p = Person {
      first_name: None,
      last_name: None,
      address: None,
      phone: None,
      email: None,
      ..valid()
    };
    assert!(validate(&p).is_ok());
  }

  #[test]
  fn phone_patterns() {
    for ok in ["09171234567", "+639171234567"] {
      let p = Person { phone: Some(ok.into()), ..valid() };
      assert!(validate(&p).is_ok(), "{ok} should pass");
    }
    for bad in ["12345", "0917123456", "091712345678", "+63917123456a", "639171234567"] {
      let p = Person { phone: Some(bad.into()), ..valid() };
      let err = validate(&p).unwrap_err();
      assert_eq!(err.to_string(), "Invalid phone number", "{bad} should fail");
    }
  }

  #[test]
  fn email_patterns() {
    for ok in ["a@b.com", "a@b", "user@localhost"] {
      let p = Person { email: Some(ok.into()), ..valid() };
      assert!(validate(&p).is_ok(), "{ok} should pass");
    }

    for bad in ["not-an-email", "@b.com", "a@", "a@@b.com", "a@b@c.com", "a b@c.com"] {
      let p = Person { email: Some(bad.into()), ..valid() };
      let err = validate(&p).unwrap_err();
      assert_eq!(err.fields(), vec!["email"], "{bad} should fail");
    }
  }

  #[test]
  fn empty_optional_patterns_are_skipped() {
    let p = Person {
      phone: Some(String::new()),
      email: Some(String::new()),
      ..valid()
    };
    assert!(validate(&p).is_ok());
  }

  #[test]
  fn user_name_length_limit() {
    let p = Person { user_name: "a".repeat(30), ..valid() };
    assert!(validate(&p).is_ok());

    let p = Person { user_name: "a".repeat(31), ..valid() };
    let err = validate(&p).unwrap_err();
    assert_eq!(
      err.to_string(),
      "Username cannot be longer than 30 characters."
    );
  }

  #[test]
  fn lengths_count_characters_not_bytes() {
    let p = Person { user_name: "ñ".repeat(30), ..valid() };
    assert!(validate(&p).is_ok());
  }

  #[test]
  fn missing_id_fails() {
    let p = Person { id: String::new(), ..valid() };
    let err = validate(&p).unwrap_err();
    assert_eq!(err.to_string(), "Id is required");
    assert_eq!(err.fields(), vec!["id"]);
  }

  #[test]
  fn blank_user_name_is_missing() {
    let p = Person { user_name: "   ".into(), ..valid() };
    let err = validate(&p).unwrap_err();
    assert_eq!(err.to_string(), "Username is required");
  }

  #[test]
  fn all_failures_are_collected() {
    let p = Person {
      id: String::new(),
      first_name: Some("x".repeat(81)),
      address: Some("x".repeat(251)),
      phone: Some("12345".into()),
      email: Some("not-an-email".into()),
      ..valid()
    };
    let err = validate(&p).unwrap_err();
    assert_eq!(err.violations().len(), 5);
    assert_eq!(
      err.to_string(),
      "Id is required\n\
       Name cannot be longer than 80 characters.\n\
       Description must be a string with a maximum length of '250'.\n\
       Invalid phone number\n\
       Invalid Email Address"
    );
    assert_eq!(
      err.fields_summary(),
      "Error validating the following fields: id,firstName,address,phoneNumber,email"
    );
  }
}
