//! The `PersonRepo` trait.
//!
//! Implemented by storage backends (e.g. `roster-store-sqlite`). The HTTP
//! layer depends on this abstraction, not on any concrete backend.

use std::future::Future;

use crate::{
  outcome::Outcome,
  person::{Created, Person},
};

/// Number of records fetched per round trip by [`PersonRepo::list`].
pub const PAGE_SIZE: usize = 50;

/// Abstraction over a person store partitioned by `user_name`.
///
/// `create`, `get` and `list` propagate storage faults as `Err`. `modify`
/// and `remove` capture every fault into [`Outcome::Failure`] carrying the
/// fault's text, so their futures are infallible.
pub trait PersonRepo: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Insert `person` unless a record with the same `user_name` exists.
  ///
  /// The store sets `added_on`. A duplicate yields
  /// `Failure("<user_name> already exists.")` and writes nothing.
  fn create(
    &self,
    person: Person,
  ) -> impl Future<Output = Result<Outcome<Created>, Self::Error>> + Send + '_;

  /// Point lookup by partition key. A miss yields
  /// `Failure("<user_name> does not exist.")`, not an empty success.
  fn get<'a>(
    &'a self,
    user_name: &'a str,
  ) -> impl Future<Output = Result<Outcome<Person>, Self::Error>> + Send + 'a;

  /// Every record in the collection, fetched [`PAGE_SIZE`] at a time. Costs
  /// are summed across pages. An empty collection is a success.
  fn list(
    &self,
  ) -> impl Future<Output = Result<Outcome<Vec<Person>>, Self::Error>> + Send + '_;

  /// Overwrite the mutable fields of the record at
  /// `(person.id, person.user_name)` and stamp `modified_on`.
  ///
  /// Replaced: `first_name`, `last_name`, `address`, `phone`, `email`.
  /// Returns the stored record.
  fn modify(
    &self,
    person: Person,
  ) -> impl Future<Output = Outcome<Person>> + Send + '_;

  /// Delete the record at `(id, user_name)`.
  fn remove<'a>(
    &'a self,
    id: &'a str,
    user_name: &'a str,
  ) -> impl Future<Output = Outcome<()>> + Send + 'a;
}
