//! Core types and trait definitions for the Roster person service.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! All other crates depend on it.

pub mod change;
pub mod error;
pub mod outcome;
pub mod person;
pub mod repo;
pub mod validate;
pub mod view;

pub use error::ValidationError;
pub use outcome::{Envelope, Outcome};
pub use person::Person;
pub use view::PersonView;
