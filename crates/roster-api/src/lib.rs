//! JSON HTTP API for Roster.
//!
//! Exposes an axum [`Router`] backed by any [`PersonRepo`].
//!
//! | Method   | Path                     | Handler                  |
//! |----------|--------------------------|--------------------------|
//! | `POST`   | `/person/add`            | [`handlers::add`]        |
//! | `PUT`    | `/person/update/{id}`    | [`handlers::update`]     |
//! | `DELETE` | `/person/delete`         | [`handlers::delete`]     |
//! | `GET`    | `/person/get/{username}` | [`handlers::get::one`]   |
//! | `GET`    | `/person/get`            | [`handlers::get::list`]  |

pub mod config;
pub mod error;
pub mod handlers;
pub mod meta;
pub mod tasks;

pub use config::ServerConfig;
pub use error::ApiError;

use std::sync::Arc;

use axum::{
  Router,
  routing::{delete, get, post, put},
};
use roster_core::repo::PersonRepo;
use tower_http::trace::TraceLayer;

/// Build the API router for `repo`.
pub fn router<R>(repo: Arc<R>) -> Router
where
  R: PersonRepo + 'static,
{
  Router::new()
    .route("/person/add",            post(handlers::add::handler::<R>))
    .route("/person/update/{id}",    put(handlers::update::handler::<R>))
    .route("/person/delete",         delete(handlers::delete::handler::<R>))
    .route("/person/get",            get(handlers::get::list::<R>))
    .route("/person/get/{username}", get(handlers::get::one::<R>))
    .layer(TraceLayer::new_for_http())
    .with_state(repo)
}

// ─── Integration tests ────────────────────────────────────────────────────────
