//! `POST /person/add` — create a person.
//!
//! The identifier is always generated here; any `id` in the body is
//! replaced before validation.

use std::sync::Arc;

use axum::{Json, extract::State};
use bytes::Bytes;
use roster_core::{Person, person::Created, repo::PersonRepo, validate::validate};

use crate::{
  error::ApiError,
  handlers::{Reply, parse_view, settle},
  meta::ClientMeta,
};

pub async fn handler<R>(
  State(repo): State<Arc<R>>,
  meta: ClientMeta,
  body: Bytes,
) -> Result<Json<Reply<Created>>, ApiError>
where
  R: PersonRepo,
{
  meta.log("person/add");

  let mut person = Person::from(parse_view(&body)?);
  person.assign_new_id();
  validate(&person)?;

  let outcome = repo
    .create(person)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  let created = settle("create", outcome)?;

  tracing::info!(id = %created.id, user_name = %created.user_name, "person created");
  Ok(Json(Reply::with_data("Person created successfully.", created)))
}
