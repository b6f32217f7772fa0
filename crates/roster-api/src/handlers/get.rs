//! `GET /person/get/{username}` and `GET /person/get`.

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
};
use roster_core::{PersonView, repo::PersonRepo};

use crate::{error::ApiError, handlers::settle, meta::ClientMeta};

/// `GET /person/get/{username}` — 400 if no such user.
pub async fn one<R>(
  State(repo): State<Arc<R>>,
  Path(username): Path<String>,
  meta: ClientMeta,
) -> Result<Json<PersonView>, ApiError>
where
  R: PersonRepo,
{
  meta.log("person/get/{username}");

  let outcome = repo
    .get(&username)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(PersonView::from(settle("get", outcome)?)))
}

/// `GET /person/get` — every person; an empty list is a success.
pub async fn list<R>(
  State(repo): State<Arc<R>>,
  meta: ClientMeta,
) -> Result<Json<Vec<PersonView>>, ApiError>
where
  R: PersonRepo,
{
  meta.log("person/get");

  let outcome = repo
    .list()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  let persons = settle("list", outcome)?;
  Ok(Json(persons.into_iter().map(PersonView::from).collect()))
}
