//! `PUT /person/update/{id}` — overwrite a person's mutable fields.
//!
//! The identifier comes from the path; `userName` from the body selects the
//! partition.

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
};
use bytes::Bytes;
use roster_core::{Person, PersonView, repo::PersonRepo, validate::validate};

use crate::{
  error::ApiError,
  handlers::{Reply, parse_view, settle},
  meta::ClientMeta,
};

pub async fn handler<R>(
  State(repo): State<Arc<R>>,
  Path(id): Path<String>,
  meta: ClientMeta,
  body: Bytes,
) -> Result<Json<Reply<PersonView>>, ApiError>
where
  R: PersonRepo,
{
  meta.log("person/update");

  let mut person = Person::from(parse_view(&body)?);
  person.id = id;
  validate(&person)?;

  let updated = settle("modify", repo.modify(person).await)?;
  Ok(Json(Reply::with_data(
    "Person updated successfully.",
    PersonView::from(updated),
  )))
}
