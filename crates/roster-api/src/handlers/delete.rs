//! `DELETE /person/delete?id=<id>&userName=<userName>`

use std::sync::Arc;

use axum::{
  Json,
  extract::{Query, State},
};
use roster_core::repo::PersonRepo;
use serde::Deserialize;

use crate::{
  error::ApiError,
  handlers::{Reply, settle},
  meta::ClientMeta,
};

#[derive(Debug, Deserialize)]
pub struct DeleteParams {
  pub id:        Option<String>,
  #[serde(rename = "userName", alias = "username")]
  pub user_name: Option<String>,
}

pub async fn handler<R>(
  State(repo): State<Arc<R>>,
  Query(params): Query<DeleteParams>,
  meta: ClientMeta,
) -> Result<Json<Reply<()>>, ApiError>
where
  R: PersonRepo,
{
  meta.log("person/delete");

  let (Some(id), Some(user_name)) = (params.id, params.user_name) else {
    return Err(ApiError::BadRequest(
      "Query parameters id and userName are required.".to_owned(),
    ));
  };

  settle("remove", repo.remove(&id, &user_name).await)?;
  tracing::info!(%id, %user_name, "person deleted");
  Ok(Json(Reply::message("Person successfully deleted.")))
}
