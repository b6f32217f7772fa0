//! Change events published by a store after each committed write.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
  Created,
  Modified,
  Removed,
}

/// One committed write, identified by its `(id, user_name)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeEvent {
  pub id:          String,
  pub user_name:   String,
  pub kind:        ChangeKind,
  pub recorded_at: DateTime<Utc>,
}

impl ChangeEvent {
  pub fn new(kind: ChangeKind, id: impl Into<String>, user_name: impl Into<String>) -> Self {
    Self {
      id: id.into(),
      user_name: user_name.into(),
      kind,
      recorded_at: Utc::now(),
    }
  }
}
