//! [`SqliteRepo`] — the SQLite implementation of [`PersonRepo`].

use std::path::Path;

use chrono::Utc;
use roster_core::{
  Outcome, Person,
  change::{ChangeEvent, ChangeKind},
  person::Created,
  repo::{PAGE_SIZE, PersonRepo},
};
use rusqlite::{OptionalExtension as _, TransactionBehavior};
use tokio::sync::broadcast;

use crate::{
  Error, Result,
  encode::{PersonRow, RawPerson, credential_digest},
  schema::{CREDENTIAL_KEY, PERSON_COLUMNS, SCHEMA},
};

/// Buffered change events per subscriber before the oldest are dropped.
const CHANGE_CAPACITY: usize = 256;

/// Every statement costs one unit plus one per row it reads or writes.
fn charge(statements: usize, rows: usize) -> f64 { (statements + rows) as f64 }

// ─── Store ───────────────────────────────────────────────────────────────────

/// A person store backed by a single SQLite file.
///
/// Cloning is cheap — the connection and the change channel are both
/// reference-counted.
#[derive(Clone)]
pub struct SqliteRepo {
  conn:    tokio_rusqlite::Connection,
  changes: broadcast::Sender<ChangeEvent>,
}

enum Insert {
  Duplicate { matches: usize },
  Inserted,
}

impl SqliteRepo {
  /// Open (or create) `<endpoint>/<database>.db` and bind it to `key`.
  ///
  /// The first open records a digest of `key`; later opens must present the
  /// same credential or fail with [`Error::AccessDenied`].
  pub async fn open(
    endpoint: impl AsRef<Path>,
    database: &str,
    key: &str,
  ) -> Result<Self> {
    let endpoint = endpoint.as_ref();
    tokio::fs::create_dir_all(endpoint).await?;
    let conn =
      tokio_rusqlite::Connection::open(endpoint.join(format!("{database}.db")))
        .await?;
    Self::init(conn, key).await
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory(key: &str) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    Self::init(conn, key).await
  }

  async fn init(conn: tokio_rusqlite::Connection, key: &str) -> Result<Self> {
    let digest = credential_digest(key);

    let granted = conn
      .call(move |conn| {
        conn.execute_batch(SCHEMA)?;
        let stored: Option<String> = conn
          .query_row(
            "SELECT value FROM meta WHERE key = ?1",
            rusqlite::params![CREDENTIAL_KEY],
            |r| r.get(0),
          )
          .optional()?;
        match stored {
          Some(stored) => Ok(stored == digest),
          None => {
            conn.execute(
              "INSERT INTO meta (key, value) VALUES (?1, ?2)",
              rusqlite::params![CREDENTIAL_KEY, digest],
            )?;
            Ok(true)
          }
        }
      })
      .await?;

    if !granted {
      return Err(Error::AccessDenied);
    }

    let (changes, _) = broadcast::channel(CHANGE_CAPACITY);
    Ok(Self { conn, changes })
  }

  /// Subscribe to committed writes. Events published before the call are
  /// not replayed.
  pub fn subscribe(&self) -> broadcast::Receiver<ChangeEvent> {
    self.changes.subscribe()
  }

  fn publish(&self, kind: ChangeKind, id: &str, user_name: &str) {
    // No subscribers is fine; the event is simply dropped.
    let _ = self.changes.send(ChangeEvent::new(kind, id, user_name));
  }

  /// First record in the `user_name` partition, with the query's cost.
  async fn find_by_user_name(
    &self,
    user_name: &str,
  ) -> Result<(Option<Person>, f64)> {
    let user_name = user_name.to_owned();

    let raw: Option<RawPerson> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!(
                "SELECT {PERSON_COLUMNS} FROM persons WHERE user_name = ?1 LIMIT 1"
              ),
              rusqlite::params![user_name],
              |row| RawPerson::from_row(row, 0),
            )
            .optional()?,
        )
      })
      .await?;

    let cost = charge(1, usize::from(raw.is_some()));
    Ok((raw.map(RawPerson::into_person).transpose()?, cost))
  }

  /// Point read of `(id, user_name)`.
  async fn read_item(
    &self,
    id: &str,
    user_name: &str,
  ) -> Result<Option<(Person, f64)>> {
    let id = id.to_owned();
    let user_name = user_name.to_owned();

    let raw: Option<RawPerson> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!(
                "SELECT {PERSON_COLUMNS} FROM persons WHERE user_name = ?1 AND id = ?2"
              ),
              rusqlite::params![user_name, id],
              |row| RawPerson::from_row(row, 0),
            )
            .optional()?,
        )
      })
      .await?;

    match raw {
      Some(raw) => Ok(Some((raw.into_person()?, charge(1, 1)))),
      None => Ok(None),
    }
  }

  /// Overwrite the row at `(person.id, person.user_name)`. Returns `None` if
  /// the row no longer exists.
  async fn replace_item(&self, person: &Person) -> Result<Option<f64>> {
    let row = PersonRow::from(person);

    let changed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "UPDATE persons
           SET first_name = ?3, last_name = ?4, address = ?5, phone = ?6,
               email = ?7, added_on = ?8, modified_on = ?9
           WHERE user_name = ?1 AND id = ?2",
          rusqlite::params![
            row.user_name,
            row.id,
            row.first_name,
            row.last_name,
            row.address,
            row.phone,
            row.email,
            row.added_on,
            row.modified_on,
          ],
        )?)
      })
      .await?;

    Ok((changed > 0).then(|| charge(1, changed)))
  }

  async fn try_modify(&self, person: Person) -> Result<Outcome<Person>> {
    let Some((mut existing, read_cost)) =
      self.read_item(&person.id, &person.user_name).await?
    else {
      return Ok(Outcome::does_not_exist(&person.user_name, None));
    };

    existing.first_name = person.first_name;
    existing.last_name = person.last_name;
    existing.address = person.address;
    existing.phone = person.phone;
    existing.email = person.email;
    existing.modified_on = Some(Utc::now());

    let Some(write_cost) = self.replace_item(&existing).await? else {
      return Ok(Outcome::does_not_exist(&person.user_name, None));
    };

    self.publish(ChangeKind::Modified, &existing.id, &existing.user_name);
    Ok(Outcome::success(existing, read_cost + write_cost))
  }

  async fn try_remove(&self, id: &str, user_name: &str) -> Result<Outcome<()>> {
    let id_owned = id.to_owned();
    let user_name_owned = user_name.to_owned();

    let deleted = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "DELETE FROM persons WHERE user_name = ?1 AND id = ?2",
          rusqlite::params![user_name_owned, id_owned],
        )?)
      })
      .await?;

    if deleted == 0 {
      return Ok(Outcome::does_not_exist(user_name, None));
    }

    self.publish(ChangeKind::Removed, id, user_name);
    Ok(Outcome::success((), charge(1, deleted)))
  }
}

// ─── PersonRepo impl ─────────────────────────────────────────────────────────

impl PersonRepo for SqliteRepo {
  type Error = Error;

  async fn create(&self, mut person: Person) -> Result<Outcome<Created>> {
    person.added_on = Utc::now();
    person.modified_on = None;

    let row = PersonRow::from(&person);

    // The existence check and the insert share one immediate transaction on
    // the connection thread, so two creates in this process cannot both pass.
    let insert = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        let matches: i64 = tx.query_row(
          "SELECT COUNT(*) FROM persons WHERE user_name = ?1",
          rusqlite::params![row.user_name],
          |r| r.get(0),
        )?;
        if matches > 0 {
          return Ok(Insert::Duplicate { matches: matches as usize });
        }

        tx.execute(
          "INSERT INTO persons (
             id, user_name, first_name, last_name, address, phone, email,
             added_on, modified_on
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
          rusqlite::params![
            row.id,
            row.user_name,
            row.first_name,
            row.last_name,
            row.address,
            row.phone,
            row.email,
            row.added_on,
            row.modified_on,
          ],
        )?;
        tx.commit()?;
        Ok(Insert::Inserted)
      })
      .await?;

    match insert {
      Insert::Duplicate { matches } => {
        let cost = charge(1, matches);
        tracing::debug!(user_name = %person.user_name, cost, "create rejected: duplicate");
        Ok(Outcome::already_exists(&person.user_name, Some(cost)))
      }
      Insert::Inserted => {
        let cost = charge(2, 1);
        tracing::debug!(id = %person.id, user_name = %person.user_name, cost, "created person");
        self.publish(ChangeKind::Created, &person.id, &person.user_name);
        Ok(Outcome::success(
          Created { id: person.id, user_name: person.user_name },
          cost,
        ))
      }
    }
  }

  async fn get(&self, user_name: &str) -> Result<Outcome<Person>> {
    let (found, cost) = self.find_by_user_name(user_name).await?;
    tracing::debug!(user_name, cost, found = found.is_some(), "point query");
    Ok(match found {
      Some(person) => Outcome::success(person, cost),
      None => Outcome::does_not_exist(user_name, None),
    })
  }

  async fn list(&self) -> Result<Outcome<Vec<Person>>> {
    let mut persons = Vec::new();
    let mut cost = 0.0;
    let mut after = i64::MIN;

    loop {
      let page: Vec<(i64, RawPerson)> = self
        .conn
        .call(move |conn| {
          let mut stmt = conn.prepare(&format!(
            "SELECT rowid, {PERSON_COLUMNS} FROM persons
             WHERE rowid > ?1 ORDER BY rowid LIMIT ?2"
          ))?;
          let rows = stmt
            .query_map(rusqlite::params![after, PAGE_SIZE as i64], |row| {
              Ok((row.get(0)?, RawPerson::from_row(row, 1)?))
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;
          Ok(rows)
        })
        .await?;

      let fetched = page.len();
      cost += charge(1, fetched);
      if let Some((rowid, _)) = page.last() {
        after = *rowid;
      }
      for (_, raw) in page {
        persons.push(raw.into_person()?);
      }

      if fetched < PAGE_SIZE {
        break;
      }
    }

    tracing::debug!(count = persons.len(), cost, "full scan");
    Ok(Outcome::success(persons, cost))
  }

  async fn modify(&self, person: Person) -> Outcome<Person> {
    let user_name = person.user_name.clone();
    match self.try_modify(person).await {
      Ok(outcome) => outcome,
      Err(e) => {
        tracing::warn!(user_name = %user_name, error = %e, "modify failed");
        Outcome::failure(e.to_string(), None)
      }
    }
  }

  async fn remove(&self, id: &str, user_name: &str) -> Outcome<()> {
    match self.try_remove(id, user_name).await {
      Ok(outcome) => outcome,
      Err(e) => {
        tracing::warn!(id, user_name, error = %e, "remove failed");
        Outcome::failure(e.to_string(), None)
      }
    }
  }
}
