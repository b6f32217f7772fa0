//! Background tasks started alongside the server: the heartbeat and the
//! change observer. Neither touches request handling.

use std::time::Duration;

use chrono::{DateTime, Utc};
use roster_core::change::ChangeEvent;
use tokio::{
  sync::broadcast::{self, error::RecvError},
  task::JoinHandle,
  time::MissedTickBehavior,
};

// ─── Heartbeat ───────────────────────────────────────────────────────────────

/// Log a liveness line every `period`, starting immediately.
pub fn spawn_heartbeat(period: Duration) -> JoinHandle<()> {
  tokio::spawn(async move {
    let mut ticker = tokio::time::interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    loop {
      ticker.tick().await;
      tracing::info!("{}", pulse_line(Utc::now(), period));
    }
  })
}

fn pulse_line(now: DateTime<Utc>, period: Duration) -> String {
  let next = chrono::Duration::from_std(period)
    .ok()
    .and_then(|d| now.checked_add_signed(d))
    .unwrap_or(now);
  format!(
    "pulse checked at {now}. Next will be at {}",
    next.format("%Y-%m-%d %H:%M")
  )
}

// ─── Change observer ─────────────────────────────────────────────────────────

/// Log every committed write published on `changes` until the store is
/// dropped. A lagging observer skips the missed events.
pub fn spawn_change_observer(
  mut changes: broadcast::Receiver<ChangeEvent>,
) -> JoinHandle<()> {
  tokio::spawn(async move {
    loop {
      match changes.recv().await {
        Ok(event) => {
          tracing::warn!(
            id = %event.id,
            user_name = %event.user_name,
            kind = ?event.kind,
            recorded_at = %event.recorded_at,
            "change observed for person"
          );
        }
        Err(RecvError::Lagged(skipped)) => {
          tracing::warn!(skipped, "change observer lagged behind");
        }
        Err(RecvError::Closed) => break,
      }
    }
  })
}

#[cfg(test)]
mod tests {
  use chrono::TimeZone;
  use roster_core::{Person, repo::PersonRepo};
  use roster_store_sqlite::SqliteRepo;

  use super::*;

  #[test]
  fn pulse_line_names_next_tick() {
    let now = Utc.with_ymd_and_hms(2024, 5, 1, 9, 55, 0).unwrap();
    let line = pulse_line(now, Duration::from_secs(600));
    assert!(line.ends_with("Next will be at 2024-05-01 10:05"), "{line}");
  }

  #[tokio::test]
  async fn heartbeat_keeps_running_until_aborted() {
    let handle = spawn_heartbeat(Duration::from_secs(3600));
    tokio::task::yield_now().await;
    assert!(!handle.is_finished());
    handle.abort();
    assert!(handle.await.unwrap_err().is_cancelled());
  }

  #[tokio::test]
  async fn observer_drains_events_and_stops_when_store_drops() {
    let repo = SqliteRepo::open_in_memory("k").await.unwrap();
    let observer = spawn_change_observer(repo.subscribe());

    let mut person = Person::from(roster_core::PersonView {
      user_name: "jdoe".into(),
      ..Default::default()
    });
    person.assign_new_id();
    repo.create(person).await.unwrap();

    drop(repo);
    observer.await.unwrap();
  }
}
