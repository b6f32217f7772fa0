//! Server configuration.
//!
//! Read from an optional TOML file overlaid by `ROSTER_*` environment
//! variables. The three database keys are required; startup aborts without
//! them.
//!
//! | key              | env                     | default     |
//! |------------------|-------------------------|-------------|
//! | `db_uri`         | `ROSTER_DB_URI`         | required    |
//! | `db_key`         | `ROSTER_DB_KEY`         | required    |
//! | `db_name`        | `ROSTER_DB_NAME`        | required    |
//! | `host`           | `ROSTER_HOST`           | `127.0.0.1` |
//! | `port`           | `ROSTER_PORT`           | `7071`      |
//! | `heartbeat_secs` | `ROSTER_HEARTBEAT_SECS` | `600`       |

use std::{path::{Path, PathBuf}, time::Duration};

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Runtime server configuration.
#[derive(Deserialize, Clone)]
pub struct ServerConfig {
  #[serde(default = "default_host")]
  pub host:           String,
  #[serde(default = "default_port")]
  pub port:           u16,
  /// Directory holding the database files.
  pub db_uri:         PathBuf,
  /// Access credential bound to the database on first open.
  pub db_key:         String,
  /// Logical database name; the file is `<db_uri>/<db_name>.db`.
  pub db_name:        String,
  #[serde(default = "default_heartbeat_secs")]
  pub heartbeat_secs: u64,
}

fn default_host() -> String { "127.0.0.1".to_owned() }

fn default_port() -> u16 { 7071 }

fn default_heartbeat_secs() -> u64 { 600 }

impl ServerConfig {
  /// Load from `path` (if it exists) and the `ROSTER_*` environment.
  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    Config::builder()
      .add_source(File::from(path).required(false))
      .add_source(Environment::with_prefix("ROSTER"))
      .build()?
      .try_deserialize()
  }

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }

  pub fn heartbeat_period(&self) -> Duration {
    Duration::from_secs(self.heartbeat_secs.max(1))
  }
}
