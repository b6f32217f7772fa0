//! SQL schema for the Roster SQLite store.
//!
//! Executed once at connection startup.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

CREATE TABLE IF NOT EXISTS meta (
    key   TEXT PRIMARY KEY,
    value TEXT NOT NULL
);

-- One row per person. user_name is the partition key; every point
-- operation addresses (user_name, id). Uniqueness of user_name is checked
-- by the store on create, not by a constraint.
CREATE TABLE IF NOT EXISTS persons (
    id          TEXT NOT NULL,
    user_name   TEXT NOT NULL,
    first_name  TEXT,
    last_name   TEXT,
    address     TEXT,
    phone       TEXT,
    email       TEXT,
    added_on    TEXT NOT NULL,   -- RFC 3339 UTC; server-assigned
    modified_on TEXT,            -- RFC 3339 UTC; NULL until first modify
    PRIMARY KEY (user_name, id)
);

PRAGMA user_version = 1;
";

/// Column list shared by every `SELECT` that yields a person row.
pub const PERSON_COLUMNS: &str =
  "id, user_name, first_name, last_name, address, phone, email, added_on, modified_on";

/// `meta` key under which the credential digest is stored.
pub const CREDENTIAL_KEY: &str = "credential_digest";
