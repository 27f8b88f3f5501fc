//! SQL schema for the Rolo SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! the `PRAGMA user_version` number.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
///
/// `AUTOINCREMENT` keeps SQLite from ever reusing the rowid of a deleted
/// contact, so ids are assigned once and never recycled.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

CREATE TABLE IF NOT EXISTS contacts (
    id         INTEGER PRIMARY KEY AUTOINCREMENT,
    name       TEXT NOT NULL,
    title      TEXT,
    phone      TEXT,
    email      TEXT NOT NULL UNIQUE,
    address    TEXT,
    status     TEXT NOT NULL DEFAULT 'ACTIVE',  -- 'ACTIVE' | 'INACTIVE'
    photo_url  TEXT
);

CREATE INDEX IF NOT EXISTS contacts_name_idx ON contacts(name);

PRAGMA user_version = 1;
";
