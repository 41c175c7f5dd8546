//! Persistence Adapter
//!
//! Named JSON blobs in a local SQLite file. Reads fall back to a default and
//! writes are best-effort: storage problems are logged, never surfaced.

use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use serde::{de::DeserializeOwned, Serialize};
use std::path::PathBuf;
use std::sync::Mutex;
use thiserror::Error;

/// Entry holding the student profile
pub const PROFILE_KEY: &str = "profile";
/// Entry holding the reminder list
pub const REMINDERS_KEY: &str = "reminders";
/// Entry holding the college list
pub const COLLEGES_KEY: &str = "colleges";

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Store lock poisoned")]
    LockPoisoned,
}

/// Raw key/value storage the advisor persists into
pub trait Persistence: Send + Sync {
    fn put(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
}

/// Serialize `value` under `key`. Failures are logged and dropped.
pub fn save<T: Serialize + ?Sized>(store: &dyn Persistence, key: &str, value: &T) {
    let result = serde_json::to_string(value)
        .map_err(StoreError::from)
        .and_then(|json| store.put(key, &json));

    if let Err(e) = result {
        log::warn!("Failed to save '{}': {}", key, e);
    }
}

/// Read `key`, or return `fallback` when it is missing or unreadable
pub fn load<T: DeserializeOwned>(store: &dyn Persistence, key: &str, fallback: T) -> T {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            log::debug!("No stored '{}', using default", key);
            return fallback;
        }
        Err(e) => {
            log::warn!("Failed to read '{}': {}", key, e);
            return fallback;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(e) => {
            log::warn!("Discarding unreadable '{}': {}", key, e);
            fallback
        }
    }
}

// ============================================================
// SQLITE STORE
// ============================================================

/// SQLite-backed blob store
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Open (or create) the store file
    pub fn new(db_path: Option<PathBuf>) -> Result<Self, StoreError> {
        let path = db_path.unwrap_or_else(|| PathBuf::from("career_compass.db"));
        let conn = Connection::open(path)?;
        Self::init(conn)
    }

    /// Create an in-memory store for testing
    pub fn in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        Self::init(conn)
    }

    fn init(conn: Connection) -> Result<Self, StoreError> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS blobs (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )",
            [],
        )?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }
}

impl Persistence for SqliteStore {
    fn put(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let conn = self.conn.lock().map_err(|_| StoreError::LockPoisoned)?;
        conn.execute(
            "INSERT INTO blobs (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value, Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }

    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let conn = self.conn.lock().map_err(|_| StoreError::LockPoisoned)?;
        let value = conn
            .query_row("SELECT value FROM blobs WHERE key = ?1", [key], |row| row.get(0))
            .optional()?;
        Ok(value)
    }
}
