//! Key/value access to the JSON `store` table.
//!
//! Each logical key holds one JSON document. Reads never fail the caller
//! on bad data: a value that no longer parses falls back to the caller's
//! default and leaves a trace in the audit log.

use crate::db::log::ttlog;
use crate::errors::AppResult;
use crate::ui::messages::warning;
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, params};
use serde::Serialize;
use serde::de::DeserializeOwned;

pub fn get_raw(conn: &Connection, key: &str) -> AppResult<Option<String>> {
    let mut stmt = conn.prepare_cached("SELECT value FROM store WHERE key = ?1")?;
    let value: Option<String> = stmt.query_row([key], |row| row.get(0)).optional()?;
    Ok(value)
}

pub fn put_raw(conn: &Connection, key: &str, value: &str) -> AppResult<()> {
    let now = Local::now().to_rfc3339();
    let mut stmt = conn.prepare_cached(
        "INSERT INTO store (key, value, updated_at) VALUES (?1, ?2, ?3)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
    )?;
    stmt.execute(params![key, value, now])?;
    Ok(())
}

/// Load and deserialize one key, falling back to `default` when the key
/// is missing or its value is corrupt. The corrupt case is logged, not
/// surfaced.
pub fn load_or<T: DeserializeOwned>(conn: &Connection, key: &str, default: T) -> AppResult<T> {
    match get_raw(conn, key)? {
        None => Ok(default),
        Some(raw) => match serde_json::from_str(&raw) {
            Ok(value) => Ok(value),
            Err(e) => {
                warning(format!(
                    "Stored value for '{}' is unreadable, using defaults",
                    key
                ));
                let _ = ttlog(
                    conn,
                    "store_fallback",
                    key,
                    &format!("Corrupt JSON replaced by default: {}", e),
                );
                Ok(default)
            }
        },
    }
}

pub fn save<T: Serialize>(conn: &Connection, key: &str, value: &T) -> AppResult<()> {
    let json = serde_json::to_string(value)
        .map_err(|e| crate::errors::AppError::Other(format!("serialize '{}': {}", key, e)))?;
    put_raw(conn, key, &json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::migrate::run_pending_migrations;

    fn conn() -> Connection {
        let c = Connection::open_in_memory().unwrap();
        run_pending_migrations(&c).unwrap();
        c
    }

    #[test]
    fn round_trip() {
        let c = conn();
        save(&c, "numbers", &vec![1, 2, 3]).unwrap();
        let back: Vec<i32> = load_or(&c, "numbers", Vec::new()).unwrap();
        assert_eq!(back, vec![1, 2, 3]);
    }

    #[test]
    fn missing_key_yields_default() {
        let c = conn();
        let v: Vec<String> = load_or(&c, "nothing_here", Vec::new()).unwrap();
        assert!(v.is_empty());
    }

    #[test]
    fn corrupt_value_falls_back_and_logs() {
        let c = conn();
        put_raw(&c, "numbers", "{definitely-not-json").unwrap();

        let v: Vec<i32> = load_or(&c, "numbers", vec![7]).unwrap();
        assert_eq!(v, vec![7]);

        let logged: i64 = c
            .query_row(
                "SELECT COUNT(*) FROM log WHERE operation = 'store_fallback' AND target = 'numbers'",
                [],
                |r| r.get(0),
            )
            .unwrap();
        assert_eq!(logged, 1);
    }

    #[test]
    fn upsert_replaces_value() {
        let c = conn();
        save(&c, "k", &"one").unwrap();
        save(&c, "k", &"two").unwrap();
        let v: String = load_or(&c, "k", String::new()).unwrap();
        assert_eq!(v, "two");
    }
}
