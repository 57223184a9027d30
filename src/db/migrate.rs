//! Schema migration engine.
//!
//! The whole persisted state lives in one `store` key/value table of JSON
//! blobs plus the internal `log` audit table. The schema carries an
//! explicit version (`PRAGMA user_version`) so a format change can never
//! silently corrupt an older database; applied migrations are also
//! recorded in `log` with a version tag, the same way operations are.

use crate::db::log::ttlog;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension};

/// Version written by this build. Bump together with a new migration arm.
pub const SCHEMA_VERSION: i32 = 1;

const CREATE_STORE_TAG: &str = "20250401_0001_create_store";

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if the `store` table exists.
fn store_table_exists(conn: &Connection) -> AppResult<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name='store'")?;
    let exists: Option<String> = stmt.query_row([], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

fn create_store_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS store (
            key        TEXT PRIMARY KEY,
            value      TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

pub fn current_schema_version(conn: &Connection) -> AppResult<i32> {
    let v: i32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    Ok(v)
}

fn set_schema_version(conn: &Connection, version: i32) -> AppResult<()> {
    // PRAGMA does not support bound parameters
    conn.execute_batch(&format!("PRAGMA user_version = {};", version))?;
    Ok(())
}

fn migration_applied(conn: &Connection, tag: &str) -> AppResult<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([tag], |_| Ok(())).optional()?.is_some())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::init_db().
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    // 1) Ensure log table (migrations record themselves into it)
    ensure_log_table(conn)?;

    // 2) Refuse databases written by a newer build
    let version = current_schema_version(conn)?;
    if version > SCHEMA_VERSION {
        return Err(AppError::Migration(format!(
            "database schema v{} is newer than this build (supports up to v{})",
            version, SCHEMA_VERSION
        )));
    }

    // 3) v0 -> v1: create the key/value store
    if !store_table_exists(conn)? {
        create_store_table(conn)?;

        if !migration_applied(conn, CREATE_STORE_TAG)? {
            ttlog(
                conn,
                "migration_applied",
                CREATE_STORE_TAG,
                "Created store table (key/value JSON state)",
            )?;
            success("Created store table (schema v1).");
        }
    }

    if version < SCHEMA_VERSION {
        set_schema_version(conn, SCHEMA_VERSION)?;
    }

    Ok(())
}
