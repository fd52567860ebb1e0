//! Schema management for the reports store.
//!
//! The schema is fixed at version 1: one `reports` table, two non-unique
//! indexes (`date`, `timestamp`) and the internal audit `log` table.
//! Everything is created with IF NOT EXISTS semantics so re-running the
//! migration entry point is always safe.

use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension};

const SCHEMA_VERSION: i64 = 1;

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> rusqlite::Result<()> {
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

/// Check if the `reports` table exists.
fn reports_table_exists(conn: &Connection) -> rusqlite::Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name='reports'")?;
    let exists: Option<String> = stmt.query_row([], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Create the `reports` table and its indexes.
fn create_reports_table(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS reports (
            id              INTEGER PRIMARY KEY AUTOINCREMENT,
            date            TEXT NOT NULL,
            time            TEXT NOT NULL,
            supply_cards    INTEGER NOT NULL DEFAULT 0,
            supply_amount   REAL NOT NULL DEFAULT 0,
            supply_total    REAL NOT NULL DEFAULT 0,
            exchange_cards  INTEGER NOT NULL DEFAULT 0,
            exchange_amount REAL NOT NULL DEFAULT 0,
            notes           TEXT DEFAULT '',
            image           TEXT DEFAULT '',
            timestamp       TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_reports_date ON reports(date);
        CREATE INDEX IF NOT EXISTS idx_reports_timestamp ON reports(timestamp);
        "#,
    )?;
    Ok(())
}

fn schema_version(conn: &Connection) -> rusqlite::Result<i64> {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
}

fn set_schema_version(conn: &Connection, v: i64) -> rusqlite::Result<()> {
    conn.execute_batch(&format!("PRAGMA user_version = {v};"))
}

/// Public entry point: bring the store up to the current schema.
///
/// Invoked from db::init_db(). A store already at version 1 only gets the
/// idempotent IF NOT EXISTS statements re-applied.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    let apply = |conn: &Connection| -> rusqlite::Result<bool> {
        // 1) Ensure log table
        ensure_log_table(conn)?;

        // 2) Ensure reports table + indexes
        let fresh = !reports_table_exists(conn)?;
        create_reports_table(conn)?;

        // 3) Stamp the (single, fixed) schema version
        if schema_version(conn)? < SCHEMA_VERSION {
            set_schema_version(conn, SCHEMA_VERSION)?;
        }

        Ok(fresh)
    };

    // A failed upgrade means the store cannot be used at all.
    let fresh = apply(conn).map_err(|e| AppError::StoreUnavailable(e.to_string()))?;

    if fresh {
        success("Created reports table (schema v1).");
    }

    Ok(())
}
