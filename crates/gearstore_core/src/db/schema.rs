//! Gear table schema bootstrap.
//!
//! # Responsibility
//! - Create the single `gear` table when absent.
//!
//! # Invariants
//! - Creation is idempotent; re-running against an initialized store is a
//!   no-op.
//! - `id` is the only key; there are no indexes beyond it and no foreign
//!   keys.

use super::DbResult;
use rusqlite::Connection;

const GEAR_TABLE_SQL: &str = "CREATE TABLE IF NOT EXISTS gear (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    producer TEXT NOT NULL,
    model TEXT NOT NULL,
    weight REAL NOT NULL,
    is_packed INTEGER NOT NULL,
    category TEXT NOT NULL
);";

/// Creates the `gear` table if it does not exist yet.
pub fn ensure_gear_table(conn: &Connection) -> DbResult<()> {
    conn.execute_batch(GEAR_TABLE_SQL)?;
    Ok(())
}
