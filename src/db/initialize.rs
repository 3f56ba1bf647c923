use crate::db::migrate::run_pending_migrations;
use crate::errors::{AppError, AppResult};
use rusqlite::Connection;

/// Initialize the database.
/// Turns on foreign-key enforcement (cascades depend on it) and delegates
/// all schema creation to the migration engine.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")
        .map_err(|e| AppError::Schema(format!("cannot enable foreign keys: {e}")))?;

    run_pending_migrations(conn)
}
