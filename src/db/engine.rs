//! The ledger handle: one SQLite connection owned by the caller.

use crate::db::initialize::init_db;
use crate::errors::{AppError, AppResult};
use rusqlite::Connection;
use std::path::{Path, PathBuf};

/// An open ledger.
///
/// Every operation borrows the engine; there is no process-wide handle.
/// Dropping the engine closes the connection.
pub struct Engine {
    conn: Connection,
    path: Option<PathBuf>,
}

impl Engine {
    /// Open (or create) the ledger file at `path` and make sure the schema exists.
    pub fn open<P: AsRef<Path>>(path: P) -> AppResult<Self> {
        let path = path.as_ref();
        let conn = Connection::open(path).map_err(|e| connection_error(path, e))?;
        Self::from_connection(conn, Some(path.to_path_buf()))
    }

    /// Same as [`Engine::open`] over a private in-memory database.
    pub fn open_in_memory() -> AppResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| AppError::Connection {
            path: ":memory:".into(),
            reason: e.to_string(),
        })?;
        Self::from_connection(conn, None)
    }

    fn from_connection(conn: Connection, path: Option<PathBuf>) -> AppResult<Self> {
        // SQLite opens lazily: touch the file now so an unreadable path
        // surfaces as a connection error rather than a schema one.
        conn.query_row("SELECT COUNT(*) FROM sqlite_master", [], |row| {
            row.get::<_, i64>(0)
        })
        .map_err(|e| {
            connection_error(path.as_deref().unwrap_or(Path::new(":memory:")), e)
        })?;

        init_db(&conn)?;

        log::debug!(
            "ledger opened at {}",
            path.as_deref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| ":memory:".into())
        );

        Ok(Self { conn, path })
    }

    /// Create any missing table. Safe to call repeatedly.
    pub fn ensure_schema(&self) -> AppResult<()> {
        init_db(&self.conn)
    }

    /// Backing file, `None` for in-memory ledgers.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub(crate) fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Run `PRAGMA integrity_check` and return its verdict (`"ok"` when healthy).
    pub fn integrity_check(&self) -> AppResult<String> {
        Ok(self
            .conn
            .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?)
    }

    pub fn vacuum(&self) -> AppResult<()> {
        self.conn.execute_batch("VACUUM;")?;
        Ok(())
    }
}

fn connection_error(path: &Path, e: rusqlite::Error) -> AppError {
    AppError::Connection {
        path: path.display().to_string(),
        reason: e.to_string(),
    }
}

/// Reject blank names before they reach the store. Returns the trimmed name.
pub(crate) fn checked_name<'a>(kind: &str, name: &'a str) -> AppResult<&'a str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(AppError::InvalidName(format!("{kind} name cannot be empty")));
    }
    Ok(trimmed)
}
