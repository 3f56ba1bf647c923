use crate::db::engine::Engine;
use crate::errors::AppResult;
use chrono::Local;
use rusqlite::params;

/// One row of the internal `log` table.
#[derive(Debug, Clone)]
pub struct AuditRow {
    pub id: i64,
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

impl Engine {
    /// Write an internal log line into the `log` table.
    pub fn audit(&self, operation: &str, target: &str, message: &str) -> AppResult<()> {
        // Timestamp locale, ISO 8601
        let now = Local::now().to_rfc3339();

        let mut stmt = self.conn().prepare_cached(
            "INSERT INTO log (date, operation, target, message)
             VALUES (?1, ?2, ?3, ?4)",
        )?;

        stmt.execute(params![now, operation, target, message])?;
        Ok(())
    }

    /// Oldest first.
    pub fn load_audit(&self) -> AppResult<Vec<AuditRow>> {
        let mut stmt = self.conn().prepare_cached(
            "SELECT id, date, operation, COALESCE(target, ''), message FROM log ORDER BY id ASC",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(AuditRow {
                id: row.get(0)?,
                date: row.get(1)?,
                operation: row.get(2)?,
                target: row.get(3)?,
                message: row.get(4)?,
            })
        })?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }
}
