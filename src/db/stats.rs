use crate::db::engine::Engine;
use crate::errors::AppResult;
use std::fs;

/// Figures shown by `tracker db --info`.
#[derive(Debug, Clone, PartialEq)]
pub struct DbInfo {
    /// Size of the backing file in bytes, 0 for in-memory ledgers.
    pub file_size: u64,
    pub projects: i64,
    pub blocks: i64,
    pub entries: i64,
    pub total_minutes: i64,
    pub first_date: Option<String>,
    pub last_date: Option<String>,
}

impl Engine {
    pub fn database_info(&self) -> AppResult<DbInfo> {
        let file_size = self
            .path()
            .and_then(|p| fs::metadata(p).ok())
            .map(|m| m.len())
            .unwrap_or(0);

        let count = |table: &str| -> AppResult<i64> {
            // Table names come from the fixed list below, never from input.
            let sql = format!("SELECT COUNT(*) FROM {table}");
            Ok(self.conn().query_row(&sql, [], |row| row.get(0))?)
        };

        let (total_minutes, first_date, last_date): (i64, Option<String>, Option<String>) =
            self.conn().query_row(
            "SELECT COALESCE(SUM(minutes), 0), MIN(date), MAX(date) FROM entries",
            [],
            |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
        )?;

        Ok(DbInfo {
            file_size,
            projects: count("projects")?,
            blocks: count("blocks")?,
            entries: count("entries")?,
            total_minutes,
            first_date,
            last_date,
        })
    }
}
