//! Aggregation queries. Read-only: they never write, and unknown project
//! names produce empty vectors rather than errors.

use crate::db::engine::Engine;
use crate::errors::{AppError, AppResult};
use crate::models::{BlockInfo, DailyStat};
use chrono::NaiveDate;
use rusqlite::{Row, ToSql};

const DAILY_BASE_QUERY: &str = "
    SELECT e.date, b.name, SUM(e.minutes), MAX(COALESCE(b.target_minutes, 0), 0)
    FROM entries e
    JOIN blocks b ON e.block_id = b.id
    JOIN projects p ON b.project_id = p.id
    WHERE p.name = ?1";

const DAILY_GROUPING: &str = "
    GROUP BY e.date, b.id
    ORDER BY e.date DESC, b.name ASC";

impl Engine {
    /// Minutes per `(date, block)` for the project, newest date first and
    /// block names ascending within a date.
    pub fn get_project_report(&self, project: &str) -> AppResult<Vec<DailyStat>> {
        self.daily_stats(project, None)
    }

    /// Like [`Engine::get_project_report`], restricted to `from..=to`.
    pub fn get_project_report_between(
        &self,
        project: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> AppResult<Vec<DailyStat>> {
        self.daily_stats(project, Some((from, to)))
    }

    fn daily_stats(
        &self,
        project: &str,
        bounds: Option<(NaiveDate, NaiveDate)>,
    ) -> AppResult<Vec<DailyStat>> {
        let project = project.trim();
        let mut query = DAILY_BASE_QUERY.to_string();
        let mut params: Vec<String> = vec![project.to_string()];

        if let Some((from, to)) = bounds {
            query.push_str(" AND e.date BETWEEN ?2 AND ?3");
            params.push(from.format("%Y-%m-%d").to_string());
            params.push(to.format("%Y-%m-%d").to_string());
        }
        query.push_str(DAILY_GROUPING);

        let mut stmt = self.conn().prepare(&query)?;
        let bound: Vec<&dyn ToSql> = params.iter().map(|p| p as &dyn ToSql).collect();
        let rows = stmt.query_map(bound.as_slice(), map_daily_stat)?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    /// Every block of the project, including blocks that never got an entry,
    /// ordered by name.
    pub fn get_project_blocks(&self, project: &str) -> AppResult<Vec<BlockInfo>> {
        let mut stmt = self.conn().prepare(
            "SELECT b.name,
                    MAX(COALESCE(b.target_minutes, 0), 0),
                    COALESCE(SUM(e.minutes), 0),
                    COUNT(e.id)
             FROM projects p
             JOIN blocks b ON b.project_id = p.id
             LEFT JOIN entries e ON e.block_id = b.id
             WHERE p.name = ?1
             GROUP BY b.id
             ORDER BY b.name ASC",
        )?;

        let rows = stmt.query_map([project.trim()], |row| {
            Ok(BlockInfo {
                name: row.get(0)?,
                target_minutes: row.get(1)?,
                total_minutes: row.get(2)?,
                has_data: row.get::<_, i64>(3)? > 0,
            })
        })?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }
}

fn map_daily_stat(row: &Row) -> rusqlite::Result<DailyStat> {
    let date_str: String = row.get(0)?;

    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str.clone())),
        )
    })?;

    Ok(DailyStat {
        date,
        block_name: row.get(1)?,
        total_minutes: row.get(2)?,
        target_minutes: row.get(3)?,
    })
}
