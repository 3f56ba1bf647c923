//! Mutations and listings on the project / block / entry hierarchy.
//!
//! Each write is a single parameterised statement. When it touches no row,
//! a read-only follow-up decides between `AlreadyExists` and `NotFound`.

use crate::db::engine::{Engine, checked_name};
use crate::errors::AppResult;
use crate::models::{ProjectSummary, WriteOutcome};
use chrono::NaiveDate;
use rusqlite::{OptionalExtension, params};

impl Engine {
    /// Insert a project. An existing project with the same name is left untouched.
    pub fn create_project(&self, name: &str, refresh_interval: &str) -> AppResult<WriteOutcome> {
        let name = checked_name("project", name)?;

        let inserted = self.conn().execute(
            "INSERT INTO projects (name, refresh_interval) VALUES (?1, ?2)
             ON CONFLICT(name) DO NOTHING",
            params![name, refresh_interval],
        )?;

        let outcome = if inserted > 0 {
            WriteOutcome::Created
        } else {
            WriteOutcome::AlreadyExists
        };
        log::debug!("create_project({name}) -> {}", outcome.as_str());
        Ok(outcome)
    }

    /// Insert a block under the project called `project`.
    pub fn add_block(
        &self,
        project: &str,
        block: &str,
        target_minutes: u32,
    ) -> AppResult<WriteOutcome> {
        let project = checked_name("project", project)?;
        let block = checked_name("block", block)?;

        let inserted = self.conn().execute(
            "INSERT INTO blocks (project_id, name, target_minutes)
             SELECT id, ?2, ?3 FROM projects WHERE name = ?1
             ON CONFLICT(project_id, name) DO NOTHING",
            params![project, block, target_minutes],
        )?;

        let outcome = if inserted > 0 {
            WriteOutcome::Created
        } else if self.project_exists(project)? {
            WriteOutcome::AlreadyExists
        } else {
            log::warn!("add_block: no project named '{project}'");
            WriteOutcome::NotFound
        };
        log::debug!("add_block({project}, {block}) -> {}", outcome.as_str());
        Ok(outcome)
    }

    /// Append an entry to the block `(project, block)`.
    ///
    /// Entries have no natural key: logging twice on the same date stores two rows.
    pub fn add_entry(
        &self,
        project: &str,
        block: &str,
        minutes: u32,
        date: NaiveDate,
    ) -> AppResult<WriteOutcome> {
        let project = checked_name("project", project)?;
        let block = checked_name("block", block)?;

        let inserted = self.conn().execute(
            "INSERT INTO entries (block_id, minutes, date)
             SELECT b.id, ?3, ?4
             FROM blocks b
             JOIN projects p ON b.project_id = p.id
             WHERE p.name = ?1 AND b.name = ?2",
            params![project, block, minutes, date.format("%Y-%m-%d").to_string()],
        )?;

        let outcome = if inserted > 0 {
            WriteOutcome::Created
        } else {
            log::warn!("add_entry: no block '{block}' in project '{project}'");
            WriteOutcome::NotFound
        };
        log::debug!("add_entry({project}, {block}, {minutes}, {date}) -> {}", outcome.as_str());
        Ok(outcome)
    }

    /// Delete every entry logged under the project, keeping the project and its blocks.
    /// Returns how many entries were removed.
    pub fn cleanup_project(&self, project: &str) -> AppResult<usize> {
        let project = checked_name("project", project)?;

        let removed = self.conn().execute(
            "DELETE FROM entries WHERE block_id IN (
                 SELECT b.id FROM blocks b
                 JOIN projects p ON b.project_id = p.id
                 WHERE p.name = ?1
             )",
            [project],
        )?;

        log::debug!("cleanup_project({project}) removed {removed} entries");
        Ok(removed)
    }

    /// Delete a project together with its blocks and entries.
    pub fn remove_project(&self, project: &str) -> AppResult<bool> {
        let project = checked_name("project", project)?;
        let rows = self
            .conn()
            .execute("DELETE FROM projects WHERE name = ?1", [project])?;
        Ok(rows > 0)
    }

    /// Delete one block and its entries.
    pub fn remove_block(&self, project: &str, block: &str) -> AppResult<bool> {
        let project = checked_name("project", project)?;
        let block = checked_name("block", block)?;

        let rows = self.conn().execute(
            "DELETE FROM blocks
             WHERE name = ?2
               AND project_id = (SELECT id FROM projects WHERE name = ?1)",
            params![project, block],
        )?;
        Ok(rows > 0)
    }

    /// All projects ordered by name, with the number of blocks each owns.
    pub fn list_projects(&self) -> AppResult<Vec<ProjectSummary>> {
        let mut stmt = self.conn().prepare(
            "SELECT p.name, COALESCE(p.refresh_interval, '7d'), COUNT(b.id)
             FROM projects p
             LEFT JOIN blocks b ON b.project_id = p.id
             GROUP BY p.id
             ORDER BY p.name ASC",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(ProjectSummary {
                name: row.get(0)?,
                refresh_interval: row.get(1)?,
                block_count: row.get(2)?,
            })
        })?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    pub fn project_exists(&self, project: &str) -> AppResult<bool> {
        let found: Option<i64> = self
            .conn()
            .query_row(
                "SELECT id FROM projects WHERE name = ?1",
                [project.trim()],
                |row| row.get(0),
            )
            .optional()?;
        Ok(found.is_some())
    }
}
