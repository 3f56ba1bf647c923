//! Single-bucket shortcuts kept from the pre-project era.
//! They all target the project named `default`.

use crate::db::engine::Engine;
use crate::errors::AppResult;
use crate::models::project::{DEFAULT_PROJECT, DEFAULT_REFRESH_INTERVAL, DEFAULT_TARGET_MINUTES};
use crate::models::{DailyStat, WriteOutcome};
use chrono::NaiveDate;

impl Engine {
    /// Make sure the `default` project exists, then add `block` to it with the default target.
    pub fn create_block(&self, block: &str) -> AppResult<WriteOutcome> {
        self.create_project(DEFAULT_PROJECT, DEFAULT_REFRESH_INTERVAL)?;
        self.add_block(DEFAULT_PROJECT, block, DEFAULT_TARGET_MINUTES)
    }

    pub fn add_default_entry(
        &self,
        block: &str,
        minutes: u32,
        date: NaiveDate,
    ) -> AppResult<WriteOutcome> {
        self.add_entry(DEFAULT_PROJECT, block, minutes, date)
    }

    pub fn get_default_report(&self) -> AppResult<Vec<DailyStat>> {
        self.get_project_report(DEFAULT_PROJECT)
    }
}
