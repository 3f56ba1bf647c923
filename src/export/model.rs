// src/export/model.rs

use crate::models::{BlockInfo, DailyStat};
use serde::Serialize;

/// Flat row for exporting daily totals.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct DailyExport {
    pub project: String,
    pub date: String,
    pub block: String,
    pub total_minutes: i64,
    pub target_minutes: u32,
    pub progress_percent: f64,
}

/// Flat row for exporting per-block totals.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct BlockExport {
    pub project: String,
    pub block: String,
    pub target_minutes: u32,
    pub total_minutes: i64,
    pub has_data: bool,
}

impl DailyExport {
    pub fn from_stat(project: &str, s: &DailyStat) -> Self {
        Self {
            project: project.to_string(),
            date: s.date.format("%Y-%m-%d").to_string(),
            block: s.block_name.clone(),
            total_minutes: s.total_minutes,
            target_minutes: s.target_minutes,
            progress_percent: (s.progress() * 10.0).round() / 10.0,
        }
    }
}

impl BlockExport {
    pub fn from_info(project: &str, b: &BlockInfo) -> Self {
        Self {
            project: project.to_string(),
            block: b.name.clone(),
            target_minutes: b.target_minutes,
            total_minutes: b.total_minutes,
            has_data: b.has_data,
        }
    }
}
