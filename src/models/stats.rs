//! Read-only projections returned by the aggregation queries.

use chrono::NaiveDate;
use serde::Serialize;

/// Minutes logged for one block on one date, next to the block target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyStat {
    pub date: NaiveDate,
    pub block_name: String,
    pub total_minutes: i64,
    pub target_minutes: u32,
}

/// Per-block summary across all dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockInfo {
    pub name: String,
    pub target_minutes: u32,
    pub total_minutes: i64,
    /// True iff at least one entry exists, even a zero-minute one.
    pub has_data: bool,
}

impl DailyStat {
    /// Share of the target reached, in percent. Zero targets report 0.
    pub fn progress(&self) -> f64 {
        progress_percent(self.total_minutes, self.target_minutes)
    }
}

impl BlockInfo {
    pub fn progress(&self) -> f64 {
        progress_percent(self.total_minutes, self.target_minutes)
    }
}

pub(crate) fn progress_percent(total: i64, target: u32) -> f64 {
    if target == 0 {
        0.0
    } else {
        (total as f64 / target as f64) * 100.0
    }
}
