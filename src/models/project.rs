use serde::Serialize;

/// Refresh interval given to projects created without an explicit one.
pub const DEFAULT_REFRESH_INTERVAL: &str = "7d";

/// Target assigned to blocks created without an explicit one.
pub const DEFAULT_TARGET_MINUTES: u32 = 60;

/// Name of the project used by the single-bucket shortcuts.
pub const DEFAULT_PROJECT: &str = "default";

/// One row of `tracker tables`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectSummary {
    pub name: String,
    /// Stored verbatim; nothing reads it yet.
    pub refresh_interval: String,
    pub block_count: i64,
}
