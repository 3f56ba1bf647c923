// src/export/logic.rs

use crate::db::Engine;
use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::{BlockExport, DailyExport};
use crate::export::range::parse_range;
use crate::export::ExportFormat;
use crate::ui::messages::warning;
use std::path::Path;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export a table's daily totals, or its block summaries when `blocks` is set.
    ///
    /// Returns the number of rows written (0 when there was nothing to export).
    pub fn export(
        engine: &Engine,
        table: &str,
        format: ExportFormat,
        file: &str,
        range: Option<&str>,
        blocks: bool,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        if blocks && range.is_some() {
            warning("--range is ignored when exporting block summaries.");
        }

        let bounds = match range {
            Some(r) => parse_range(r)?,
            None => None,
        };

        if blocks {
            let rows: Vec<BlockExport> = engine
                .get_project_blocks(table)?
                .iter()
                .map(|b| BlockExport::from_info(table, b))
                .collect();
            write_rows(&rows, format, path, force)
        } else {
            let stats = match bounds {
                Some((from, to)) => engine.get_project_report_between(table, from, to)?,
                None => engine.get_project_report(table)?,
            };
            let rows: Vec<DailyExport> = stats
                .iter()
                .map(|s| DailyExport::from_stat(table, s))
                .collect();
            write_rows(&rows, format, path, force)
        }
    }
}

fn write_rows<T: serde::Serialize>(
    rows: &[T],
    format: ExportFormat,
    path: &Path,
    force: bool,
) -> AppResult<usize> {
    if rows.is_empty() {
        warning("No data found for the selected table/range, nothing exported.");
        return Ok(0);
    }

    ensure_writable(path, force)?;

    match format {
        ExportFormat::Csv => export_csv(rows, path)?,
        ExportFormat::Json => export_json(rows, path)?,
    }

    Ok(rows.len())
}
