use crate::db::Engine;
use crate::errors::{AppError, AppResult};
use crate::models::WriteOutcome;
use crate::ui::messages::{info, success, warning};
use chrono::NaiveDate;

/// High-level business logic for the commands that write to the ledger.
///
/// Every successful write is mirrored in the internal audit table; a failure
/// to audit never fails the command.
pub struct LedgerLogic;

fn audit(engine: &Engine, operation: &str, target: &str, message: &str) {
    if let Err(e) = engine.audit(operation, target, message) {
        warning(format!("Failed to write internal log: {}", e));
    }
}

impl LedgerLogic {
    pub fn new_table(engine: &Engine, name: &str, refresh: &str) -> AppResult<WriteOutcome> {
        let outcome = engine.create_project(name, refresh)?;

        match outcome {
            WriteOutcome::Created => {
                success(format!(
                    "Table '{}' created (refresh interval {}).",
                    name, refresh
                ));
                audit(engine, "new_table", name, &format!("refresh={refresh}"));
            }
            _ => info(format!("Table '{}' already exists, left unchanged.", name)),
        }
        Ok(outcome)
    }

    pub fn add_block(
        engine: &Engine,
        table: &str,
        block: &str,
        target: u32,
    ) -> AppResult<WriteOutcome> {
        let outcome = engine.add_block(table, block, target)?;

        match outcome {
            WriteOutcome::Created => {
                success(format!(
                    "Block '{}' added to '{}' (target: {} min).",
                    block, table, target
                ));
                audit(
                    engine,
                    "add_block",
                    &format!("{table}/{block}"),
                    &format!("target={target}"),
                );
            }
            WriteOutcome::AlreadyExists => {
                info(format!(
                    "Block '{}' already exists in '{}', left unchanged.",
                    block, table
                ));
            }
            WriteOutcome::NotFound => {
                return Err(AppError::Other(format!(
                    "Table '{}' does not exist. Create it with: tracker new-table {}",
                    table, table
                )));
            }
        }
        Ok(outcome)
    }

    pub fn log_time(
        engine: &Engine,
        table: &str,
        block: &str,
        minutes: u32,
        date: NaiveDate,
    ) -> AppResult<WriteOutcome> {
        let outcome = engine.add_entry(table, block, minutes, date)?;

        if outcome == WriteOutcome::NotFound {
            return Err(AppError::Other(format!(
                "No block '{}' in table '{}'. Check the table and block names.",
                block, table
            )));
        }

        success(format!(
            "{} min logged on {}: {} > {}",
            minutes, date, table, block
        ));
        audit(
            engine,
            "log",
            &format!("{table}/{block}"),
            &format!("{minutes} min on {date}"),
        );
        Ok(outcome)
    }

    /// Log into the `default` table, creating the block on first use.
    pub fn quick(
        engine: &Engine,
        block: &str,
        minutes: u32,
        date: NaiveDate,
    ) -> AppResult<WriteOutcome> {
        if engine.create_block(block)?.is_written() {
            info(format!("Block '{}' created in the default table.", block));
        }

        let outcome = engine.add_default_entry(block, minutes, date)?;
        if outcome.is_written() {
            success(format!("{} min logged on {}: {}", minutes, date, block));
            audit(
                engine,
                "quick",
                block,
                &format!("{minutes} min on {date}"),
            );
        }
        Ok(outcome)
    }

    pub fn cleanup(engine: &Engine, table: &str) -> AppResult<usize> {
        let removed = engine.cleanup_project(table)?;

        if removed == 0 {
            info(format!("Nothing to clean in '{}'.", table));
        } else {
            success(format!(
                "Removed {} entr{} from '{}'.",
                removed,
                if removed == 1 { "y" } else { "ies" },
                table
            ));
            audit(engine, "cleanup", table, &format!("{removed} entries removed"));
        }
        Ok(removed)
    }

    pub fn drop_table(engine: &Engine, table: &str) -> AppResult<bool> {
        let removed = engine.remove_project(table)?;

        if removed {
            success(format!("Table '{}' and all its blocks were deleted.", table));
            audit(engine, "drop_table", table, "table deleted");
        } else {
            warning(format!("No table named '{}'.", table));
        }
        Ok(removed)
    }

    pub fn remove_block(engine: &Engine, table: &str, block: &str) -> AppResult<bool> {
        let removed = engine.remove_block(table, block)?;

        if removed {
            success(format!("Block '{}' removed from '{}'.", block, table));
            audit(
                engine,
                "remove_block",
                &format!("{table}/{block}"),
                "block deleted",
            );
        } else {
            warning(format!("No block '{}' in table '{}'.", block, table));
        }
        Ok(removed)
    }
}
