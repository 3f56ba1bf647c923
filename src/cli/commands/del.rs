use crate::cli::commands::open_engine;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::ledger::LedgerLogic;
use crate::errors::AppResult;
use crate::ui::messages::{confirm, info};

/// `cleanup`, `drop-table` and `remove-block`: all irreversible, all confirmed.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    match cmd {
        Commands::Cleanup { table, force } => {
            let prompt = format!(
                "Delete ALL logged entries of '{}'? Blocks are kept. This action is irreversible.",
                table
            );
            if !confirm(&prompt, *force)? {
                info("Operation cancelled.");
                return Ok(());
            }
            let engine = open_engine(cfg)?;
            LedgerLogic::cleanup(&engine, table)?;
        }
        Commands::DropTable { table, force } => {
            let prompt = format!(
                "Delete table '{}' with all its blocks and entries? This action is irreversible.",
                table
            );
            if !confirm(&prompt, *force)? {
                info("Operation cancelled.");
                return Ok(());
            }
            let engine = open_engine(cfg)?;
            LedgerLogic::drop_table(&engine, table)?;
        }
        Commands::RemoveBlock {
            table,
            block,
            force,
        } => {
            let prompt = format!(
                "Delete block '{}' of '{}' with all its entries? This action is irreversible.",
                block, table
            );
            if !confirm(&prompt, *force)? {
                info("Operation cancelled.");
                return Ok(());
            }
            let engine = open_engine(cfg)?;
            LedgerLogic::remove_block(&engine, table, block)?;
        }
        _ => {}
    }

    Ok(())
}
