use crate::cli::commands::open_engine;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::ledger::LedgerLogic;
use crate::errors::AppResult;
use crate::utils::date::date_or_today;

/// `log` and its single-bucket twin `quick`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    match cmd {
        Commands::Log {
            table,
            block,
            minutes,
            date,
        } => {
            let d = date_or_today(date.as_deref())?;
            let engine = open_engine(cfg)?;
            LedgerLogic::log_time(&engine, table, block, *minutes, d)?;
        }
        Commands::Quick {
            block,
            minutes,
            date,
        } => {
            let d = date_or_today(date.as_deref())?;
            let engine = open_engine(cfg)?;
            LedgerLogic::quick(&engine, block, *minutes, d)?;
        }
        _ => {}
    }

    Ok(())
}
