use crate::cli::commands::open_engine;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::ReportLogic;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report { table } = cmd {
        let engine = open_engine(cfg)?;
        ReportLogic::print(&engine, cfg, table)?;
    }
    Ok(())
}
