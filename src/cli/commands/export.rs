use crate::cli::commands::open_engine;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        table,
        format,
        file,
        range,
        blocks,
        force,
    } = cmd
    {
        let engine = open_engine(cfg)?;
        ExportLogic::export(
            &engine,
            table,
            *format,
            file,
            range.as_deref(),
            *blocks,
            *force,
        )?;
    }
    Ok(())
}
