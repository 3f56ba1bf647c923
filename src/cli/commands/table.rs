use crate::cli::commands::open_engine;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::ledger::LedgerLogic;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::table::Table;

/// `new-table`, `add-block` and `tables`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    match cmd {
        Commands::NewTable { name, refresh } => {
            let engine = open_engine(cfg)?;
            let refresh = refresh.as_deref().unwrap_or(&cfg.default_refresh);
            LedgerLogic::new_table(&engine, name, refresh)?;
        }
        Commands::AddBlock {
            table,
            block,
            target,
        } => {
            let engine = open_engine(cfg)?;
            LedgerLogic::add_block(&engine, table, block, target.unwrap_or(cfg.default_target))?;
        }
        Commands::Tables => {
            let engine = open_engine(cfg)?;
            let projects = engine.list_projects()?;

            if projects.is_empty() {
                info("No tables yet. Create one with: tracker new-table <name>");
                return Ok(());
            }

            let mut t = Table::new(vec!["Table", "Refresh", "Blocks"]);
            for p in projects {
                t.add_row(vec![p.name, p.refresh_interval, p.block_count.to_string()]);
            }
            println!("{}", t.render());
        }
        _ => {}
    }

    Ok(())
}
