//! blocktracker library root.
//! Exposes the ledger engine, the CLI parser and the high-level run() function.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

pub use db::Engine;
pub use errors::{AppError, AppResult};
pub use models::{BlockInfo, DailyStat, ProjectSummary, WriteOutcome};

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Db { .. } => cli::commands::db::handle(&cli.command, cfg),
        Commands::Audit { .. } => cli::commands::audit::handle(&cli.command, cfg),
        Commands::NewTable { .. } | Commands::AddBlock { .. } | Commands::Tables => {
            cli::commands::table::handle(&cli.command, cfg)
        }
        Commands::Log { .. } | Commands::Quick { .. } => {
            cli::commands::log::handle(&cli.command, cfg)
        }
        Commands::Report { .. } => cli::commands::report::handle(&cli.command, cfg),
        Commands::Cleanup { .. } | Commands::DropTable { .. } | Commands::RemoveBlock { .. } => {
            cli::commands::del::handle(&cli.command, cfg)
        }
        Commands::Backup { .. } => cli::commands::backup::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once
    let mut cfg = Config::load()?;

    // 3️⃣ command-line database override
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    // 4️⃣ dispatch
    dispatch(&cli, &cfg)
}
