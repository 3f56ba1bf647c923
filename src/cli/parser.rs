use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for blocktracker
#[derive(Parser)]
#[command(
    name = "tracker",
    version = env!("CARGO_PKG_VERSION"),
    about = "Block-based time tracking: log minutes per block and compare them with targets",
    long_about = "Tables (projects) hold blocks; each block collects daily entries in minutes. Reports roll entries up per day and per block against the block target."
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (schema, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Create missing tables")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal audit log
    Audit {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Create a new table (e.g. tracker new-table coding --refresh 30d)
    #[command(name = "new-table")]
    NewTable {
        name: String,

        /// Refresh interval (e.g. 1d, 7d, 30d); defaults to the configured one
        #[arg(short, long)]
        refresh: Option<String>,
    },

    /// Add a work block to an existing table (e.g. tracker add-block coding rust)
    #[command(name = "add-block")]
    AddBlock {
        table: String,
        block: String,

        /// Target in minutes; defaults to the configured one
        #[arg(short, long)]
        target: Option<u32>,
    },

    /// Log minutes on a block (e.g. tracker log coding rust 45)
    Log {
        table: String,
        block: String,
        minutes: u32,

        /// Date of the entry (YYYY-MM-DD), today if omitted
        #[arg(long)]
        date: Option<String>,
    },

    /// Log minutes on a block of the default table, creating the block if needed
    Quick {
        block: String,
        minutes: u32,

        #[arg(long)]
        date: Option<String>,
    },

    /// Show the report of a table (e.g. tracker report coding)
    Report { table: String },

    /// List all tables
    Tables,

    /// Delete every logged entry of a table, keeping its blocks
    Cleanup {
        table: String,

        #[arg(long, short = 'f', help = "Do not ask for confirmation")]
        force: bool,
    },

    /// Delete a table with all its blocks and entries
    #[command(name = "drop-table")]
    DropTable {
        table: String,

        #[arg(long, short = 'f', help = "Do not ask for confirmation")]
        force: bool,
    },

    /// Delete a block and its entries
    #[command(name = "remove-block")]
    RemoveBlock {
        table: String,
        block: String,

        #[arg(long, short = 'f', help = "Do not ask for confirmation")]
        force: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, help = "Compress the backup as .zip")]
        compress: bool,

        #[arg(long, short = 'f', help = "Overwrite without confirmation")]
        force: bool,
    },

    /// Export the daily totals (or block summaries) of a table
    Export {
        table: String,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE", help = "Output file (absolute path)")]
        file: String,

        /// Date range to export.
        ///
        /// Supported formats:
        /// - YYYY, YYYY-MM, YYYY-MM-DD
        /// - start:end in the same format (e.g. 2025-06-01:2025-06-30)
        /// - all
        #[arg(long, value_name = "RANGE")]
        range: Option<String>,

        #[arg(long, help = "Export per-block totals instead of daily rows")]
        blocks: bool,

        #[arg(long, short = 'f', help = "Overwrite without confirmation")]
        force: bool,
    },
}
