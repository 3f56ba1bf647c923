use crate::cli::commands::open_engine;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RED, RESET, YELLOW};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        migrate,
        check,
        vacuum,
        info,
    } = cmd
    {
        // opening already ensures the schema
        let engine = open_engine(cfg)?;

        //
        // 1) MIGRATE
        //
        if *migrate {
            println!("{}▶ Ensuring schema…{}", CYAN, RESET);
            engine.ensure_schema()?;
            println!("{}✔ Schema up to date.{}\n", GREEN, RESET);
        }

        //
        // 2) INFO
        //
        if *info {
            let stats = engine.database_info()?;
            let file_mb = (stats.file_size as f64) / (1024.0 * 1024.0);
            let or_dash = |d: Option<String>| d.unwrap_or_else(|| format!("{GREY}--{RESET}"));

            println!();
            println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, cfg.database, RESET);
            println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);
            println!("{}• Tables:{} {}{}{}", CYAN, RESET, GREEN, stats.projects, RESET);
            println!("{}• Blocks:{} {}{}{}", CYAN, RESET, GREEN, stats.blocks, RESET);
            println!("{}• Entries:{} {}{}{}", CYAN, RESET, GREEN, stats.entries, RESET);
            println!("{}• Minutes logged:{} {}", CYAN, RESET, stats.total_minutes);
            println!("{}• Date range:{}", CYAN, RESET);
            println!("    from: {}", or_dash(stats.first_date));
            println!("    to:   {}", or_dash(stats.last_date));
            println!();
        }

        //
        // 3) CHECK
        //
        if *check {
            println!("{}▶ Running integrity check…{}", CYAN, RESET);

            let integrity = engine.integrity_check()?;
            if integrity == "ok" {
                println!("{}✔ Integrity check passed.{}\n", GREEN, RESET);
            } else {
                println!("{}✘ Integrity check failed:{} {}\n", RED, RESET, integrity);
            }
        }

        //
        // 4) VACUUM
        //
        if *vacuum {
            println!("{}▶ Running VACUUM…{}", CYAN, RESET);
            engine.vacuum()?;
            println!("{}✔ Vacuum completed.{}\n", GREEN, RESET);
        }
    }

    Ok(())
}
