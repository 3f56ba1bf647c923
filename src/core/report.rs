use crate::config::Config;
use crate::db::Engine;
use crate::errors::AppResult;
use crate::models::{BlockInfo, DailyStat};
use crate::ui::messages::{header, info};
use crate::utils::colors::{GREY, GREEN, RESET, color_for_progress, paint};
use crate::utils::formatting::{bold, mins2readable, progress_bar};
use crate::utils::table::Table;

pub struct ReportLogic;

impl ReportLogic {
    /// Print the block overview followed by the per-day breakdown.
    pub fn print(engine: &Engine, cfg: &Config, table: &str) -> AppResult<()> {
        let rule_width = 60;
        header(format!("📊 Report: {}", table), &cfg.separator_char, rule_width);

        if !engine.project_exists(table)? {
            info(format!(
                "No table named '{}'. Create it with: tracker new-table {}",
                table, table
            ));
            return Ok(());
        }

        let blocks = engine.get_project_blocks(table)?;
        if blocks.is_empty() {
            info("This table exists but has no blocks yet.");
            println!(
                "💡 Add one with: tracker add-block {} <block> --target <minutes>",
                table
            );
            return Ok(());
        }

        println!("{}", bold("📋 Blocks"));
        println!("{}", render_blocks(&blocks, cfg.progress_width));

        let stats = engine.get_project_report(table)?;
        if stats.is_empty() {
            println!("💡 Log time with: tracker log {} <block> <minutes>", table);
        } else {
            println!("{}", bold("📈 Daily entries"));
            println!("{}", render_daily(&stats, cfg.progress_width));
        }

        println!("{}", cfg.separator_char.repeat(rule_width));
        Ok(())
    }
}

pub fn render_blocks(blocks: &[BlockInfo], width: usize) -> String {
    let mut t = Table::new(vec!["Block", "Target", "Total", "Status", "Progress"]);

    for b in blocks {
        let percent = b.progress();
        let status = if b.has_data {
            paint(GREEN, "data")
        } else {
            paint(GREY, "no data")
        };

        t.add_row(vec![
            b.name.clone(),
            format!("{} min", b.target_minutes),
            mins2readable(b.total_minutes, false),
            status,
            format!(
                "{}{}{}",
                color_for_progress(percent),
                progress_bar(percent, width),
                RESET
            ),
        ]);
    }

    t.render()
}

pub fn render_daily(stats: &[DailyStat], width: usize) -> String {
    let mut t = Table::new(vec!["Date", "Block", "Total", "Target", "Progress"]);

    for s in stats {
        let percent = s.progress();
        t.add_row(vec![
            s.date.format("%Y-%m-%d").to_string(),
            s.block_name.clone(),
            format!("{} min", s.total_minutes),
            format!("{} min", s.target_minutes),
            format!(
                "{}{}{}",
                color_for_progress(percent),
                progress_bar(percent, width),
                RESET
            ),
        ]);
    }

    t.render()
}
