use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::open_store;
use crate::db::stats::day_stats;
use crate::errors::{AppError, AppResult};
use crate::utils::colors::{GREY, RESET};
use crate::utils::date;
use crate::utils::formatting::amount2readable;

/// Print the aggregated daily summary for a single date.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report { date: date_arg } = cmd {
        let d = match date_arg {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
            None => date::today(),
        };

        let mut pool = open_store(&cfg.database)?;
        let stats = day_stats(&mut pool, &d)?;

        println!("\n=== Daily report for {} ===", d);

        if stats.operations == 0 {
            println!("{GREY}No operations recorded.{RESET}\n");
            return Ok(());
        }

        println!("Operations:     {}", stats.operations);
        println!("Supply cards:   {}", stats.supply_cards);
        println!("Exchange cards: {}", stats.exchange_cards);
        println!("Total amount:   {}", amount2readable(stats.total_amount));
        println!();
    }
    Ok(())
}
