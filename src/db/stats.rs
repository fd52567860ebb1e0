use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::day_stats::DayStats;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use chrono::NaiveDate;
use rusqlite::OptionalExtension;
use std::fs;

/// Aggregate a single day's reports: operation count, card sums and the
/// combined monetary total (supply_total + exchange_amount).
///
/// A date with no reports yields the zeroed default, never an error.
pub fn day_stats(pool: &mut DbPool, date: &NaiveDate) -> AppResult<DayStats> {
    let date_str = date.format("%Y-%m-%d").to_string();

    let stats = pool.conn.query_row(
        "SELECT COUNT(*),
                IFNULL(SUM(supply_cards), 0),
                IFNULL(SUM(exchange_cards), 0),
                IFNULL(SUM(supply_total + exchange_amount), 0.0)
         FROM reports
         WHERE date = ?1",
        [date_str],
        |row| {
            Ok(DayStats {
                operations: row.get(0)?,
                supply_cards: row.get(1)?,
                exchange_cards: row.get(2)?,
                total_amount: row.get(3)?,
            })
        },
    )?;

    Ok(stats)
}

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) TOTAL REPORTS
    //
    let count: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM reports", [], |row| row.get(0))?;
    println!(
        "{}• Total reports:{} {}{}{}",
        CYAN, RESET, GREEN, count, RESET
    );

    //
    // 3) DATE RANGE
    //
    let first_date: Option<String> = pool
        .conn
        .query_row(
            "SELECT date FROM reports ORDER BY date ASC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let last_date: Option<String> = pool
        .conn
        .query_row(
            "SELECT date FROM reports ORDER BY date DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let fmt_first = first_date.unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = last_date.unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    //
    // 4) TOTAL LOGGED AMOUNT
    //
    let total: f64 = pool.conn.query_row(
        "SELECT IFNULL(SUM(supply_total + exchange_amount), 0.0) FROM reports",
        [],
        |row| row.get(0),
    )?;
    println!("{}• Total amount:{} {:.2}", CYAN, RESET, total);

    println!();
    Ok(())
}
