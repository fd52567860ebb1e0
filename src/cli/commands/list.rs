use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::open_store;
use crate::db::queries::{load_all_reports, load_reports_by_date};
use crate::errors::AppResult;
use crate::models::report::Report;
use crate::ui::messages::info;
use crate::utils::colors::colorize_optional;
use crate::utils::date;
use crate::utils::formatting::amount2readable;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { period, now } = cmd {
        let mut pool = open_store(&cfg.database)?;

        //
        // 1. Collect the reports for the requested period
        //
        let reports: Vec<Report> = if *now {
            load_reports_by_date(&mut pool, &date::today())?
        } else if let Some(p) = period {
            let mut out = Vec::new();
            for d in resolve_period(p)? {
                out.extend(load_reports_by_date(&mut pool, &d)?);
            }
            out
        } else {
            load_all_reports(&mut pool)?
        };

        if reports.is_empty() {
            info("No saved reports.");
            return Ok(());
        }

        //
        // 2. Render
        //
        print_reports(&reports);
        println!("{} report(s).", reports.len());
    }
    Ok(())
}

fn resolve_period(period: &str) -> AppResult<Vec<chrono::NaiveDate>> {
    use crate::errors::AppError;

    if let Some((start, end)) = period.split_once(':') {
        return date::generate_range(start, end).map_err(AppError::InvalidDate);
    }

    date::generate_from_period(period).map_err(AppError::InvalidDate)
}

fn print_reports(reports: &[Report]) {
    let mut table = Table::new(vec![
        Column::new("ID", 5),
        Column::new("Date", 10),
        Column::new("Time", 5),
        Column::new("Sup.cards", 9),
        Column::new("Sup.amount", 10),
        Column::new("Sup.total", 10),
        Column::new("Exc.cards", 9),
        Column::new("Exc.amount", 10),
        Column::new("Img", 3),
        Column::new("Notes", 20),
    ]);

    for r in reports {
        table.add_row(vec![
            r.id.to_string(),
            r.date_str(),
            r.time_str(),
            r.supply_cards.to_string(),
            amount2readable(r.supply_amount),
            amount2readable(r.supply_total),
            r.exchange_cards.to_string(),
            amount2readable(r.exchange_amount),
            if r.image.is_empty() { "-" } else { "✓" }.to_string(),
            colorize_optional(&r.notes),
        ]);
    }

    println!("\n📋 Saved reports:\n");
    print!("{}", table.render());
}
