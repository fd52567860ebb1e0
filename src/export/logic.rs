// src/export/logic.rs

use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::model::ReportExport;
use crate::export::range::parse_range;
use crate::ui::messages::warning;

use crate::export::json_csv::{export_csv, export_json};
use crate::export::xlsx::export_xlsx;
use chrono::NaiveDate;
use rusqlite::Row;
use rusqlite::params;
use std::path::Path;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the saved reports.
    ///
    /// - `format`: csv | json | xlsx
    /// - `file`: absolute path of the output file
    /// - `range`: `None`, `"all"` or one of:
    ///   - `YYYY`
    ///   - `YYYY-MM`
    ///   - `YYYY-MM-DD`
    ///   - `YYYY:YYYY`
    ///   - `YYYY-MM:YYYY-MM`
    ///   - `YYYY-MM-DD:YYYY-MM-DD`
    pub fn export(
        pool: &mut DbPool,
        format: ExportFormat,
        file: &str,
        range: &Option<String>,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        ensure_writable(path, force)?;

        let date_bounds: Option<(NaiveDate, NaiveDate)> = match range {
            None => None,
            Some(r) if r.eq_ignore_ascii_case("all") => None,
            Some(r) => Some(parse_range(r)?),
        };

        let reports = load_reports(pool, date_bounds)?;

        if reports.is_empty() {
            warning("⚠️  No reports found for selected range.");
            return Ok(());
        }

        match format {
            ExportFormat::Csv => export_csv(&reports, path)?,
            ExportFormat::Json => export_json(&reports, path)?,
            ExportFormat::Xlsx => export_xlsx(&reports, path)?,
        }

        Ok(())
    }
}

/// Load rows from the DB according to the bounds.
fn load_reports(
    pool: &mut DbPool,
    bounds: Option<(NaiveDate, NaiveDate)>,
) -> AppResult<Vec<ReportExport>> {
    let conn = &mut pool.conn;

    let mut reports = Vec::new();

    match bounds {
        None => {
            let mut stmt = conn.prepare(
                "SELECT id, date, time, supply_cards, supply_amount, supply_total,
                        exchange_cards, exchange_amount, notes, timestamp
                 FROM reports
                 ORDER BY date ASC, id ASC",
            )?;

            let rows = stmt.query_map([], map_row)?;

            for r in rows {
                reports.push(r?);
            }
        }
        Some((start, end)) => {
            let start_str = start.format("%Y-%m-%d").to_string();
            let end_str = end.format("%Y-%m-%d").to_string();

            let mut stmt = conn.prepare(
                "SELECT id, date, time, supply_cards, supply_amount, supply_total,
                        exchange_cards, exchange_amount, notes, timestamp
                 FROM reports
                 WHERE date BETWEEN ?1 AND ?2
                 ORDER BY date ASC, id ASC",
            )?;

            let rows = stmt.query_map(params![start_str, end_str], map_row)?;

            for r in rows {
                reports.push(r?);
            }
        }
    }

    Ok(reports)
}

/// DB → ReportExport mapping (reused by both queries).
fn map_row(row: &Row<'_>) -> rusqlite::Result<ReportExport> {
    Ok(ReportExport {
        id: row.get(0)?,
        date: row.get(1)?,
        time: row.get(2)?,
        supply_cards: row.get(3)?,
        supply_amount: row.get(4)?,
        supply_total: row.get(5)?,
        exchange_cards: row.get(6)?,
        exchange_amount: row.get(7)?,
        notes: row.get(8)?,
        timestamp: row.get(9)?,
    })
}
