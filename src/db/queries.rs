use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::report::{NewReport, Report};
use chrono::{NaiveDate, NaiveTime};
use rusqlite::{Connection, Row, params};

pub fn map_row(row: &Row) -> rusqlite::Result<Report> {
    let date_str: String = row.get("date")?;
    let time_str: String = row.get("time")?;

    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str.clone())),
        )
    })?;

    let time = NaiveTime::parse_from_str(&time_str, "%H:%M").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidTime(time_str.clone())),
        )
    })?;

    Ok(Report {
        id: row.get("id")?,
        date,
        time,
        supply_cards: row.get("supply_cards")?,
        supply_amount: row.get("supply_amount")?,
        supply_total: row.get("supply_total")?,
        exchange_cards: row.get("exchange_cards")?,
        exchange_amount: row.get("exchange_amount")?,
        notes: row.get("notes")?,
        image: row.get("image")?,
        timestamp: row.get("timestamp")?,
    })
}

/// Append a report. The store assigns the id; the caller never supplies one.
/// A transaction abort surfaces as `WriteFailed`.
pub fn insert_report(conn: &Connection, rec: &NewReport) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO reports (date, time, supply_cards, supply_amount, supply_total,
                              exchange_cards, exchange_amount, notes, image, timestamp)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
        params![
            rec.date.format("%Y-%m-%d").to_string(),
            rec.time.format("%H:%M").to_string(),
            rec.supply_cards,
            rec.supply_amount,
            rec.supply_total,
            rec.exchange_cards,
            rec.exchange_amount,
            rec.notes,
            rec.image,
            rec.timestamp,
        ],
    )
    .map_err(|e| AppError::WriteFailed(e.to_string()))?;

    Ok(conn.last_insert_rowid())
}

/// All reports for a single date, in insertion order.
pub fn load_reports_by_date(pool: &mut DbPool, date: &NaiveDate) -> AppResult<Vec<Report>> {
    let mut stmt = pool.conn.prepare(
        "SELECT * FROM reports
         WHERE date = ?1
         ORDER BY id ASC",
    )?;

    let date_str = date.format("%Y-%m-%d").to_string();

    let rows = stmt.query_map([date_str], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Every report, in store-native (insertion) order.
pub fn load_all_reports(pool: &mut DbPool) -> AppResult<Vec<Report>> {
    let mut stmt = pool.conn.prepare("SELECT * FROM reports ORDER BY id ASC")?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Remove a report by id. Deleting an unknown id is a no-op success:
/// a keyed store holds at most one record per id, so there is nothing
/// to distinguish from "already gone". Returns the affected row count.
pub fn delete_report(pool: &mut DbPool, id: i64) -> AppResult<usize> {
    pool.conn
        .execute("DELETE FROM reports WHERE id = ?", [id])
        .map_err(|e| AppError::WriteFailed(e.to_string()))
}

pub fn count_reports(pool: &mut DbPool) -> AppResult<i64> {
    let n = pool
        .conn
        .query_row("SELECT COUNT(*) FROM reports", [], |row| row.get(0))?;
    Ok(n)
}
