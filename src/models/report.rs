use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

/// A persisted receipt report.
///
/// Once inserted a report is immutable: there is no update path, only
/// `del` by id. The `id` is assigned by the store and never reused.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub id: i64,
    pub date: NaiveDate,      // ⇔ reports.date (TEXT "YYYY-MM-DD", indexed)
    pub time: NaiveTime,      // ⇔ reports.time (TEXT "HH:MM")
    pub supply_cards: i64,    // ⇔ reports.supply_cards (INT, count)
    pub supply_amount: f64,   // ⇔ reports.supply_amount (REAL)
    pub supply_total: f64,    // ⇔ reports.supply_total (REAL)
    pub exchange_cards: i64,  // ⇔ reports.exchange_cards (INT, count)
    pub exchange_amount: f64, // ⇔ reports.exchange_amount (REAL)
    pub notes: String,        // ⇔ reports.notes (TEXT, default '')
    pub image: String,        // ⇔ reports.image (TEXT data URL, default '')
    pub timestamp: String,    // ⇔ reports.timestamp (TEXT, RFC3339, indexed)
}

/// A report about to be inserted. Same shape as [`Report`] minus the id,
/// which only the store may assign.
#[derive(Debug, Clone)]
pub struct NewReport {
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub supply_cards: i64,
    pub supply_amount: f64,
    pub supply_total: f64,
    pub exchange_cards: i64,
    pub exchange_amount: f64,
    pub notes: String,
    pub image: String,
    pub timestamp: String,
}

impl Report {
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn time_str(&self) -> String {
        self.time.format("%H:%M").to_string()
    }
}
