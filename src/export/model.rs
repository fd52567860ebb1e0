// src/export/model.rs

use crate::models::report::Report;
use serde::Serialize;

/// Flat row shape shared by all export backends.
///
/// The inline image payload is deliberately not exported: spreadsheet and
/// CSV consumers want the figures, not megabytes of base64.
#[derive(Serialize, Clone, Debug)]
pub struct ReportExport {
    pub id: i64,
    pub date: String,
    pub time: String,
    pub supply_cards: i64,
    pub supply_amount: f64,
    pub supply_total: f64,
    pub exchange_cards: i64,
    pub exchange_amount: f64,
    pub notes: String,
    pub timestamp: String,
}

impl From<&Report> for ReportExport {
    fn from(r: &Report) -> Self {
        Self {
            id: r.id,
            date: r.date_str(),
            time: r.time_str(),
            supply_cards: r.supply_cards,
            supply_amount: r.supply_amount,
            supply_total: r.supply_total,
            exchange_cards: r.exchange_cards,
            exchange_amount: r.exchange_amount,
            notes: r.notes.clone(),
            timestamp: r.timestamp.clone(),
        }
    }
}

/// Header row for CSV / XLSX.
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "id",
        "date",
        "time",
        "supply_cards",
        "supply_amount",
        "supply_total",
        "exchange_cards",
        "exchange_amount",
        "notes",
        "timestamp",
    ]
}

/// One report as display strings, in header order.
pub(crate) fn report_to_row(r: &ReportExport) -> Vec<String> {
    vec![
        r.id.to_string(),
        r.date.clone(),
        r.time.clone(),
        r.supply_cards.to_string(),
        format!("{:.2}", r.supply_amount),
        format!("{:.2}", r.supply_total),
        r.exchange_cards.to_string(),
        format!("{:.2}", r.exchange_amount),
        r.notes.clone(),
        r.timestamp.clone(),
    ]
}
