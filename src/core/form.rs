//! The editable form between recognition and submit.
//!
//! Field values stay plain strings until submit: the operator can overwrite
//! any OCR-derived default, and numeric coercion happens only once, at
//! submit, with parse-default-0 semantics (a soft condition, never an
//! error).

use crate::core::extract::{ExtractedFigures, parse_amount, parse_count};
use crate::models::report::NewReport;
use chrono::{Local, NaiveDate, NaiveTime};

/// Operator-editable form state.
#[derive(Debug, Clone)]
pub struct ReportForm {
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub supply_cards: String,
    pub supply_amount: String,
    pub supply_total: String,
    pub exchange_cards: String,
    pub exchange_amount: String,
    pub notes: String,
}

impl ReportForm {
    /// Pre-fill from extracted figures, stamping today's date and the
    /// current wall-clock time as defaults (both operator-editable).
    pub fn from_figures(figures: &ExtractedFigures) -> Self {
        let now = Local::now();
        Self {
            date: now.date_naive(),
            time: now.time(),
            supply_cards: figures.supply_cards.to_string(),
            supply_amount: figures.supply_amount.to_string(),
            supply_total: figures.supply_total.to_string(),
            exchange_cards: figures.exchange_cards.to_string(),
            exchange_amount: figures.exchange_amount.to_string(),
            notes: String::new(),
        }
    }

    /// An empty form for the manual `add` path.
    pub fn blank() -> Self {
        Self::from_figures(&ExtractedFigures::default())
    }

    /// Coerce the form into a record, stamping the submission instant.
    /// Unparseable numeric fields silently become 0.
    pub fn into_record(self, image: Option<String>) -> NewReport {
        NewReport {
            date: self.date,
            time: self.time,
            supply_cards: parse_count(self.supply_cards.trim()),
            supply_amount: parse_amount(self.supply_amount.trim()),
            supply_total: parse_amount(self.supply_total.trim()),
            exchange_cards: parse_count(self.exchange_cards.trim()),
            exchange_amount: parse_amount(self.exchange_amount.trim()),
            notes: self.notes,
            image: image.unwrap_or_default(),
            timestamp: Local::now().to_rfc3339(),
        }
    }
}
