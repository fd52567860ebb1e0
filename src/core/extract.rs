//! Numeric extraction heuristic.
//!
//! Scans recognized text left-to-right for numeric tokens (digits with an
//! optional decimal separator) and assigns the first five positionally to
//! the report fields. The mapping follows the configured field order; the
//! default matches the receipt layout this tool was written for. Best-effort
//! only: there is no semantic validation of the extracted quintuple.

use crate::errors::{AppError, AppResult};
use regex::Regex;
use std::sync::OnceLock;

/// Token pattern: one or more digits, optionally a single decimal separator
/// ('.' or ',') and more digits. No thousands separators, no signs.
const TOKEN_PATTERN: &str = r"\d+[.,]?\d*";

fn token_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(TOKEN_PATTERN).expect("token pattern is valid"))
}

/// The five semantic slots a token can land in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    SupplyCards,
    SupplyAmount,
    SupplyTotal,
    ExchangeCards,
    ExchangeAmount,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::SupplyCards => "supply_cards",
            Field::SupplyAmount => "supply_amount",
            Field::SupplyTotal => "supply_total",
            Field::ExchangeCards => "exchange_cards",
            Field::ExchangeAmount => "exchange_amount",
        }
    }

    pub fn from_name(name: &str) -> Option<Field> {
        match name {
            "supply_cards" => Some(Field::SupplyCards),
            "supply_amount" => Some(Field::SupplyAmount),
            "supply_total" => Some(Field::SupplyTotal),
            "exchange_cards" => Some(Field::ExchangeCards),
            "exchange_amount" => Some(Field::ExchangeAmount),
            _ => None,
        }
    }
}

/// Default positional layout: tokens 1..5 map to these fields in order.
pub const DEFAULT_ORDER: [Field; 5] = [
    Field::SupplyCards,
    Field::SupplyAmount,
    Field::SupplyTotal,
    Field::ExchangeCards,
    Field::ExchangeAmount,
];

/// Validate a configured order: exactly five names, each field once.
pub fn parse_order(names: &[String]) -> AppResult<[Field; 5]> {
    if names.len() != 5 {
        return Err(AppError::Config(format!(
            "field_order must list exactly 5 fields, got {}",
            names.len()
        )));
    }

    let mut order = [Field::SupplyCards; 5];
    for (i, name) in names.iter().enumerate() {
        order[i] = Field::from_name(name).ok_or_else(|| AppError::InvalidField(name.clone()))?;
    }

    for f in DEFAULT_ORDER {
        if !order.contains(&f) {
            return Err(AppError::Config(format!(
                "field_order is missing '{}'",
                f.as_str()
            )));
        }
    }

    Ok(order)
}

/// The extracted quintuple. Counts are integral, amounts decimal; every
/// field defaults to 0 when its token is missing or unparseable.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ExtractedFigures {
    pub supply_cards: i64,
    pub supply_amount: f64,
    pub supply_total: f64,
    pub exchange_cards: i64,
    pub exchange_amount: f64,
}

impl ExtractedFigures {
    fn set(&mut self, field: Field, token: &str) {
        match field {
            Field::SupplyCards => self.supply_cards = parse_count(token),
            Field::SupplyAmount => self.supply_amount = parse_amount(token),
            Field::SupplyTotal => self.supply_total = parse_amount(token),
            Field::ExchangeCards => self.exchange_cards = parse_count(token),
            Field::ExchangeAmount => self.exchange_amount = parse_amount(token),
        }
    }
}

/// Parse a count token. Decimal-looking tokens keep their integer prefix
/// ("500.50" → 500); anything else falls back to 0.
pub fn parse_count(token: &str) -> i64 {
    let prefix = token
        .split(['.', ','])
        .next()
        .unwrap_or_default();
    prefix.parse::<i64>().unwrap_or(0)
}

/// Parse an amount token. The separator is a decimal separator whichever
/// glyph it is, so ',' is normalized to '.' first; 0 on failure.
pub fn parse_amount(token: &str) -> f64 {
    token.replace(',', ".").parse::<f64>().unwrap_or(0.0)
}

/// All numeric tokens in order of appearance.
pub fn scan_tokens(text: &str) -> Vec<&str> {
    token_re().find_iter(text).map(|m| m.as_str()).collect()
}

/// Assign the first five tokens positionally per `order`. Fewer than five
/// tokens means the heuristic has nothing trustworthy to say: all fields
/// stay 0 and the operator fills the form manually. Tokens beyond the
/// fifth are ignored.
pub fn extract_figures(text: &str, order: &[Field; 5]) -> ExtractedFigures {
    let tokens = scan_tokens(text);

    let mut figures = ExtractedFigures::default();

    if tokens.len() >= 5 {
        for (field, token) in order.iter().zip(tokens.iter()) {
            figures.set(*field, token);
        }
    }

    figures
}
