use serde::Serialize;

/// Aggregated figures for a single day, consumed by the `report` command.
///
/// `total_amount` sums `supply_total + exchange_amount` over the day's
/// records. A day with no records yields the zeroed default, never an error.
#[derive(Debug, Default, PartialEq, Serialize)]
pub struct DayStats {
    pub operations: i64,
    pub supply_cards: i64,
    pub exchange_cards: i64,
    pub total_amount: f64,
}
