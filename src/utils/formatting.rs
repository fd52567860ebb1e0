//! Formatting utilities used for CLI and export outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

pub fn pad_left(s: &str, width: usize) -> String {
    format!("{:>width$}", s, width = width)
}

/// Render a currency-like amount with two decimals ("6000.00").
/// Counts stay plain integers, so only f64 goes through here.
pub fn amount2readable(amount: f64) -> String {
    format!("{:.2}", amount)
}
