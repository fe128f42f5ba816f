// Formatting utilities shared by the stats, chart and table views

use {
    chrono::{DateTime, Local},
    rust_decimal::{Decimal, RoundingStrategy},
};

/// Lamports per whole SOL
pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

/// Placeholder for missing values
pub const NOT_AVAILABLE: &str = "N/A";

/// Convert lamports to whole SOL
pub fn lamports_to_sol(lamports: u64) -> f64 {
    lamports as f64 / LAMPORTS_PER_SOL as f64
}

/// Fixed-point rendering with half-up rounding on exact ties
///
/// 0.03125 renders as "0.0313" at 4 decimals, not the round-half-even
/// "0.0312" of `{:.4}`. The sign is rendered separately from the rounded
/// magnitude, so small negatives keep their "-".
pub fn to_fixed(value: f64, decimals: u32) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let magnitude = value.abs();
    match Decimal::from_f64_retain(magnitude) {
        Some(d) => {
            let rounded = d.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
            format!("{}{:.*}", sign, decimals as usize, rounded)
        }
        // NaN, infinities and magnitudes beyond Decimal's range
        None => format!("{}{:.*}", sign, decimals as usize, magnitude),
    }
}

/// Signed amount with 4 decimals: "+1.2500", "-0.0100", "N/A"
///
/// Zero counts as non-negative and gets a "+".
pub fn format_amount(amount: Option<f64>) -> String {
    match amount {
        None => NOT_AVAILABLE.to_string(),
        Some(value) => {
            let sign = if value >= 0.0 { '+' } else { '-' };
            format!("{}{}", sign, to_fixed(value.abs(), 4))
        }
    }
}

/// Fee in lamports rendered as SOL with 6 decimals
pub fn format_fee(fee: Option<u64>) -> String {
    match fee {
        None => NOT_AVAILABLE.to_string(),
        Some(lamports) => to_fixed(lamports_to_sol(lamports), 6),
    }
}

/// `format_amount` with a " SOL" suffix when present
pub fn format_sol_amount(amount: Option<f64>) -> String {
    with_unit(format_amount(amount))
}

/// `format_fee` with a " SOL" suffix when present
pub fn format_fee_sol(fee: Option<u64>) -> String {
    with_unit(format_fee(fee))
}

/// Unsigned SOL total with 4 decimals
pub fn format_sol(amount: f64) -> String {
    format!("{} SOL", to_fixed(amount, 4))
}

fn with_unit(value: String) -> String {
    if value == NOT_AVAILABLE {
        value
    } else {
        format!("{} SOL", value)
    }
}

/// Shorten a signature or address to `prefix...suffix`
///
/// Identifiers with fewer than `2 * keep` characters come back unchanged so
/// that prefix and suffix never overlap.
pub fn shorten_identifier(id: &str, keep: usize) -> String {
    let chars: Vec<char> = id.chars().collect();
    if keep == 0 || chars.len() < keep * 2 {
        return id.to_string();
    }

    let head: String = chars[..keep].iter().collect();
    let tail: String = chars[chars.len() - keep..].iter().collect();
    format!("{}...{}", head, tail)
}

/// Local date-time for an epoch timestamp in seconds
///
/// Absent, zero and out-of-range timestamps render as "N/A".
pub fn format_timestamp(timestamp: Option<i64>) -> String {
    match timestamp {
        None | Some(0) => NOT_AVAILABLE.to_string(),
        Some(ts) => match DateTime::from_timestamp(ts, 0) {
            Some(dt) => dt
                .with_timezone(&Local)
                .format("%Y-%m-%d %H:%M:%S")
                .to_string(),
            None => NOT_AVAILABLE.to_string(),
        },
    }
}
