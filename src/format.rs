//! Fixed-precision display strings for prices, percentages and volume.
//!
//! Output is locale-free: `.` as the decimal point, no grouping separators.
//! All rounding is midpoint-away-from-zero on the exact decimal value, so
//! `-1.285` renders as `-1.29%`.

use std::fmt::Display;

use rust_decimal::{Decimal, RoundingStrategy};
use tracing::debug;

/// Shown in place of a value whose calculation failed.
pub const PLACEHOLDER: &str = "—";

const MILLION: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);

/// Formats a price with exactly two decimal places.
pub fn format_price(value: Decimal) -> String {
    fixed(value, 2).to_string()
}

/// Formats a percentage with two decimals, a `+` sign when non-negative, and `%`.
pub fn format_percent(value: Decimal) -> String {
    let rounded = fixed(value, 2);
    if rounded.is_sign_negative() {
        format!("{rounded}%")
    } else {
        format!("+{rounded}%")
    }
}

/// Formats a volume in millions with one or two decimals, e.g. `1.23M`.
pub fn format_volume_abbrev(volume: u64) -> String {
    let millions = (Decimal::from(volume) / MILLION)
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    let mut shown = millions;
    if shown.scale() < 1 {
        shown.rescale(1);
    }
    format!("{shown}M")
}

/// Formats a successful result, or logs the error and returns [`PLACEHOLDER`].
pub fn or_placeholder<T, E, F>(result: Result<T, E>, format: F) -> String
where
    E: Display,
    F: FnOnce(T) -> String,
{
    match result {
        Ok(value) => format(value),
        Err(err) => {
            debug!(%err, "substituting placeholder for failed calculation");
            PLACEHOLDER.to_string()
        }
    }
}

/// Rounds to `dp` places and pins the scale so trailing zeros print.
/// Negative zero collapses to zero.
fn fixed(value: Decimal, dp: u32) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_zero() {
        rounded = Decimal::ZERO;
    }
    rounded.rescale(dp);
    rounded
}
