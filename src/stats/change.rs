//! Change between the two most recent bars.

use rust_decimal::Decimal;

use crate::models::{ChangeResult, Series};
use crate::{Result, TickforgeError};

/// Bars needed to compute a change.
const MIN_BARS: usize = 2;

/// Compares the last close against the previous close.
///
/// # Errors
///
/// Returns [`TickforgeError::InsufficientData`] with fewer than two bars, and
/// [`TickforgeError::InvalidInput`] if the previous close is zero.
pub fn compute_change(series: &Series) -> Result<ChangeResult> {
    let [.., previous, last] = series.bars() else {
        return Err(TickforgeError::InsufficientData {
            required: MIN_BARS,
            available: series.len(),
        });
    };

    let absolute_change = last.close - previous.close;
    let percent_change = absolute_change
        .checked_div(previous.close)
        .map(|ratio| ratio * Decimal::ONE_HUNDRED)
        .ok_or_else(|| {
            TickforgeError::invalid(format!(
                "previous close for {} is zero",
                series.symbol()
            ))
        })?;

    Ok(ChangeResult {
        absolute_change,
        percent_change,
        is_positive: absolute_change > Decimal::ZERO,
    })
}
