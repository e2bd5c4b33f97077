//! Trailing-window OHLCV aggregation.

use crate::models::{RangeSummary, Series};
use crate::{Result, TickforgeError};

/// Bars aggregated when the caller does not pass a window.
pub const DEFAULT_RANGE_WINDOW: usize = 24;

/// Aggregates the last `window` bars of `series` (default 24).
///
/// A window at least as long as the series covers every bar, so `open`
/// becomes the first bar's open.
///
/// # Errors
///
/// Returns [`TickforgeError::InvalidInput`] if the series is empty or the
/// window is zero.
pub fn compute_range_summary(series: &Series, window: Option<usize>) -> Result<RangeSummary> {
    let window = window.unwrap_or(DEFAULT_RANGE_WINDOW);
    if window == 0 {
        return Err(TickforgeError::invalid("range window must be at least 1"));
    }

    let bars = series.bars();
    let start = bars.len().saturating_sub(window);
    let slice = &bars[start..];

    let (Some(first), Some(last)) = (slice.first(), slice.last()) else {
        return Err(TickforgeError::invalid(format!(
            "cannot summarize empty series for {}",
            series.symbol()
        )));
    };

    let (high, low, volume) = slice.iter().fold(
        (first.high, first.low, 0u64),
        |(high, low, volume), bar| {
            (
                high.max(bar.high),
                low.min(bar.low),
                volume.saturating_add(bar.volume),
            )
        },
    );

    Ok(RangeSummary {
        open: first.open,
        high,
        low,
        close: last.close,
        volume,
        bars: slice.len(),
    })
}
