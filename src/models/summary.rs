//! Derived, on-demand summaries of a [`Series`](super::Series).

use rust_decimal::Decimal;
use serde::Serialize;

/// OHLCV aggregate over the trailing window of a series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RangeSummary {
    /// Open of the first bar in the window.
    pub open: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    /// Close of the last bar in the series.
    pub close: Decimal,
    /// Summed volume across the window.
    pub volume: u64,
    /// Number of bars actually aggregated after clamping to the series length.
    pub bars: usize,
}

/// Change between the two most recent closes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangeResult {
    pub absolute_change: Decimal,
    /// Change as a percentage of the previous close, unrounded.
    pub percent_change: Decimal,
    /// Strictly positive change; a flat move is not positive.
    pub is_positive: bool,
}
