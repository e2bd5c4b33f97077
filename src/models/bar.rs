//! OHLCV bar and series models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{Result, TickforgeError};

/// A single OHLCV candlestick bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bar {
    /// Bar open time in milliseconds since the Unix epoch.
    pub timestamp: i64,
    pub open: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub close: Decimal,
    pub volume: u64,
}

impl Bar {
    /// Returns true when the bar closed at or above its open.
    pub fn is_bullish(&self) -> bool {
        self.close >= self.open
    }

    /// Upper edge of the candle body.
    pub fn body_top(&self) -> Decimal {
        self.open.max(self.close)
    }

    /// Lower edge of the candle body.
    pub fn body_bottom(&self) -> Decimal {
        self.open.min(self.close)
    }

    /// Checks `low <= min(open, close) <= max(open, close) <= high`.
    pub fn is_consistent(&self) -> bool {
        self.low <= self.body_bottom() && self.high >= self.body_top() && self.high >= self.low
    }
}

/// An ordered, immutable run of bars for one symbol. Index 0 is the oldest.
///
/// Deserialization goes through [`Series::from_bars`], so decoded input is
/// held to the same invariants as hand-built bars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSeries")]
pub struct Series {
    symbol: String,
    interval_minutes: u32,
    bars: Vec<Bar>,
}

/// Wire shape of [`Series`] before validation.
#[derive(Deserialize)]
struct RawSeries {
    symbol: String,
    interval_minutes: u32,
    bars: Vec<Bar>,
}

impl TryFrom<RawSeries> for Series {
    type Error = TickforgeError;

    fn try_from(raw: RawSeries) -> Result<Self> {
        Series::from_bars(raw.symbol, raw.interval_minutes, raw.bars)
    }
}

impl Series {
    /// Wraps bars produced by the generator, which upholds the invariants.
    pub(crate) fn new_unchecked(symbol: String, interval_minutes: u32, bars: Vec<Bar>) -> Self {
        Self {
            symbol,
            interval_minutes,
            bars,
        }
    }

    /// Builds a series from caller-supplied bars.
    ///
    /// An empty bar list is accepted.
    ///
    /// # Errors
    ///
    /// Returns [`TickforgeError::InvalidInput`] if any bar violates the OHLC
    /// ordering or if timestamps are not strictly increasing.
    pub fn from_bars(
        symbol: impl Into<String>,
        interval_minutes: u32,
        bars: Vec<Bar>,
    ) -> Result<Self> {
        if let Some(index) = bars.iter().position(|bar| !bar.is_consistent()) {
            return Err(TickforgeError::invalid(format!(
                "bar {index} violates low <= open/close <= high"
            )));
        }
        if let Some(index) = bars
            .windows(2)
            .position(|pair| pair[0].timestamp >= pair[1].timestamp)
        {
            return Err(TickforgeError::invalid(format!(
                "bar {} timestamp is not after bar {index}",
                index + 1
            )));
        }
        Ok(Self::new_unchecked(symbol.into(), interval_minutes, bars))
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Minutes between consecutive bars.
    pub fn interval_minutes(&self) -> u32 {
        self.interval_minutes
    }

    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// The most recent bar, if any.
    pub fn last(&self) -> Option<&Bar> {
        self.bars.last()
    }
}
