//! Synthetic OHLCV series generation.
//!
//! Each bar opens near the previous close, nudged by a slow sinusoidal trend
//! and bounded uniform noise scaled to 2% of the running price. The result
//! looks like a plausible intraday chart without any real market input.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::debug;

use crate::config::{AppConfig, DEFAULT_BAR_INTERVAL_MINUTES};
use crate::models::{Bar, Series};
use crate::random::{RandomSource, ThreadRandom, uniform};
use crate::{Result, TickforgeError};

/// Starting price for symbols that match no entry in [`BASE_PRICES`].
pub const DEFAULT_BASE_PRICE: f64 = 178.0;

/// Base price tiers, matched in order against the upper-cased symbol.
const BASE_PRICES: &[(&str, f64)] = &[("BTC", 42_000.0), ("ETH", 2_200.0), ("TSLA", 245.0)];

/// Volatility as a fraction of the running price.
const VOLATILITY_RATIO: f64 = 0.02;

/// Divisor applied to the bar index inside the trend sine.
const TREND_PERIOD: f64 = 10.0;

const VOLUME_MIN: f64 = 500_000.0;
const VOLUME_MAX: f64 = 1_500_000.0;

const MILLIS_PER_MINUTE: i64 = 60_000;

/// Returns the synthetic starting price for a symbol.
///
/// This is a static tier table, not a quote.
pub fn base_price(symbol: &str) -> f64 {
    let upper = symbol.to_ascii_uppercase();
    BASE_PRICES
        .iter()
        .find(|(pattern, _)| upper.contains(pattern))
        .map_or(DEFAULT_BASE_PRICE, |(_, price)| *price)
}

/// Produces fresh [`Series`] values at a fixed bar interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesGenerator {
    interval_minutes: u32,
}

impl Default for SeriesGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_BAR_INTERVAL_MINUTES)
    }
}

impl SeriesGenerator {
    /// Creates a generator whose bars are `interval_minutes` apart.
    ///
    /// A zero interval is bumped to one minute so timestamps stay strictly
    /// increasing.
    #[must_use]
    pub fn new(interval_minutes: u32) -> Self {
        Self {
            interval_minutes: interval_minutes.max(1),
        }
    }

    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.market.bar_interval_minutes)
    }

    pub fn interval_minutes(&self) -> u32 {
        self.interval_minutes
    }

    /// Generates `count` bars ending at the current wall-clock time.
    ///
    /// # Errors
    ///
    /// See [`SeriesGenerator::generate_at`].
    pub fn generate(
        &self,
        symbol: &str,
        count: usize,
        rng: &mut dyn RandomSource,
    ) -> Result<Series> {
        let now_ms = chrono::Utc::now().timestamp_millis();
        self.generate_at(symbol, count, now_ms, rng)
    }

    /// Generates `count` bars whose last bar opens one interval before `now_ms`.
    ///
    /// Draws five values from `rng` per bar, in order: open noise, close
    /// noise, high extension, low extension, volume.
    ///
    /// # Errors
    ///
    /// Returns [`TickforgeError::InvalidInput`] if `count` is zero, a bar
    /// timestamp would overflow `i64`, or a computed price is not finite.
    pub fn generate_at(
        &self,
        symbol: &str,
        count: usize,
        now_ms: i64,
        rng: &mut dyn RandomSource,
    ) -> Result<Series> {
        if count == 0 {
            return Err(TickforgeError::invalid("bar count must be at least 1"));
        }

        let interval_ms = i64::from(self.interval_minutes) * MILLIS_PER_MINUTE;
        // The oldest bar has the largest offset; if it fits, every bar does.
        bar_timestamp(now_ms, count, interval_ms)?;

        let mut base = base_price(symbol);
        debug!(symbol, count, base, "generating synthetic series");

        let mut bars = Vec::with_capacity(count);

        for i in 0..count {
            let volatility = base * VOLATILITY_RATIO;
            let trend = (i as f64 / TREND_PERIOD).sin() * volatility;

            let open = base + trend + uniform(rng, -0.5, 0.5) * volatility;
            let close = open + uniform(rng, -0.5, 0.5) * volatility;
            // High/low extensions only ever widen the body.
            let high = open.max(close) + uniform(rng, 0.0, 0.5) * volatility;
            let low = open.min(close) - uniform(rng, 0.0, 0.5) * volatility;
            let volume = uniform(rng, VOLUME_MIN, VOLUME_MAX) as u64;

            bars.push(Bar {
                timestamp: bar_timestamp(now_ms, count - i, interval_ms)?,
                open: round_price(open)?,
                high: round_price(high)?,
                low: round_price(low)?,
                close: round_price(close)?,
                volume,
            });

            base = close;
        }

        Ok(Series::new_unchecked(
            symbol.to_string(),
            self.interval_minutes,
            bars,
        ))
    }
}

/// Generates `count` bars for `symbol` with the default interval and an
/// unseeded random source.
///
/// # Errors
///
/// Returns [`TickforgeError::InvalidInput`] if `count` is zero.
pub fn generate_series(symbol: &str, count: usize) -> Result<Series> {
    SeriesGenerator::default().generate(symbol, count, &mut ThreadRandom::new())
}

/// Open time of the bar `bars_back` intervals before `now_ms`.
fn bar_timestamp(now_ms: i64, bars_back: usize, interval_ms: i64) -> Result<i64> {
    i64::try_from(bars_back)
        .ok()
        .and_then(|back| back.checked_mul(interval_ms))
        .and_then(|offset| now_ms.checked_sub(offset))
        .ok_or_else(|| {
            TickforgeError::invalid(format!(
                "{bars_back} bars of {interval_ms} ms overflow before {now_ms}"
            ))
        })
}

/// Rounds a raw price to 2 decimal places, midpoint away from zero.
fn round_price(value: f64) -> Result<Decimal> {
    Decimal::from_f64(value)
        .map(|d| d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
        .ok_or_else(|| TickforgeError::invalid(format!("price {value} is not representable")))
}
