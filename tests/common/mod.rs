//! Shared test utilities and constants.

#![allow(dead_code)]

use rust_decimal::Decimal;

use tickforge::generator::SeriesGenerator;
use tickforge::models::{Bar, Series};
use tickforge::random::SeededRandom;

/// Fixed wall-clock anchor so timestamps are deterministic.
pub const NOW_MS: i64 = 1_705_314_600_000;

/// Five minutes in milliseconds.
pub const FIVE_MINUTES_MS: i64 = 300_000;

/// Generates a reproducible 5-minute series.
pub fn seeded_series(symbol: &str, count: usize, seed: u64) -> Series {
    SeriesGenerator::new(5)
        .generate_at(symbol, count, NOW_MS, &mut SeededRandom::new(seed))
        .expect("generation should succeed for a positive count")
}

/// Builds a bar one interval after `index` with the given prices.
pub fn bar(
    index: i64,
    open: Decimal,
    high: Decimal,
    low: Decimal,
    close: Decimal,
    volume: u64,
) -> Bar {
    Bar {
        timestamp: NOW_MS + index * FIVE_MINUTES_MS,
        open,
        high,
        low,
        close,
        volume,
    }
}

/// Wraps hand-built bars in a validated series.
pub fn series_from(bars: Vec<Bar>) -> Series {
    Series::from_bars("TEST", 5, bars).expect("test bars should be consistent")
}
