//! Synthetic market data for trading dashboards.
//!
//! Generates pseudo-random OHLCV candlestick series, derives trailing-window
//! range statistics and last-bar change from them, and formats the results
//! as fixed-precision display strings. A terminal dashboard in [`tui`]
//! consumes all of it.

pub mod config;
pub mod error;
pub mod format;
pub mod generator;
pub mod models;
pub mod random;
pub mod stats;
pub mod tui;

pub use error::{Result, TickforgeError};
pub use format::{PLACEHOLDER, format_percent, format_price, format_volume_abbrev};
pub use generator::{SeriesGenerator, generate_series};
pub use models::{Bar, ChangeResult, RangeSummary, Series};
pub use random::{RandomSource, SeededRandom, SequenceRandom, ThreadRandom};
pub use stats::{compute_change, compute_range_summary};
