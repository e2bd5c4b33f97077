//! Application configuration loaded from environment variables.
//!
//! Every setting is optional and falls back to a default:
//! - `TICKFORGE_BAR_INTERVAL_MINUTES`: minutes between bars (default 5)
//! - `TICKFORGE_BAR_COUNT`: bars generated per symbol (default 60)
//! - `TICKFORGE_RANGE_WINDOW`: trailing window for range stats (default 24)
//! - `TICKFORGE_SEED`: fixes the random source for reproducible output
//! - `TICKFORGE_SYMBOLS`: comma-separated watchlist
//! - `TICKFORGE_REFRESH_SECS`: dashboard regeneration period (off by default)

use std::str::FromStr;

use crate::TickforgeError;

/// Default minutes between consecutive bars.
pub const DEFAULT_BAR_INTERVAL_MINUTES: u32 = 5;

/// Default number of bars generated per symbol.
pub const DEFAULT_BAR_COUNT: usize = 60;

/// Default watchlist.
const DEFAULT_SYMBOLS: &[&str] = &["BTC/USD", "ETH/USD", "TSLA", "AAPL"];

/// Top-level application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub market: MarketConfig,
}

/// Settings for synthetic series generation and summaries.
#[derive(Debug, Clone)]
pub struct MarketConfig {
    pub bar_interval_minutes: u32,
    pub bar_count: usize,
    pub range_window: usize,
    pub seed: Option<u64>,
    pub symbols: Vec<String>,
    pub refresh_secs: Option<u64>,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            bar_interval_minutes: DEFAULT_BAR_INTERVAL_MINUTES,
            bar_count: DEFAULT_BAR_COUNT,
            range_window: crate::stats::DEFAULT_RANGE_WINDOW,
            seed: None,
            symbols: DEFAULT_SYMBOLS.iter().map(|s| s.to_string()).collect(),
            refresh_secs: None,
        }
    }
}

/// Loads the application configuration from environment variables.
///
/// # Errors
///
/// Returns [`TickforgeError::Config`] if a variable is set to a value that
/// does not parse, a count is zero, or the symbol list is empty.
pub fn fetch_config() -> crate::Result<AppConfig> {
    let defaults = MarketConfig::default();

    let bar_interval_minutes = positive_var(
        "TICKFORGE_BAR_INTERVAL_MINUTES",
        defaults.bar_interval_minutes,
    )?;
    let bar_count = positive_var("TICKFORGE_BAR_COUNT", defaults.bar_count)?;
    let range_window = positive_var("TICKFORGE_RANGE_WINDOW", defaults.range_window)?;
    let seed = parsed_var::<u64>("TICKFORGE_SEED")?;
    let refresh_secs = match parsed_var::<u64>("TICKFORGE_REFRESH_SECS")? {
        Some(0) => {
            return Err(TickforgeError::Config(
                "TICKFORGE_REFRESH_SECS must be greater than zero".to_string(),
            ));
        }
        other => other,
    };

    let symbols = match non_empty_var("TICKFORGE_SYMBOLS") {
        Some(raw) => {
            let symbols: Vec<String> = raw
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect();
            if symbols.is_empty() {
                return Err(TickforgeError::Config(
                    "TICKFORGE_SYMBOLS contains no symbols".to_string(),
                ));
            }
            symbols
        }
        None => defaults.symbols,
    };

    Ok(AppConfig {
        market: MarketConfig {
            bar_interval_minutes,
            bar_count,
            range_window,
            seed,
            symbols,
            refresh_secs,
        },
    })
}

/// Parses an optional variable, rejecting zero.
fn positive_var<T>(name: &str, default: T) -> crate::Result<T>
where
    T: FromStr + PartialEq + Default,
{
    match parsed_var::<T>(name)? {
        Some(value) if value == T::default() => Err(TickforgeError::Config(format!(
            "{name} must be greater than zero"
        ))),
        Some(value) => Ok(value),
        None => Ok(default),
    }
}

/// Parses an optional variable into `T`.
fn parsed_var<T: FromStr>(name: &str) -> crate::Result<Option<T>> {
    match non_empty_var(name) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| TickforgeError::Config(format!("{name} has invalid value {raw:?}"))),
        None => Ok(None),
    }
}

/// Returns the value of an environment variable if it exists and is non-empty.
fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}
