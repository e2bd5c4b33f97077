//! Application state for the TUI.

use std::collections::HashMap;
use std::time::Instant;

use chrono::{DateTime, Local};
use tracing::{debug, warn};

use crate::config::MarketConfig;
use crate::generator::SeriesGenerator;
use crate::models::Series;
use crate::random::RandomSource;

/// How long an error stays in the status bar.
const ERROR_DISPLAY_SECS: u64 = 5;

/// Central application state container.
pub struct App {
    // -- Page State --
    /// Open pages, shown as tabs. The overview is always first.
    pub pages: Vec<Page>,
    /// Index of the currently active page.
    pub active_page: usize,

    // -- Market Data --
    /// Watchlist symbols in display order.
    pub symbols: Vec<String>,
    /// Cursor position in the watchlist.
    pub selected: usize,
    /// Latest generated series per symbol.
    pub series: HashMap<String, Series>,
    /// Bars generated per symbol.
    pub bar_count: usize,
    /// Trailing window for range statistics.
    pub range_window: usize,
    /// Seed behind the random source, if fixed.
    pub seed: Option<u64>,
    /// When the series were last regenerated.
    pub last_refresh: Option<DateTime<Local>>,

    // -- UI State --
    /// Chart type (candle or line).
    pub chart_type: ChartType,
    /// Error message to display (clears after timeout).
    pub error_message: Option<ErrorDisplay>,

    // -- Internal --
    /// Flag to signal application should quit.
    pub should_quit: bool,
    generator: SeriesGenerator,
    rng: Box<dyn RandomSource>,
}

impl App {
    /// Creates the app and generates an initial series for every symbol.
    pub fn new(config: &MarketConfig, rng: Box<dyn RandomSource>) -> Self {
        let mut app = Self {
            pages: vec![Page::Overview],
            active_page: 0,
            symbols: config.symbols.clone(),
            selected: 0,
            series: HashMap::new(),
            bar_count: config.bar_count,
            range_window: config.range_window,
            seed: config.seed,
            last_refresh: None,
            chart_type: ChartType::Candle,
            error_message: None,
            should_quit: false,
            generator: SeriesGenerator::new(config.bar_interval_minutes),
            rng,
        };
        app.refresh();
        app
    }

    /// Minutes between bars of the generated series.
    pub fn interval_minutes(&self) -> u32 {
        self.generator.interval_minutes()
    }

    /// Regenerates the series for every watchlist symbol.
    pub fn refresh(&mut self) {
        for symbol in &self.symbols {
            match self
                .generator
                .generate(symbol, self.bar_count, self.rng.as_mut())
            {
                Ok(series) => {
                    self.series.insert(symbol.clone(), series);
                }
                Err(err) => {
                    warn!(%symbol, %err, "series generation failed");
                    self.error_message = Some(ErrorDisplay::new(format!("{symbol}: {err}")));
                }
            }
        }
        self.last_refresh = Some(Local::now());
        debug!(symbols = self.symbols.len(), "refreshed series");
    }

    /// Returns the currently active page.
    pub fn current_page(&self) -> &Page {
        &self.pages[self.active_page]
    }

    /// Activates `page`, opening it as a new tab if it is not open yet.
    pub fn open_page(&mut self, page: Page) {
        if let Some(pos) = self.pages.iter().position(|p| *p == page) {
            self.active_page = pos;
        } else {
            self.pages.push(page);
            self.active_page = self.pages.len() - 1;
        }
    }

    /// Closes the active page. The overview cannot be closed.
    pub fn close_active_page(&mut self) {
        if self.active_page == 0 {
            return;
        }
        self.pages.remove(self.active_page);
        if self.active_page >= self.pages.len() {
            self.active_page = self.pages.len() - 1;
        }
    }

    /// Switches to the next page.
    pub fn next_page(&mut self) {
        self.active_page = (self.active_page + 1) % self.pages.len();
    }

    /// Switches to the previous page.
    pub fn previous_page(&mut self) {
        self.active_page = self
            .active_page
            .checked_sub(1)
            .unwrap_or(self.pages.len() - 1);
    }

    /// Moves the watchlist cursor down, wrapping at the end.
    pub fn select_next(&mut self) {
        if !self.symbols.is_empty() {
            self.selected = (self.selected + 1) % self.symbols.len();
        }
    }

    /// Moves the watchlist cursor up, wrapping at the start.
    pub fn select_previous(&mut self) {
        if !self.symbols.is_empty() {
            self.selected = self
                .selected
                .checked_sub(1)
                .unwrap_or(self.symbols.len() - 1);
        }
    }

    /// Symbol under the watchlist cursor.
    pub fn selected_symbol(&self) -> Option<&str> {
        self.symbols.get(self.selected).map(String::as_str)
    }

    /// Sets an error message to display.
    pub fn show_error(&mut self, message: impl Into<String>) {
        self.error_message = Some(ErrorDisplay::new(message));
    }

    /// Clears error messages older than five seconds.
    pub fn clear_stale_errors(&mut self) {
        if let Some(ref error) = self.error_message
            && error.timestamp.elapsed() > std::time::Duration::from_secs(ERROR_DISPLAY_SECS)
        {
            self.error_message = None;
        }
    }
}

/// Dashboard pages.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Page {
    /// Watchlist with last price, change and range per symbol.
    Overview,
    /// Candlestick chart and range summary for one symbol.
    Chart(String),
}

impl Page {
    /// Returns the display title for the page's tab.
    pub fn title(&self) -> &str {
        match self {
            Page::Overview => "Overview",
            Page::Chart(symbol) => symbol,
        }
    }
}

/// Chart display type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ChartType {
    #[default]
    Candle,
    Line,
}

impl ChartType {
    /// Toggles between chart types.
    pub fn toggle(&mut self) {
        *self = match self {
            ChartType::Candle => ChartType::Line,
            ChartType::Line => ChartType::Candle,
        };
    }

    pub fn label(&self) -> &'static str {
        match self {
            ChartType::Candle => "Candle",
            ChartType::Line => "Line",
        }
    }
}

/// Error message with timestamp for auto-clear.
#[derive(Clone, Debug)]
pub struct ErrorDisplay {
    /// The error message.
    pub message: String,
    /// When the error was shown.
    pub timestamp: Instant,
}

impl ErrorDisplay {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            timestamp: Instant::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::SequenceRandom;

    fn test_app() -> App {
        let config = MarketConfig {
            bar_count: 10,
            symbols: vec!["BTC/USD".into(), "TSLA".into(), "AAPL".into()],
            ..MarketConfig::default()
        };
        App::new(&config, Box::new(SequenceRandom::constant(0.5)))
    }

    #[test]
    fn new_generates_every_symbol() {
        let app = test_app();
        assert_eq!(app.series.len(), 3);
        assert_eq!(app.series["TSLA"].len(), 10);
        assert!(app.last_refresh.is_some());
        assert_eq!(app.current_page(), &Page::Overview);
    }

    #[test]
    fn open_page_reuses_existing_tab() {
        let mut app = test_app();
        app.open_page(Page::Chart("TSLA".into()));
        app.open_page(Page::Chart("AAPL".into()));
        app.open_page(Page::Chart("TSLA".into()));
        assert_eq!(app.pages.len(), 3);
        assert_eq!(app.active_page, 1);
    }

    #[test]
    fn overview_cannot_be_closed() {
        let mut app = test_app();
        app.close_active_page();
        assert_eq!(app.pages, vec![Page::Overview]);

        app.open_page(Page::Chart("TSLA".into()));
        app.close_active_page();
        assert_eq!(app.pages, vec![Page::Overview]);
        assert_eq!(app.active_page, 0);
    }

    #[test]
    fn page_cycling_wraps() {
        let mut app = test_app();
        app.open_page(Page::Chart("TSLA".into()));
        app.next_page();
        assert_eq!(app.active_page, 0);
        app.previous_page();
        assert_eq!(app.active_page, 1);
    }

    #[test]
    fn selection_wraps_both_ways() {
        let mut app = test_app();
        app.select_previous();
        assert_eq!(app.selected_symbol(), Some("AAPL"));
        app.select_next();
        assert_eq!(app.selected_symbol(), Some("BTC/USD"));
    }

    #[test]
    fn zero_bar_count_reports_error() {
        let config = MarketConfig {
            bar_count: 0,
            symbols: vec!["TSLA".into()],
            ..MarketConfig::default()
        };
        let app = App::new(&config, Box::new(SequenceRandom::constant(0.5)));
        assert!(app.series.is_empty());
        assert!(app.error_message.is_some());
    }
}
