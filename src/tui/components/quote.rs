//! Display-ready quote values shared by the overview and chart pages.

use ratatui::style::Color;
use rust_decimal::Decimal;

use crate::format::{
    PLACEHOLDER, format_percent, format_price, format_volume_abbrev, or_placeholder,
};
use crate::models::Series;
use crate::stats::{compute_change, compute_range_summary};

/// Direction of the last move, used for coloring.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Flat,
}

impl Direction {
    pub fn color(self) -> Color {
        match self {
            Direction::Up => Color::Green,
            Direction::Down => Color::Red,
            Direction::Flat => Color::DarkGray,
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            Direction::Up => "▲",
            Direction::Down => "▼",
            Direction::Flat => "■",
        }
    }
}

/// Formatted last price, change and trailing range for one symbol.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuoteCells {
    pub last: String,
    pub change: String,
    pub percent: String,
    pub high: String,
    pub low: String,
    pub volume: String,
    pub direction: Direction,
}

impl QuoteCells {
    /// All cells set to the placeholder.
    pub fn empty() -> Self {
        Self {
            last: PLACEHOLDER.to_string(),
            change: PLACEHOLDER.to_string(),
            percent: PLACEHOLDER.to_string(),
            high: PLACEHOLDER.to_string(),
            low: PLACEHOLDER.to_string(),
            volume: PLACEHOLDER.to_string(),
            direction: Direction::Flat,
        }
    }

    /// Derives every cell from `series`; failed calculations show the placeholder.
    pub fn from_series(series: Option<&Series>, window: usize) -> Self {
        let Some(series) = series else {
            return Self::empty();
        };

        let change = compute_change(series);
        let direction = match &change {
            Ok(c) if c.is_positive => Direction::Up,
            Ok(c) if c.absolute_change < Decimal::ZERO => Direction::Down,
            _ => Direction::Flat,
        };
        let range = compute_range_summary(series, Some(window));

        Self {
            last: or_placeholder(
                series.last().map(|bar| bar.close).ok_or("empty series"),
                format_price,
            ),
            change: or_placeholder(change.as_ref(), |c| {
                signed_price(c.absolute_change, c.is_positive)
            }),
            percent: or_placeholder(change.as_ref(), |c| format_percent(c.percent_change)),
            high: or_placeholder(range.as_ref(), |r| format_price(r.high)),
            low: or_placeholder(range.as_ref(), |r| format_price(r.low)),
            volume: or_placeholder(range.as_ref(), |r| format_volume_abbrev(r.volume)),
            direction,
        }
    }
}

/// Absolute change with an explicit `+` on gains.
fn signed_price(value: Decimal, is_positive: bool) -> String {
    if is_positive {
        format!("+{}", format_price(value))
    } else {
        format_price(value)
    }
}
