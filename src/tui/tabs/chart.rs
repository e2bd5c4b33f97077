//! Chart page: ASCII candlesticks plus a range summary panel.

use chrono::DateTime;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use rust_decimal::Decimal;

use crate::format::{PLACEHOLDER, format_price, format_volume_abbrev};
use crate::models::{Bar, Series};
use crate::stats::compute_range_summary;
use crate::tui::app::{App, ChartType};
use crate::tui::components::quote::QuoteCells;
use crate::tui::components::{status_bar, tab_bar};

/// Width of the price axis column, including the separator.
const AXIS_WIDTH: u16 = 12;

/// Renders the chart page for `symbol`.
pub fn render(frame: &mut Frame, app: &App, symbol: &str) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Tab bar
            Constraint::Length(1), // Status bar
            Constraint::Length(1), // Quote header
            Constraint::Min(8),    // Chart + summary
            Constraint::Length(1), // Keybindings help
        ])
        .split(frame.area());

    tab_bar::render(frame, layout[0], app);
    status_bar::render(frame, layout[1], app);

    let series = app.series.get(symbol);
    render_quote_header(frame, layout[2], app, symbol, series);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(72), Constraint::Percentage(28)])
        .split(layout[3]);

    render_chart(frame, body[0], app, series);
    render_summary(frame, body[1], app, series);
    render_keybindings(frame, layout[4]);
}

fn render_quote_header(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    symbol: &str,
    series: Option<&Series>,
) {
    let cells = QuoteCells::from_series(series, app.range_window);
    let trend = Style::default().fg(cells.direction.color());

    let line = Line::from(vec![
        Span::styled(
            format!(" {symbol} "),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(cells.direction.arrow(), trend),
        Span::styled(
            format!(" {} ", cells.last),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("{} ", cells.change), trend),
        Span::styled(format!("({})", cells.percent), trend),
    ]);

    let para = Paragraph::new(line).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(para, area);
}

fn render_chart(frame: &mut Frame, area: Rect, app: &App, series: Option<&Series>) {
    let title = format!(
        " Chart [{}] {}m ",
        app.chart_type.label(),
        app.interval_minutes()
    );
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let bars = series.map(Series::bars).unwrap_or_default();
    if bars.is_empty() {
        let para = Paragraph::new("No bar data").style(Style::default().fg(Color::DarkGray));
        frame.render_widget(para, inner);
        return;
    }

    let columns = inner.width.saturating_sub(AXIS_WIDTH) as usize;
    let rows = inner.height.saturating_sub(1) as usize;
    let visible = &bars[bars.len().saturating_sub(columns)..];

    let mut lines = chart_lines(visible, rows, app.chart_type);
    lines.push(time_axis(visible, columns));
    frame.render_widget(Paragraph::new(lines), inner);
}

/// Builds one line per price row, highest price first.
///
/// Each row covers the price band `(bottom, top]`, closed at the bottom on
/// the last row. A bar paints its body where the band overlaps open..close
/// and a wick where it only overlaps low..high.
fn chart_lines(bars: &[Bar], rows: usize, chart_type: ChartType) -> Vec<Line<'static>> {
    let (Some(min_price), Some(max_price)) = (
        bars.iter().map(|b| b.low).min(),
        bars.iter().map(|b| b.high).max(),
    ) else {
        return Vec::new();
    };

    let range = max_price - min_price;
    if rows == 0 || range <= Decimal::ZERO {
        return vec![Line::from(Span::styled(
            "Flat series",
            Style::default().fg(Color::DarkGray),
        ))];
    }

    let step = range / Decimal::from(rows);
    (0..rows)
        .map(|row| {
            let band_top = max_price - step * Decimal::from(row);
            let band_bottom = band_top - step;
            let is_bottom_row = row + 1 == rows;

            let mut spans = vec![Span::raw(format!("{:>10} │", format_price(band_top)))];
            spans.extend(bars.iter().map(|bar| {
                let color = if bar.is_bullish() {
                    Color::Green
                } else {
                    Color::Red
                };
                let overlaps = |lo: Decimal, hi: Decimal| {
                    lo <= band_top && (hi > band_bottom || (is_bottom_row && hi >= band_bottom))
                };

                let glyph = match chart_type {
                    ChartType::Candle if overlaps(bar.body_bottom(), bar.body_top()) => "█",
                    ChartType::Candle if overlaps(bar.low, bar.high) => "│",
                    ChartType::Line if overlaps(bar.close, bar.close) => "•",
                    _ => " ",
                };
                Span::styled(glyph, Style::default().fg(color))
            }));
            Line::from(spans)
        })
        .collect()
}

/// Labels the first and last visible bar times under the chart.
fn time_axis(bars: &[Bar], columns: usize) -> Line<'static> {
    let label = |bar: Option<&Bar>| {
        bar.and_then(|b| DateTime::from_timestamp_millis(b.timestamp))
            .map(|t| t.format("%H:%M").to_string())
            .unwrap_or_default()
    };
    let first = label(bars.first());
    let last = label(bars.last());
    let gap = columns.saturating_sub(first.len() + last.len());

    Line::from(Span::styled(
        format!(
            "{:>axis$}{first}{:gap$}{last}",
            "",
            "",
            axis = AXIS_WIDTH as usize
        ),
        Style::default().fg(Color::DarkGray),
    ))
}

fn render_summary(frame: &mut Frame, area: Rect, app: &App, series: Option<&Series>) {
    let block = Block::default()
        .title(format!(" Range ({} bars) ", app.range_window))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let summary = series.map(|s| compute_range_summary(s, Some(app.range_window)));
    let label = Style::default().fg(Color::DarkGray);

    let lines: Vec<Line> = match summary {
        Some(Ok(r)) => [
            ("Open", format_price(r.open)),
            ("High", format_price(r.high)),
            ("Low", format_price(r.low)),
            ("Close", format_price(r.close)),
            ("Volume", format_volume_abbrev(r.volume)),
            ("Bars", r.bars.to_string()),
        ]
        .into_iter()
        .map(|(name, value)| {
            Line::from(vec![
                Span::styled(format!("{name:<8}"), label),
                Span::raw(format!("{value:>12}")),
            ])
        })
        .collect(),
        Some(Err(err)) => {
            tracing::debug!(%err, "range summary unavailable");
            vec![Line::from(Span::styled(PLACEHOLDER, label))]
        }
        None => vec![Line::from(Span::styled(PLACEHOLDER, label))],
    };

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_keybindings(frame: &mut Frame, area: Rect) {
    let help = "[Esc]back [x]close [g]chart type [r]egenerate [Tab]switch page [q]uit";
    let para = Paragraph::new(help).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(para, area);
}
