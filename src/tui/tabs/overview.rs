//! Market overview page: one watchlist row per symbol.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
};

use crate::tui::app::App;
use crate::tui::components::quote::QuoteCells;
use crate::tui::components::{status_bar, tab_bar};

/// Renders the overview page.
pub fn render(frame: &mut Frame, app: &App) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Tab bar
            Constraint::Length(1), // Status bar
            Constraint::Min(5),    // Watchlist
            Constraint::Length(1), // Keybindings help
        ])
        .split(frame.area());

    tab_bar::render(frame, layout[0], app);
    status_bar::render(frame, layout[1], app);
    render_watchlist(frame, layout[2], app);
    render_keybindings(frame, layout[3]);
}

fn render_watchlist(frame: &mut Frame, area: Rect, app: &App) {
    let header = Row::new(
        [
            "Symbol",
            "Last",
            "Chg",
            "Chg %",
            "High",
            "Low",
            "Volume",
        ]
        .map(|h| Cell::from(h).style(Style::default().fg(Color::DarkGray))),
    );

    let rows: Vec<Row> = app
        .symbols
        .iter()
        .map(|symbol| {
            let cells = QuoteCells::from_series(app.series.get(symbol), app.range_window);
            let trend = Style::default().fg(cells.direction.color());
            Row::new(vec![
                Cell::from(format!("{} {}", cells.direction.arrow(), symbol))
                    .style(trend.add_modifier(Modifier::BOLD)),
                Cell::from(cells.last),
                Cell::from(cells.change).style(trend),
                Cell::from(cells.percent).style(trend),
                Cell::from(cells.high),
                Cell::from(cells.low),
                Cell::from(cells.volume),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(14),
        Constraint::Length(12),
        Constraint::Length(10),
        Constraint::Length(9),
        Constraint::Length(12),
        Constraint::Length(12),
        Constraint::Length(9),
    ];

    let title = format!(" Watchlist ({}-bar range) ", app.range_window);
    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .row_highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("› ");

    let mut state = TableState::default().with_selected(Some(app.selected));
    frame.render_stateful_widget(table, area, &mut state);
}

fn render_keybindings(frame: &mut Frame, area: Rect) {
    let help = "[↑/↓]select [Enter]open chart [r]egenerate [Tab]switch page [q]uit";
    let para = Paragraph::new(help).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(para, area);
}
