//! Status bar component.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::tui::app::App;

/// Renders generation settings, last refresh time and any pending error.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let source = match app.seed {
        Some(seed) => Span::styled(
            format!(" SEED {seed} "),
            Style::default().fg(Color::Black).bg(Color::Yellow),
        ),
        None => Span::styled(" RANDOM ", Style::default().fg(Color::Black).bg(Color::Green)),
    };

    let settings = format!(
        " {}m x {} bars │ window {} ",
        app.interval_minutes(),
        app.bar_count,
        app.range_window
    );

    let refreshed = app
        .last_refresh
        .map(|t| format!(" updated {} ", t.format("%H:%M:%S")))
        .unwrap_or_default();

    let error_span = match app.error_message {
        Some(ref error) => Span::styled(
            format!(" {} ", error.message),
            Style::default().fg(Color::Red),
        ),
        None => Span::raw(""),
    };

    let page_info = format!(" {}/{} ", app.active_page + 1, app.pages.len());

    let line = Line::from(vec![
        source,
        Span::raw(settings),
        Span::raw("│"),
        Span::styled(refreshed, Style::default().fg(Color::Cyan)),
        Span::raw("│"),
        error_span,
        Span::raw(format!(
            "{:>width$}",
            page_info,
            width = area.width.saturating_sub(60) as usize
        )),
    ]);

    let para = Paragraph::new(line).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(para, area);
}
