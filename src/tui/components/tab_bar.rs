//! Tab bar listing open pages.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::tui::app::App;

/// Renders one label per open page, highlighting the active one.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let active = Style::default()
        .fg(Color::Black)
        .bg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let inactive = Style::default().fg(Color::White);

    let spans: Vec<Span> = app
        .pages
        .iter()
        .enumerate()
        .flat_map(|(i, page)| {
            let style = if i == app.active_page { active } else { inactive };
            [
                Span::styled(format!(" {} ", page.title()), style),
                Span::raw(" "),
            ]
        })
        .collect();

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
