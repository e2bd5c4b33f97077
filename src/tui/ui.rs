//! Main UI rendering coordinator.

use ratatui::Frame;

use super::app::{App, Page};
use super::tabs::{chart, overview};

/// Renders the active page.
pub fn render(frame: &mut Frame, app: &App) {
    match app.current_page() {
        Page::Overview => overview::render(frame, app),
        Page::Chart(symbol) => chart::render(frame, app, symbol),
    }
}
