//! Terminal dashboard over the synthetic market data.
//!
//! Provides a Ratatui watchlist overview and per-symbol chart pages. The
//! dashboard only consumes the generator, stats and formatting modules.

pub mod app;
pub mod components;
pub mod event;
pub mod tabs;
pub mod terminal;
pub mod ui;

use tokio::sync::mpsc;
use tracing::info;

pub use app::{App, Page};
pub use event::{Event, Message};
pub use terminal::{Tui, is_interactive, restore_terminal, setup_terminal};
pub use ui::render;

use crate::Result;

/// UI tick period driving error expiry.
const TICK_RATE_MS: u64 = 250;

/// Runs the dashboard until the user quits.
///
/// Terminal input and timers feed one channel; each message updates `app`
/// and triggers a redraw. Page changes requested by key handlers through
/// the navigate callback are applied after the handler returns.
///
/// # Errors
///
/// Returns [`TickforgeError::Io`](crate::TickforgeError::Io) if drawing fails.
pub async fn run(terminal: &mut Tui, app: &mut App, refresh_secs: Option<u64>) -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel();
    event::spawn_event_reader(tx.clone());
    event::spawn_tick_timer(tx.clone(), TICK_RATE_MS);
    if let Some(secs) = refresh_secs {
        event::spawn_refresh_timer(tx, secs);
    }

    info!(symbols = app.symbols.len(), "dashboard started");

    let mut requested: Vec<Page> = Vec::new();
    while !app.should_quit {
        terminal
            .draw(|frame| render(frame, app))
            .map_err(terminal::io_error("draw frame"))?;

        let Some(message) = rx.recv().await else {
            break;
        };
        event::update(app, message, &mut |page: Page| requested.push(page));
        for page in requested.drain(..) {
            app.open_page(page);
        }
    }

    Ok(())
}
