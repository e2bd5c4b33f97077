//! Event handling for the TUI.
//!
//! Key handlers never switch pages themselves. They receive a `navigate`
//! callback and ask for the page they want; the event loop applies the
//! requests to [`App`] after the handler returns.

use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;

use super::app::{App, Page};

/// Events that can occur in the application.
#[derive(Debug)]
pub enum Event {
    /// A key was pressed.
    Key(KeyEvent),
    /// Terminal was resized.
    Resize(u16, u16),
    /// Periodic tick for UI updates.
    Tick,
}

/// Messages that update application state.
#[derive(Debug)]
pub enum Message {
    /// Input event from terminal.
    Input(Event),
    /// Regenerate every series.
    Refresh,
    /// Request to quit the application.
    Quit,
}

/// Spawns a task that polls for terminal events and sends them to a channel.
pub fn spawn_event_reader(tx: mpsc::UnboundedSender<Message>) {
    tokio::spawn(async move {
        loop {
            // Poll for events with a 50ms timeout
            match tokio::task::spawn_blocking(|| {
                if event::poll(Duration::from_millis(50)).unwrap_or(false) {
                    event::read().ok()
                } else {
                    None
                }
            })
            .await
            {
                Ok(Some(CrosstermEvent::Key(key))) => {
                    if tx.send(Message::Input(Event::Key(key))).is_err() {
                        break;
                    }
                }
                Ok(Some(CrosstermEvent::Resize(w, h))) => {
                    if tx.send(Message::Input(Event::Resize(w, h))).is_err() {
                        break;
                    }
                }
                Ok(_) => {}
                Err(_) => break,
            }
        }
    });
}

/// Spawns a task that sends periodic tick events.
pub fn spawn_tick_timer(tx: mpsc::UnboundedSender<Message>, interval_ms: u64) {
    spawn_interval(tx, Duration::from_millis(interval_ms), || {
        Message::Input(Event::Tick)
    });
}

/// Spawns a task that requests a full regeneration every `interval_secs`.
pub fn spawn_refresh_timer(tx: mpsc::UnboundedSender<Message>, interval_secs: u64) {
    spawn_interval(tx, Duration::from_secs(interval_secs), || Message::Refresh);
}

fn spawn_interval(
    tx: mpsc::UnboundedSender<Message>,
    period: Duration,
    make: impl Fn() -> Message + Send + 'static,
) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        // The first tick completes immediately.
        interval.tick().await;
        loop {
            interval.tick().await;
            if tx.send(make()).is_err() {
                break;
            }
        }
    });
}

/// Updates application state based on a message.
pub fn update(app: &mut App, message: Message, navigate: &mut dyn FnMut(Page)) {
    match message {
        Message::Input(event) => handle_input(app, event, navigate),
        Message::Refresh => app.refresh(),
        Message::Quit => app.should_quit = true,
    }
}

/// Handles terminal input events.
fn handle_input(app: &mut App, event: Event, navigate: &mut dyn FnMut(Page)) {
    match event {
        Event::Key(key) => handle_key(app, key, navigate),
        Event::Resize(_, _) => {}
        Event::Tick => app.clear_stale_errors(),
    }
}

/// Handles a key press: global bindings first, then the active page's.
fn handle_key(app: &mut App, key: KeyEvent, navigate: &mut dyn FnMut(Page)) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('r') => app.refresh(),
        KeyCode::Tab => app.next_page(),
        KeyCode::BackTab => app.previous_page(),
        _ => match app.current_page() {
            Page::Overview => handle_overview_key(app, key, navigate),
            Page::Chart(_) => handle_chart_key(app, key, navigate),
        },
    }
}

fn handle_overview_key(app: &mut App, key: KeyEvent, navigate: &mut dyn FnMut(Page)) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.select_previous(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Enter => match app.selected_symbol() {
            Some(symbol) => navigate(Page::Chart(symbol.to_string())),
            None => app.show_error("watchlist is empty"),
        },
        _ => {}
    }
}

fn handle_chart_key(app: &mut App, key: KeyEvent, navigate: &mut dyn FnMut(Page)) {
    match key.code {
        KeyCode::Esc | KeyCode::Backspace => navigate(Page::Overview),
        KeyCode::Char('x') => app.close_active_page(),
        KeyCode::Char('g') => app.chart_type.toggle(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MarketConfig;
    use crate::random::SequenceRandom;
    use crate::tui::app::ChartType;

    fn test_app() -> App {
        let config = MarketConfig {
            bar_count: 8,
            symbols: vec!["ETH/USD".into(), "TSLA".into()],
            ..MarketConfig::default()
        };
        App::new(&config, Box::new(SequenceRandom::constant(0.3)))
    }

    fn key(code: KeyCode) -> Message {
        Message::Input(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    /// Runs `message` and returns the pages the handler asked for.
    fn dispatch(app: &mut App, message: Message) -> Vec<Page> {
        let mut requested = Vec::new();
        update(app, message, &mut |page: Page| requested.push(page));
        requested
    }

    #[test]
    fn enter_requests_chart_for_selected_symbol() {
        let mut app = test_app();
        dispatch(&mut app, key(KeyCode::Down));
        let requested = dispatch(&mut app, key(KeyCode::Enter));
        assert_eq!(requested, vec![Page::Chart("TSLA".into())]);
        // The handler only asks; nothing changes until the loop applies it.
        assert_eq!(app.current_page(), &Page::Overview);
    }

    #[test]
    fn escape_on_chart_requests_overview() {
        let mut app = test_app();
        app.open_page(Page::Chart("ETH/USD".into()));
        let requested = dispatch(&mut app, key(KeyCode::Esc));
        assert_eq!(requested, vec![Page::Overview]);
    }

    #[test]
    fn chart_keys_do_not_fire_on_overview() {
        let mut app = test_app();
        let requested = dispatch(&mut app, key(KeyCode::Esc));
        assert!(requested.is_empty());
        dispatch(&mut app, key(KeyCode::Char('g')));
        assert_eq!(app.chart_type, ChartType::Candle);
    }

    #[test]
    fn g_toggles_chart_type() {
        let mut app = test_app();
        app.open_page(Page::Chart("ETH/USD".into()));
        dispatch(&mut app, key(KeyCode::Char('g')));
        assert_eq!(app.chart_type, ChartType::Line);
    }

    #[test]
    fn refresh_replaces_series() {
        let mut app = test_app();
        let before = app.series["TSLA"].clone();
        dispatch(&mut app, key(KeyCode::Char('r')));
        let after = &app.series["TSLA"];
        assert_eq!(after.len(), before.len());
        assert!(after.bars()[0].timestamp >= before.bars()[0].timestamp);
    }

    #[test]
    fn quit_keys() {
        let mut app = test_app();
        dispatch(&mut app, key(KeyCode::Char('q')));
        assert!(app.should_quit);

        let mut app = test_app();
        dispatch(
            &mut app,
            Message::Input(Event::Key(KeyEvent::new(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL,
            ))),
        );
        assert!(app.should_quit);

        let mut app = test_app();
        dispatch(&mut app, Message::Quit);
        assert!(app.should_quit);
    }

    #[test]
    fn empty_watchlist_enter_shows_error() {
        let config = MarketConfig {
            bar_count: 8,
            symbols: Vec::new(),
            ..MarketConfig::default()
        };
        let mut app = App::new(&config, Box::new(SequenceRandom::constant(0.3)));
        let requested = dispatch(&mut app, key(KeyCode::Enter));
        assert!(requested.is_empty());
        assert!(app.error_message.is_some());
    }
}
