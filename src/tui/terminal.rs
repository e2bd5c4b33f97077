//! Terminal setup and teardown.

use std::io::{self, IsTerminal, Stdout};

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::{Result, TickforgeError};

/// Terminal type driven by the dashboard.
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Returns true when stdout is attached to an interactive terminal.
pub fn is_interactive() -> bool {
    io::stdout().is_terminal()
}

/// Enters raw mode and the alternate screen, returning a ready terminal.
///
/// # Errors
///
/// Returns [`TickforgeError::Io`] if stdout is not a TTY or any setup step
/// fails. Raw mode is switched back off before returning an error.
pub fn setup_terminal() -> Result<Tui> {
    if !is_interactive() {
        return Err(TickforgeError::Io(
            "dashboard requires an interactive terminal".to_string(),
        ));
    }

    enable_raw_mode().map_err(io_error("enable raw mode"))?;

    let mut stdout = io::stdout();
    let terminal = execute!(stdout, EnterAlternateScreen)
        .and_then(|()| Terminal::new(CrosstermBackend::new(stdout)))
        .map_err(|e| {
            let _ = disable_raw_mode();
            io_error("enter alternate screen")(e)
        })?;

    Ok(terminal)
}

/// Leaves the alternate screen, disables raw mode and shows the cursor.
///
/// # Errors
///
/// Returns [`TickforgeError::Io`] if any teardown step fails.
pub fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode().map_err(io_error("disable raw mode"))?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .map_err(io_error("leave alternate screen"))?;
    terminal.show_cursor().map_err(io_error("show cursor"))?;
    Ok(())
}

/// Builds a mapper that tags an I/O error with the step that failed.
pub(crate) fn io_error(step: &'static str) -> impl Fn(io::Error) -> TickforgeError {
    move |e| TickforgeError::Io(format!("failed to {step}: {e}"))
}
