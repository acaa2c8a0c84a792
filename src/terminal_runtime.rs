use std::io;

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::backend::CrosstermBackend;
use ratatui::{Frame, Terminal};
use tracing::{debug, warn};

type StdoutTerminal = Terminal<CrosstermBackend<io::Stdout>>;

/// The terminal as the game view holds it: raw mode on, alternate screen
/// entered, cursor hidden.
///
/// This is the scoped resource behind a game view. Key events can only be
/// read as discrete presses while it is alive, and dropping it hands the
/// terminal back even when the view unwinds on an error or panic.
pub struct TerminalSession {
    terminal: StdoutTerminal,
    released: bool,
}

impl TerminalSession {
    /// Switches the terminal into game mode.
    ///
    /// Each step that succeeded is undone if a later one fails, so an error
    /// here never leaves the shell in raw mode.
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;

        if let Err(error) = execute!(io::stdout(), EnterAlternateScreen, Hide) {
            let _ = disable_raw_mode();
            return Err(error);
        }

        let terminal = Terminal::new(CrosstermBackend::new(io::stdout())).inspect_err(|_| {
            let _ = restore_terminal();
        })?;

        debug!("terminal acquired");
        Ok(Self {
            terminal,
            released: false,
        })
    }

    /// Draws one frame.
    pub fn draw<F>(&mut self, render: F) -> io::Result<()>
    where
        F: FnOnce(&mut Frame<'_>),
    {
        self.terminal.draw(render)?;
        Ok(())
    }

    /// Hands the terminal back and reports whether that worked.
    ///
    /// Dropping the session does the same silently; call this on the normal
    /// exit path so a failed restore reaches the user.
    pub fn close(mut self) -> io::Result<()> {
        self.released = true;
        let result = restore_terminal();
        debug!(ok = result.is_ok(), "terminal released");
        result
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if self.released {
            return;
        }
        if let Err(error) = restore_terminal() {
            warn!(%error, "terminal restore on drop failed");
        }
    }
}

/// Leaves raw mode and the alternate screen; safe to call more than once.
pub fn restore_terminal() -> io::Result<()> {
    let raw = disable_raw_mode();
    execute!(io::stdout(), Show, LeaveAlternateScreen)?;
    raw
}
