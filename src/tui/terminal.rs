use std::io;

use anyhow::Result;
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::warn;

/// Manages terminal setup and cleanup
///
/// Draws on stderr so stdout only ever carries the selected command.
pub struct TerminalManager {
    terminal: Terminal<CrosstermBackend<io::Stderr>>,
    restored: bool,
}

impl TerminalManager {
    /// Set up terminal for TUI mode
    pub fn new() -> Result<Self> {
        enable_raw_mode()?;
        let mut stderr = io::stderr();
        execute!(stderr, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stderr);
        let terminal = Terminal::new(backend)?;

        Ok(Self { terminal, restored: false })
    }

    /// Get mutable reference to terminal
    pub fn terminal_mut(&mut self) -> &mut Terminal<CrosstermBackend<io::Stderr>> {
        &mut self.terminal
    }

    /// Restore terminal to normal mode
    ///
    /// On failure the manager is dropped unrestored, so `Drop` retries every step.
    pub fn restore(mut self) -> Result<()> {
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        self.restored = true;
        Ok(())
    }
}

// Ensure cleanup happens even if dropped (panic, early return, etc.)
impl Drop for TerminalManager {
    fn drop(&mut self) {
        if self.restored {
            return;
        }
        // Best effort cleanup, we may already be unwinding
        if let Err(e) = disable_raw_mode() {
            warn!("Failed to disable raw mode: {}", e);
        }
        if let Err(e) = execute!(self.terminal.backend_mut(), LeaveAlternateScreen) {
            warn!("Failed to leave alternate screen: {}", e);
        }
        if let Err(e) = self.terminal.show_cursor() {
            warn!("Failed to show cursor: {}", e);
        }
    }
}
