//! TUI application state and event loop.
//!
//! The `App` owns a [`Picker`] and runs the main loop via `run()`: draw when something changed,
//! poll one terminal event, feed it through the picker's state machine. Ranking happens inside
//! [`Picker::handle`]; drawing only reads the current session step.
//!
//! # Example
//!
//! ```rust,ignore
//! let mut app = App::new(corpus, PickerConfig::default());
//! let selected = app.run(&mut terminal)?;
//! ```

use std::time::{Duration, Instant};

use anyhow::Result;
use ratatui::Terminal;
use ratatui::backend::Backend;
use tracing::debug;

use super::events::{Action, poll_event};
use super::rendering::render_ui;
use crate::config::PickerConfig;
use crate::models::Corpus;
use crate::session::{Picker, Transition};

/// Event poll timeout; also bounds how stale a frame can get
const POLL_INTERVAL_MS: u64 = 100;

pub struct App {
    picker: Picker,
    config: PickerConfig,
    // Dirty state tracking for efficient rendering
    needs_redraw: bool,
    last_draw_time: Instant,
}

impl App {
    pub fn new(corpus: Corpus, config: PickerConfig) -> Self {
        Self {
            picker: Picker::with_max_visible(corpus, config.max_visible_results),
            config,
            needs_redraw: true, // Initial draw needed
            last_draw_time: Instant::now(),
        }
    }

    pub fn picker(&self) -> &Picker {
        &self.picker
    }

    /// Run until the user picks a command (`Some`) or quits (`None`)
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<Option<String>> {
        loop {
            self.draw_if_needed(terminal)?;

            let action = poll_event(Duration::from_millis(POLL_INTERVAL_MS))?;
            match self.handle_action(action) {
                Transition::Continue => {}
                Transition::Select(command) => return Ok(Some(command)),
                Transition::Quit => return Ok(None),
            }
        }
    }

    /// Draw if dirty or if it's been a while (for terminal resize handling)
    fn draw_if_needed<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_draw_time);
        if self.needs_redraw || elapsed >= Duration::from_millis(POLL_INTERVAL_MS) {
            terminal.draw(|f| render_ui(f, &self.picker, &self.config))?;
            self.needs_redraw = false;
            self.last_draw_time = now;
        }
        Ok(())
    }

    /// Handle a user action (extracted for testing)
    fn handle_action(&mut self, action: Action) -> Transition {
        match action {
            Action::Input(event) => {
                debug!(?event, mode = ?self.picker.mode(), "input");
                self.needs_redraw = true;
                self.picker.handle(event)
            }
            Action::Redraw => {
                self.needs_redraw = true;
                Transition::Continue
            }
            Action::None => Transition::Continue,
        }
    }
}
