use tracing::{debug, info};

use super::record::SearchSession;
use super::{MAX_QUERY_CHARS, MAX_VISIBLE_RESULTS};
use crate::models::Corpus;

/// Which part of the picker receives input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    EditingQuery,
    NavigatingResults,
}

/// Discrete input the picker reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Char(char),
    Backspace,
    ClearQuery,
    Up,
    Down,
    PageUp,
    PageDown,
    Confirm,
    Cancel,
}

/// Outcome of handling one event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    Continue,
    /// The user picked this command
    Select(String),
    Quit,
}

/// Input state machine over a [`SearchSession`]
#[derive(Debug, Clone)]
pub struct Picker {
    session: SearchSession,
    mode: InputMode,
    cursor: usize,
    max_visible: usize,
}

impl Picker {
    pub fn new(corpus: Corpus) -> Self {
        Self::with_max_visible(corpus, MAX_VISIBLE_RESULTS)
    }

    pub fn with_max_visible(corpus: Corpus, max_visible: usize) -> Self {
        Self {
            session: SearchSession::new(corpus),
            mode: InputMode::EditingQuery,
            cursor: 0,
            max_visible: max_visible.max(1),
        }
    }

    pub fn session(&self) -> &SearchSession {
        &self.session
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    /// Row under the cursor, relative to the ranked result
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn max_visible(&self) -> usize {
        self.max_visible
    }

    /// Number of rows the user can see and move through
    pub fn visible_len(&self) -> usize {
        self.session.len().min(self.max_visible)
    }

    pub fn handle(&mut self, event: InputEvent) -> Transition {
        match (self.mode, event) {
            (_, InputEvent::Cancel) => Transition::Quit,

            (InputMode::EditingQuery, InputEvent::ClearQuery) => {
                if self.session.query().is_empty() {
                    Transition::Quit
                } else {
                    self.set_query(String::new());
                    Transition::Continue
                }
            }
            (InputMode::NavigatingResults, InputEvent::ClearQuery) => {
                self.set_query(String::new());
                Transition::Continue
            }

            (_, InputEvent::Char(c)) => {
                if self.session.query().chars().count() < MAX_QUERY_CHARS {
                    let mut query = self.session.query().to_string();
                    query.push(c);
                    self.set_query(query);
                } else {
                    self.back_to_editing();
                }
                Transition::Continue
            }
            (_, InputEvent::Backspace) => {
                let mut query = self.session.query().to_string();
                if query.pop().is_some() {
                    self.set_query(query);
                } else {
                    self.back_to_editing();
                }
                Transition::Continue
            }

            (InputMode::EditingQuery, InputEvent::Down) => {
                // Row 0 is what Enter already picks, so start one below it
                if self.visible_len() > 1 {
                    self.cursor = 1;
                }
                self.mode = InputMode::NavigatingResults;
                Transition::Continue
            }
            (InputMode::EditingQuery, InputEvent::Up) => {
                self.mode = InputMode::NavigatingResults;
                Transition::Continue
            }
            (InputMode::EditingQuery, InputEvent::PageUp | InputEvent::PageDown) => {
                Transition::Continue
            }
            (InputMode::EditingQuery, InputEvent::Confirm) => self.select(0),

            (InputMode::NavigatingResults, InputEvent::Up) => self.move_cursor(-1),
            (InputMode::NavigatingResults, InputEvent::Down) => self.move_cursor(1),
            (InputMode::NavigatingResults, InputEvent::PageUp) => self.move_cursor(-10),
            (InputMode::NavigatingResults, InputEvent::PageDown) => self.move_cursor(10),
            (InputMode::NavigatingResults, InputEvent::Confirm) => self.select(self.cursor),
        }
    }

    /// Replace the session with the next step for `query` and go back to editing
    fn set_query(&mut self, query: String) {
        self.session = self.session.with_query(query);
        self.back_to_editing();
    }

    /// Editing always confirms row 0, so the cursor has to follow
    fn back_to_editing(&mut self) {
        self.mode = InputMode::EditingQuery;
        self.cursor = 0;
    }

    fn move_cursor(&mut self, delta: isize) -> Transition {
        let total = self.visible_len();
        if total == 0 {
            self.cursor = 0;
            return Transition::Continue;
        }

        let new_idx = (self.cursor as isize + delta).max(0) as usize;
        self.cursor = new_idx.min(total - 1);
        Transition::Continue
    }

    /// Out-of-range positions are ignored
    fn select(&self, position: usize) -> Transition {
        if position >= self.visible_len() {
            debug!(position, "selection out of range ignored");
            return Transition::Continue;
        }
        match self.session.select(position) {
            Some(text) => {
                info!(position, "command selected");
                Transition::Select(text.to_string())
            }
            None => Transition::Continue,
        }
    }
}
