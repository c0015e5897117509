use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::session::InputEvent;

/// What the event loop should do after a terminal event
#[derive(Debug, PartialEq)]
pub enum Action {
    Input(InputEvent),
    Redraw,
    None,
}

/// Poll for terminal events and convert to actions
pub fn poll_event(timeout: Duration) -> anyhow::Result<Action> {
    if event::poll(timeout)? {
        return Ok(match event::read()? {
            Event::Key(key) if key.kind != KeyEventKind::Release => key_to_action(key),
            Event::Resize(_, _) => Action::Redraw,
            _ => Action::None,
        });
    }
    Ok(Action::None)
}

fn key_to_action(key: KeyEvent) -> Action {
    let input = match (key.code, key.modifiers) {
        // Quit
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => InputEvent::Cancel,
        (KeyCode::Esc, _) => InputEvent::Cancel,
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => InputEvent::ClearQuery,

        // Navigation (Emacs style)
        (KeyCode::Char('p'), KeyModifiers::CONTROL) => InputEvent::Up,
        (KeyCode::Char('n'), KeyModifiers::CONTROL) => InputEvent::Down,
        (KeyCode::Up, _) => InputEvent::Up,
        (KeyCode::Down, _) => InputEvent::Down,
        (KeyCode::PageUp, _) => InputEvent::PageUp,
        (KeyCode::PageDown, _) => InputEvent::PageDown,

        (KeyCode::Enter, _) => InputEvent::Confirm,

        // Query input
        (KeyCode::Char(c), KeyModifiers::NONE) | (KeyCode::Char(c), KeyModifiers::SHIFT) => {
            InputEvent::Char(c)
        }
        (KeyCode::Backspace, _) => InputEvent::Backspace,

        _ => return Action::None,
    };
    Action::Input(input)
}
