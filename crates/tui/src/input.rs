//! Key mapping from terminal events to form actions.

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// A discrete user action on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    FocusNext,
    FocusPrev,
    /// Enter: advance from an input, press a button.
    Submit,
    Insert(char),
    Backspace,
    Quit,
}

/// Map a key event to an action. Releases and repeats of non-text keys are ignored.
pub fn action_for(key: KeyEvent) -> Option<Action> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    let action = match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
        KeyCode::Esc => Action::Quit,
        KeyCode::Tab | KeyCode::Down => Action::FocusNext,
        KeyCode::BackTab | KeyCode::Up => Action::FocusPrev,
        KeyCode::Enter => Action::Submit,
        KeyCode::Backspace => Action::Backspace,
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            Action::Insert(c)
        }
        _ => return None,
    };

    if key.kind == KeyEventKind::Repeat && !matches!(action, Action::Insert(_) | Action::Backspace) {
        return None;
    }
    Some(action)
}

/// Block until the next terminal event and map it.
///
/// Returns `None` for events that only need a redraw (resize, focus).
pub fn read_action() -> io::Result<Option<Action>> {
    match event::read()? {
        Event::Key(key) => Ok(action_for(key)),
        _ => Ok(None),
    }
}
