//! Key bindings

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::Mode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Up,
    Down,
    /// Picker: open the highlighted calculator
    Open,
    /// Calculator: cancel an edit, or return to the picker
    Back,
    Char(char),
    Backspace,
    ClearField,
    /// Tab: cycle a choice field, otherwise move down
    Next,
    Calculate,
    Reset,
    Export,
    None,
}

pub fn key_to_action(key: KeyEvent, mode: Mode) -> Action {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && key.code == KeyCode::Char('c') {
        return Action::Quit;
    }

    match mode {
        Mode::Picker => match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
            KeyCode::Up | KeyCode::Char('k') => Action::Up,
            KeyCode::Down | KeyCode::Char('j') => Action::Down,
            KeyCode::Enter => Action::Open,
            _ => Action::None,
        },
        Mode::Calculator => match key.code {
            KeyCode::Char('r') if ctrl => Action::Reset,
            KeyCode::Char('e') if ctrl => Action::Export,
            KeyCode::Char('u') if ctrl => Action::ClearField,
            KeyCode::Char('q') if ctrl => Action::Quit,
            KeyCode::F(5) => Action::Reset,
            KeyCode::F(2) => Action::Export,
            KeyCode::Esc => Action::Back,
            KeyCode::Up | KeyCode::BackTab => Action::Up,
            KeyCode::Down => Action::Down,
            KeyCode::Tab => Action::Next,
            KeyCode::Enter => Action::Calculate,
            KeyCode::Backspace => Action::Backspace,
            KeyCode::Char(c) if !ctrl => Action::Char(c),
            _ => Action::None,
        },
    }
}
