//! Input handling - convert key events to commands

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Everything the user can ask for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Throw the current level away and generate a new one
    Regenerate,
    Quit,
}

/// Convert a key event to a command.
///
/// Only presses count; repeats and releases are ignored so holding SPACE
/// doesn't flood regenerations on terminals that report them.
pub fn key_to_command(key: KeyEvent) -> Option<Command> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Command::Quit), // Ctrl+C
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char(' ') | KeyCode::Char('r') => Some(Command::Regenerate),
        KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}
