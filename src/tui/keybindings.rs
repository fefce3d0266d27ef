//! Minimal keyboard handling for the dashboard.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// High-level UI actions mapped from key presses.
pub enum Action {
    Quit,
    ToggleSimulation,
    Export,
    ToggleView,
    MoveUp,
    MoveDown,
    SelectItem,
    Refresh,
    None,
}

/// Process keyboard input.
#[inline]
pub fn handle_key(key: KeyEvent, vim_mode: bool) -> Action {
    match key.code {
        // Quit
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,

        // Simulation toggle and export
        KeyCode::Char(' ') => Action::ToggleSimulation,
        KeyCode::Char('e') => Action::Export,

        // Navigation
        KeyCode::Up => Action::MoveUp,
        KeyCode::Down => Action::MoveDown,
        KeyCode::Char('k') if vim_mode => Action::MoveUp,
        KeyCode::Char('j') if vim_mode => Action::MoveDown,

        // Selection
        KeyCode::Enter => Action::SelectItem,
        KeyCode::Tab => Action::ToggleView,

        // Refresh
        KeyCode::Char('r') => Action::Refresh,

        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_core_bindings() {
        assert!(matches!(key_action('q'), Action::Quit));
        assert!(matches!(key_action(' '), Action::ToggleSimulation));
        assert!(matches!(key_action('e'), Action::Export));
    }

    #[test]
    fn test_vim_bindings_gated() {
        assert!(matches!(handle_key(key(KeyCode::Char('j')), true), Action::MoveDown));
        assert!(matches!(handle_key(key(KeyCode::Char('j')), false), Action::None));
        assert!(matches!(handle_key(key(KeyCode::Char('k')), true), Action::MoveUp));
    }

    fn key_action(c: char) -> Action {
        handle_key(key(KeyCode::Char(c)), true)
    }
}
