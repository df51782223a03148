//! Keyboard input handling.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use super::state::AppState;
use crate::model::Appearance;

/// What the main loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    /// Nothing beyond the state change already applied.
    None,
}

/// Handles a key event, mutating navigation state as needed.
pub fn handle_key(state: &mut AppState, key: KeyEvent) -> KeyAction {
    if key.kind != KeyEventKind::Press {
        return KeyAction::None;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return KeyAction::Quit,

        KeyCode::Char('1') => state.select(Appearance::Plain),
        KeyCode::Char('2') => state.select(Appearance::Grouped),
        KeyCode::Char('3') => state.select(Appearance::InsetGrouped),
        KeyCode::Char('4') => state.select(Appearance::Sidebar),
        KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => state.next_screen(),
        KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => state.prev_screen(),

        KeyCode::Down | KeyCode::Char('j') => *state.scroll_mut() += 1,
        KeyCode::Up | KeyCode::Char('k') => {
            let scroll = state.scroll_mut();
            *scroll = scroll.saturating_sub(1);
        }
        KeyCode::Home | KeyCode::Char('g') => *state.scroll_mut() = 0,

        _ => {}
    }
    KeyAction::None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn number_keys_select_screens() {
        let mut state = AppState::new(Appearance::Plain);
        assert_eq!(handle_key(&mut state, key(KeyCode::Char('4'))), KeyAction::None);
        assert_eq!(state.current, Appearance::Sidebar);

        handle_key(&mut state, key(KeyCode::Char('2')));
        assert_eq!(state.current, Appearance::Grouped);
    }

    #[test]
    fn tab_cycles_screens() {
        let mut state = AppState::new(Appearance::Sidebar);
        handle_key(&mut state, key(KeyCode::Tab));
        assert_eq!(state.current, Appearance::Plain);
        handle_key(&mut state, key(KeyCode::BackTab));
        assert_eq!(state.current, Appearance::Sidebar);
    }

    #[test]
    fn q_and_esc_quit() {
        let mut state = AppState::new(Appearance::Plain);
        assert_eq!(handle_key(&mut state, key(KeyCode::Char('q'))), KeyAction::Quit);
        assert_eq!(handle_key(&mut state, key(KeyCode::Esc)), KeyAction::Quit);
    }

    #[test]
    fn scrolling_saturates_at_the_top() {
        let mut state = AppState::new(Appearance::Plain);
        handle_key(&mut state, key(KeyCode::Up));
        assert_eq!(state.scroll(), 0);
        handle_key(&mut state, key(KeyCode::Down));
        handle_key(&mut state, key(KeyCode::Down));
        assert_eq!(state.scroll(), 2);
        handle_key(&mut state, key(KeyCode::Home));
        assert_eq!(state.scroll(), 0);
    }

    #[test]
    fn release_events_are_ignored() {
        let mut state = AppState::new(Appearance::Plain);
        let release = KeyEvent {
            kind: KeyEventKind::Release,
            ..key(KeyCode::Char('q'))
        };
        assert_eq!(handle_key(&mut state, release), KeyAction::None);
    }
}
