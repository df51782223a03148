//! TUI navigation state.

use crate::model::Appearance;

/// Mutable state of the TUI: which screen is showing and how far each
/// screen's list is scrolled. Screen content itself never changes.
pub struct AppState {
    /// Currently displayed appearance screen.
    pub current: Appearance,
    /// Scroll offset per screen, indexed by `Appearance::index`.
    pub scroll: [usize; 4],
}

impl AppState {
    /// Creates state starting on the given screen.
    pub fn new(start: Appearance) -> Self {
        Self {
            current: start,
            scroll: [0; 4],
        }
    }

    /// Scroll offset of the current screen.
    pub fn scroll(&self) -> usize {
        self.scroll[self.current.index()]
    }

    /// Mutable scroll offset of the current screen.
    pub fn scroll_mut(&mut self) -> &mut usize {
        &mut self.scroll[self.current.index()]
    }

    /// Switches to a screen directly.
    pub fn select(&mut self, appearance: Appearance) {
        self.current = appearance;
    }

    /// Cycles to the next screen.
    pub fn next_screen(&mut self) {
        let next = (self.current.index() + 1) % Appearance::ALL.len();
        self.current = Appearance::ALL[next];
    }

    /// Cycles to the previous screen.
    pub fn prev_screen(&mut self) {
        let len = Appearance::ALL.len();
        let prev = (self.current.index() + len - 1) % len;
        self.current = Appearance::ALL[prev];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screens_cycle_in_both_directions() {
        let mut state = AppState::new(Appearance::Plain);
        state.next_screen();
        assert_eq!(state.current, Appearance::Grouped);
        state.prev_screen();
        state.prev_screen();
        assert_eq!(state.current, Appearance::Sidebar);
        state.next_screen();
        assert_eq!(state.current, Appearance::Plain);
    }

    #[test]
    fn scroll_is_tracked_per_screen() {
        let mut state = AppState::new(Appearance::Plain);
        *state.scroll_mut() = 5;
        state.select(Appearance::Sidebar);
        assert_eq!(state.scroll(), 0);
        state.select(Appearance::Plain);
        assert_eq!(state.scroll(), 5);
    }
}
