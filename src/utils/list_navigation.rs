//! List navigation utilities for TUI components.
//!
//! Extension methods on `ListState` for the navigation actions every list
//! screen shares.

use crate::keymap::Action;
use ratatui::widgets::ListState;

/// Default page size for page up/down navigation.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Extension trait for `ListState` with the common navigation moves.
pub trait ListStateExt {
    /// Move selection up, stopping at the first item.
    fn move_up_by(&mut self, count: usize, total_items: usize);

    /// Move selection down, stopping at the last item.
    fn move_down_by(&mut self, count: usize, total_items: usize);

    fn select_first_item(&mut self, total_items: usize);

    fn select_last_item(&mut self, total_items: usize);

    /// Keep the selection inside `0..total_items`, selecting the first item
    /// when nothing is selected. Clears the selection for an empty list.
    fn clamp_selection(&mut self, total_items: usize);

    /// Apply a navigation action. Returns false for non-navigation actions.
    fn navigate(&mut self, action: Action, total_items: usize) -> bool;
}

impl ListStateExt for ListState {
    fn move_up_by(&mut self, count: usize, total_items: usize) {
        if total_items == 0 {
            return;
        }
        let current = self.selected().unwrap_or(0);
        self.select(Some(current.saturating_sub(count)));
    }

    fn move_down_by(&mut self, count: usize, total_items: usize) {
        if total_items == 0 {
            return;
        }
        let current = self.selected().unwrap_or(0);
        self.select(Some((current + count).min(total_items - 1)));
    }

    fn select_first_item(&mut self, total_items: usize) {
        if total_items > 0 {
            self.select(Some(0));
        }
    }

    fn select_last_item(&mut self, total_items: usize) {
        if total_items > 0 {
            self.select(Some(total_items - 1));
        }
    }

    fn clamp_selection(&mut self, total_items: usize) {
        if total_items == 0 {
            self.select(None);
            return;
        }
        let current = self.selected().unwrap_or(0);
        self.select(Some(current.min(total_items - 1)));
    }

    fn navigate(&mut self, action: Action, total_items: usize) -> bool {
        match action {
            Action::MoveUp => self.move_up_by(1, total_items),
            Action::MoveDown => self.move_down_by(1, total_items),
            Action::PageUp => self.move_up_by(DEFAULT_PAGE_SIZE, total_items),
            Action::PageDown => self.move_down_by(DEFAULT_PAGE_SIZE, total_items),
            Action::GoToTop => self.select_first_item(total_items),
            Action::GoToEnd => self.select_last_item(total_items),
            _ => return false,
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_up_by() {
        let mut state = ListState::default();
        state.select(Some(5));
        state.move_up_by(3, 10);
        assert_eq!(state.selected(), Some(2));

        // Test saturating at 0
        state.move_up_by(10, 10);
        assert_eq!(state.selected(), Some(0));
    }

    #[test]
    fn test_move_down_by() {
        let mut state = ListState::default();
        state.select(Some(5));
        state.move_down_by(3, 10);
        assert_eq!(state.selected(), Some(8));

        // Test saturating at end
        state.move_down_by(10, 10);
        assert_eq!(state.selected(), Some(9));
    }

    #[test]
    fn test_empty_list() {
        let mut state = ListState::default();

        state.move_up_by(1, 0);
        assert_eq!(state.selected(), None);

        state.move_down_by(1, 0);
        assert_eq!(state.selected(), None);

        state.select_first_item(0);
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn test_clamp_selection() {
        let mut state = ListState::default();
        state.clamp_selection(3);
        assert_eq!(state.selected(), Some(0));

        state.select(Some(7));
        state.clamp_selection(3);
        assert_eq!(state.selected(), Some(2));

        state.clamp_selection(0);
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn test_navigate_actions() {
        let mut state = ListState::default();
        assert!(state.navigate(Action::GoToEnd, 25));
        assert_eq!(state.selected(), Some(24));
        assert!(state.navigate(Action::PageUp, 25));
        assert_eq!(state.selected(), Some(14));
        assert!(state.navigate(Action::GoToTop, 25));
        assert_eq!(state.selected(), Some(0));
        assert!(!state.navigate(Action::Confirm, 25));
    }
}
