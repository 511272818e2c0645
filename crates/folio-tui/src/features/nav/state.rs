//! Navigation state.

use crate::state::SectionId;

/// Active link and the collapsible menu used on narrow terminals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavState {
    /// Section whose link is highlighted.
    pub active: SectionId,
    menu_open: bool,
    /// Highlighted entry while the menu is open.
    cursor: SectionId,
}

impl Default for NavState {
    fn default() -> Self {
        Self {
            active: SectionId::Home,
            menu_open: false,
            cursor: SectionId::Home,
        }
    }
}

impl NavState {
    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn cursor(&self) -> SectionId {
        self.cursor
    }

    /// Opens or closes the menu. Opening puts the cursor on the active link.
    pub fn toggle_menu(&mut self) {
        if self.menu_open {
            self.close_menu();
        } else {
            self.menu_open = true;
            self.cursor = self.active;
        }
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Moves the menu cursor, wrapping at both ends.
    pub fn move_cursor(&mut self, delta: isize) {
        let len = SectionId::ALL.len() as isize;
        let next = (self.cursor.index() as isize + delta).rem_euclid(len) as usize;
        self.cursor = SectionId::from_index(next).unwrap_or(SectionId::Home);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_starts_at_active_link() {
        let mut nav = NavState {
            active: SectionId::Skills,
            ..Default::default()
        };
        nav.toggle_menu();
        assert!(nav.is_menu_open());
        assert_eq!(nav.cursor(), SectionId::Skills);
        nav.toggle_menu();
        assert!(!nav.is_menu_open());
    }

    #[test]
    fn test_cursor_wraps() {
        let mut nav = NavState::default();
        nav.toggle_menu();
        nav.move_cursor(-1);
        assert_eq!(nav.cursor(), SectionId::Contact);
        nav.move_cursor(1);
        assert_eq!(nav.cursor(), SectionId::Home);
        nav.move_cursor(2);
        assert_eq!(nav.cursor(), SectionId::Skills);
    }
}
