//! Local header chrome state (mobile menu).
//!
//! DESIGN
//! ======
//! Kept out of `PageCore` so presentation controls can evolve independently
//! of navigation semantics.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state for the header.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub menu_open: bool,
}

impl UiState {
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Close the mobile menu; called whenever the active section changes.
    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }
}
