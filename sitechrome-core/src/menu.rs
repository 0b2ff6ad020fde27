//! Menu open/closed state
//!
//! The menu's single source of truth. The DOM's class and ARIA attributes
//! are rendered from this boolean after every transition and are never read
//! back to decide the next action.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn is_open(self) -> bool {
        self.open
    }

    /// Open the menu, returning the resulting open flag.
    pub fn open(&mut self) -> bool {
        self.open = true;
        self.open
    }

    /// Close the menu, returning the resulting open flag.
    ///
    /// Closing an already-closed menu is a state no-op, but the caller still
    /// re-renders the closed attributes (Escape always runs the close path).
    pub fn close(&mut self) -> bool {
        self.open = false;
        self.open
    }

    /// Flip the current state, returning the resulting open flag.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }
}
