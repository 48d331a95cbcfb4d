use serde::{Deserialize, Serialize};

/// Open/closed flag of the collapsible mobile navigation panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NavState {
    open: bool,
}

impl NavState {
    #[must_use]
    pub fn is_open(self) -> bool {
        self.open
    }

    /// Flips the flag and returns the new value.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Closes the panel. Returns `true` when the state actually changed.
    pub fn close(&mut self) -> bool {
        let was_open = self.open;
        self.open = false;
        was_open
    }
}
