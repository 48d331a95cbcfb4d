use serde::{Deserialize, Serialize};

/// In-memory cart size shared by every add path.
///
/// The counter only grows; there is no removal path and nothing is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CartCounter {
    count: u64,
}

impl CartCounter {
    #[must_use]
    pub fn count(self) -> u64 {
        self.count
    }

    /// Increments by exactly one and returns the new count.
    pub fn add_one(&mut self) -> u64 {
        self.count = self.count.saturating_add(1);
        self.count
    }

    /// Text rendered into the cart badge.
    #[must_use]
    pub fn display_text(self) -> String {
        self.count.to_string()
    }
}
