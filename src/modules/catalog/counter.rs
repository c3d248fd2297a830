/// Number of items selected since the book list was last shown.
///
/// Owned by whichever screen renders the list and passed where needed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ClickCounter {
    count: u32,
}

impl ClickCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self) -> u32 {
        self.count = self.count.saturating_add(1);
        self.count
    }

    /// Reset when the list screen gains focus
    pub fn reset(&mut self) {
        self.count = 0;
    }

    pub fn count(&self) -> u32 {
        self.count
    }
}
