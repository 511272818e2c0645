//! Tabs state.

/// Exactly one tab panel is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabsState {
    active: usize,
    count: usize,
}

impl TabsState {
    pub fn new(count: usize) -> Self {
        Self { active: 0, count }
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn select_next(&mut self) {
        if self.count > 0 {
            self.active = (self.active + 1) % self.count;
        }
    }

    pub fn select_prev(&mut self) {
        if self.count > 0 {
            self.active = (self.active + self.count - 1) % self.count;
        }
    }

    /// Activates tab `index`; out-of-range indexes are ignored.
    pub fn select(&mut self, index: usize) {
        if index < self.count {
            self.active = index;
        }
    }
}
