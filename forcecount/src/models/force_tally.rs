// src/models/force_tally.rs

/// Per-file accumulation state: marker lines seen and the sum of their values.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ForceTally {
    pub path_count: u64,
    pub force_count: i64,
}

impl ForceTally {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            path_count: 0,
            force_count: 0,
        }
    }

    /// Records one marker line carrying `forces`.
    ///
    /// Returns `None` when the running force total would overflow, leaving the
    /// tally unchanged.
    #[inline]
    #[must_use]
    pub fn record(&mut self, forces: i64) -> Option<()> {
        let force_count = self.force_count.checked_add(forces)?;
        self.force_count = force_count;
        self.path_count = self.path_count.saturating_add(1);
        Some(())
    }
}
