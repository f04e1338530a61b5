// src/models/run_summary.rs
use crate::models::ForceTally;
use std::fmt;

/// Totals across every file of a run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub files_reported: u64,
    pub files_failed: u64,
    pub path_count: u64,
    pub force_count: i64,
}

impl RunSummary {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            files_reported: 0,
            files_failed: 0,
            path_count: 0,
            force_count: 0,
        }
    }

    #[inline]
    pub fn add_report(&mut self, tally: &ForceTally) {
        self.files_reported = self.files_reported.saturating_add(1);
        self.path_count = self.path_count.saturating_add(tally.path_count);
        self.force_count = self.force_count.saturating_add(tally.force_count);
    }

    #[inline]
    pub fn add_failure(&mut self) {
        self.files_failed = self.files_failed.saturating_add(1);
    }

    #[inline]
    #[must_use]
    pub const fn has_failures(&self) -> bool {
        self.files_failed > 0
    }
}

impl fmt::Display for RunSummary {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "total: files: {}, path: {}, force: {}",
            self.files_reported, self.path_count, self.force_count
        )
    }
}
