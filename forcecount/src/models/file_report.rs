// src/models/file_report.rs
use crate::models::ForceTally;
use std::fmt;
use std::path::PathBuf;

/// The result for one log file, printed as
/// `file: <path>, path: <count>, force: <sum>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub file: PathBuf,
    pub tally: ForceTally,
}

impl fmt::Display for FileReport {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "file: {}, path: {}, force: {}",
            self.file.display(),
            self.tally.path_count,
            self.tally.force_count
        )
    }
}
