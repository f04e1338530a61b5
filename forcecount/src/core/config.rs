// src/core/config.rs
mod loader;

pub use loader::{CONFIG_FILE_NAME, find_config_file, load_config, load_config_file};

use serde::Deserialize;
use std::path::PathBuf;

use crate::core::scanner::DEFAULT_MARKER;

/// Logs reported when neither the command line nor a config file names any.
pub const DEFAULT_FILES: [&str; 2] = ["test4.log", "test4_orca.log"];

/// Extension collected when a target is a directory.
pub const DEFAULT_EXTENSION: &str = "log";

/// Contents of a `forcecount.toml` file. Every key is optional.
#[derive(Deserialize, Debug, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub files: Option<Vec<PathBuf>>,
    pub marker: Option<String>,
    pub keep_going: Option<bool>,
    pub extension: Option<String>,
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Targets in report order: files, directories or glob patterns
    pub files: Vec<PathBuf>,
    pub marker: String,
    /// Continue with the next file after a failure instead of aborting
    pub keep_going: bool,
    pub extension: String,
    /// Print a totals line after the per-file lines
    pub total: bool,
}

impl Default for Config {
    #[inline]
    fn default() -> Self {
        Self {
            files: DEFAULT_FILES.iter().map(PathBuf::from).collect(),
            marker: DEFAULT_MARKER.to_owned(),
            keep_going: false,
            extension: DEFAULT_EXTENSION.to_owned(),
            total: false,
        }
    }
}

impl Config {
    /// Overlays the keys present in `file` onto `self`.
    #[inline]
    pub fn apply_file(&mut self, file: ConfigFile) {
        if let Some(files) = file.files {
            self.files = files;
        }
        if let Some(marker) = file.marker {
            self.marker = marker;
        }
        if let Some(keep_going) = file.keep_going {
            self.keep_going = keep_going;
        }
        if let Some(extension) = file.extension {
            self.extension = extension;
        }
    }
}
