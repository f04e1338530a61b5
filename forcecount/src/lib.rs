// src/lib.rs
pub mod cli;
pub mod core;
pub mod error;
pub mod logging;
pub mod models;

pub use cli::{Args, run};
pub use crate::core::config::{
    CONFIG_FILE_NAME, Config, ConfigFile, DEFAULT_EXTENSION, DEFAULT_FILES, load_config,
};
pub use crate::core::report::report_files;
pub use crate::core::scanner::{
    DEFAULT_MARKER, marker_value, process_file, resolve_targets, tally_lines,
};
pub use error::{ConfigError, LineError, ScanError};
pub use models::{FileReport, ForceTally, RunSummary};
