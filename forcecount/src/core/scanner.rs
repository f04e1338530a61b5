// src/core/scanner.rs
mod counter;
mod targets;
mod utils;


pub use counter::{DEFAULT_MARKER, marker_value, process_file, tally_lines};
pub use targets::resolve_targets;
pub use utils::{is_glob_pattern, is_hidden};
