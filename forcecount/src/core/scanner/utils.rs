// src/core/scanner/utils.rs
use std::ffi::OsStr;

/// Whether a walked entry is a dotfile or dot-directory.
///
/// `.tmp*` names are not treated as hidden so that scratch directories
/// created by test harnesses stay visible.
#[must_use]
pub fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    if entry.depth() == 0 {
        return false;
    }
    is_hidden_name(entry.file_name())
}

fn is_hidden_name(name: &OsStr) -> bool {
    name.to_str().is_some_and(|s| {
        if s.starts_with(".tmp") {
            return false;
        }
        s.starts_with('.')
    })
}

/// Whether `target` should be expanded with `glob` rather than used as a path.
#[must_use]
pub fn is_glob_pattern(target: &str) -> bool {
    target.contains(['*', '?', '['])
}
