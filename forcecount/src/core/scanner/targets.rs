// src/core/scanner/targets.rs
use anyhow::{Context as _, Result};
use glob::MatchOptions;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::core::scanner::utils::{is_glob_pattern, is_hidden};

/// Expands the configured targets into the list of files to report on.
///
/// Each target expands in place, so the output keeps the order of `targets`:
/// * an existing file is kept as named, even if its name contains glob characters
/// * any other glob pattern becomes the files it matches, in sorted order;
///   wildcards do not match a leading `.`, so hidden files stay out as they do
///   in directory walks
/// * a directory becomes every non-hidden file below it whose extension is
///   `extension` (any file when `extension` is empty), sorted by path
/// * anything else is kept verbatim, including paths that do not exist, so
///   that the missing file is reported when it is processed
///
/// # Errors
///
/// This function may return an error if:
/// * A glob pattern is malformed
/// * A matched path or walked directory cannot be read
pub fn resolve_targets(targets: &[PathBuf], extension: &str) -> Result<Vec<PathBuf>> {
    let mut files = Vec::with_capacity(targets.len());

    for target in targets {
        let before = files.len();

        match target.to_str() {
            _ if target.is_dir() => {
                walk_directory(target, extension, &mut files)?;
            }
            Some(pattern) if !target.exists() && is_glob_pattern(pattern) => {
                expand_glob(pattern, &mut files)?;
            }
            _ => {
                files.push(target.clone());
                continue;
            }
        }

        let found = files.len().saturating_sub(before);
        if found == 0 {
            warn!(target = %target.display(), "target matched no log files");
        } else {
            debug!(target = %target.display(), found, "expanded target");
        }
    }

    Ok(files)
}

fn expand_glob(pattern: &str, files: &mut Vec<PathBuf>) -> Result<()> {
    let mut matched = Vec::new();
    let options = MatchOptions {
        require_literal_leading_dot: true,
        ..MatchOptions::new()
    };
    for entry in glob::glob_with(pattern, options)
        .with_context(|| format!("Invalid glob pattern: {pattern}"))?
    {
        let path = entry.with_context(|| format!("Failed to read match of {pattern}"))?;
        if path.is_file() {
            matched.push(path);
        }
    }
    matched.sort();
    files.extend(matched);
    Ok(())
}

fn walk_directory(dir: &Path, extension: &str, files: &mut Vec<PathBuf>) -> Result<()> {
    for entry in WalkDir::new(dir)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_hidden(e))
    {
        let entry =
            entry.with_context(|| format!("Failed to walk directory: {}", dir.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }

        if has_extension(entry.path(), extension) {
            files.push(entry.into_path());
        }
    }
    Ok(())
}

fn has_extension(path: &Path, extension: &str) -> bool {
    extension.is_empty() || path.extension().is_some_and(|ext| ext == extension)
}
