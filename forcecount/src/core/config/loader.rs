// src/core/config/loader.rs
use anyhow::{Context as _, Result};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::config::{Config, ConfigFile};
use crate::error::ConfigError;

pub const CONFIG_FILE_NAME: &str = "forcecount.toml";

/// Searches `dir` and then each of its parents for a `forcecount.toml`,
/// returning the nearest one.
#[must_use]
pub fn find_config_file(dir: &Path) -> Option<PathBuf> {
    let mut current_dir = dir.to_path_buf();
    let mut visited = HashSet::new();

    while visited.insert(current_dir.clone()) {
        let candidate = current_dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            return Some(candidate);
        }

        match current_dir.parent() {
            Some(parent) => current_dir = parent.to_path_buf(),
            None => break,
        }
    }

    None
}

/// Reads and parses one config file.
///
/// # Errors
///
/// Returns [`ConfigError::Read`] when the file cannot be read and
/// [`ConfigError::Parse`] when it is not valid TOML or has unknown keys.
pub fn load_config_file(path: &Path) -> Result<ConfigFile, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source: Box::new(source),
    })
}

/// Builds the run configuration from the defaults and, if found, a config file.
///
/// `explicit` names the file to use and disables discovery; otherwise the
/// nearest `forcecount.toml` from `dir` upwards is used.
///
/// # Errors
///
/// This function may return an error if:
/// * The current directory cannot be determined
/// * The config file exists but cannot be read or parsed
pub fn load_config(dir: &Path, explicit: Option<&Path>) -> Result<Config> {
    let absolute_dir = if dir.is_absolute() {
        dir.to_path_buf()
    } else {
        std::env::current_dir()?.join(dir)
    };

    let mut config = Config::default();
    let path = explicit
        .map(Path::to_path_buf)
        .or_else(|| find_config_file(&absolute_dir));

    if let Some(path) = path {
        debug!(config = %path.display(), "loading config file");
        let file = load_config_file(&path)
            .with_context(|| format!("Failed to load configuration: {}", path.display()))?;
        config.apply_file(file);
    }

    Ok(config)
}
