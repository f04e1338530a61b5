// src/cli.rs
use anyhow::{Result, bail};
use clap::Parser;
use std::io::{self, Write as _};
use std::path::PathBuf;
use tracing::debug;

use crate::core::config::{Config, load_config};
use crate::core::report::report_files;
use crate::core::scanner::resolve_targets;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Log files, directories or glob patterns to report on, in order
    /// (defaults to the configured list, or test4.log and test4_orca.log)
    pub files: Vec<PathBuf>,

    /// Marker text identifying a force-count line
    #[arg(short, long)]
    pub marker: Option<String>,

    /// Configuration file to use instead of searching for forcecount.toml
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Keep processing the remaining files after one fails
    #[arg(short, long, overrides_with = "no_keep_going")]
    pub keep_going: bool,

    /// Abort on the first failing file, even if the config file sets keep_going
    #[arg(long, overrides_with = "keep_going")]
    pub no_keep_going: bool,

    /// Extension of the files collected from directory targets
    #[arg(short, long)]
    pub extension: Option<String>,

    /// Print a totals line after the per-file lines
    #[arg(short, long)]
    pub total: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Silence all log output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Args {
    /// Resolves the run configuration: command line over config file over
    /// built-in defaults.
    ///
    /// # Errors
    ///
    /// Fails when the config file cannot be found, read or parsed.
    pub fn into_config(self) -> Result<Config> {
        let mut config = load_config(&std::env::current_dir()?, self.config.as_deref())?;

        if !self.files.is_empty() {
            config.files = self.files;
        }
        if let Some(marker) = self.marker {
            config.marker = marker;
        }
        if let Some(extension) = self.extension {
            config.extension = extension;
        }
        if self.keep_going {
            config.keep_going = true;
        } else if self.no_keep_going {
            config.keep_going = false;
        }
        config.total |= self.total;

        Ok(config)
    }
}

/// Runs a configured report, writing to stdout.
///
/// # Errors
///
/// This function may return an error if:
/// * Target expansion fails
/// * A file fails to process (aborting, unless `keep_going` is set)
/// * With `keep_going`, at least one file failed
pub fn run(config: &Config) -> Result<()> {
    debug!(?config, "resolved configuration");
    let files = resolve_targets(&config.files, &config.extension)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let summary = report_files(&files, &config.marker, config.keep_going, &mut out)?;

    if config.total {
        writeln!(out, "{summary}")?;
    }
    out.flush()?;

    if summary.has_failures() {
        bail!(
            "{} of {} files failed",
            summary.files_failed,
            summary.files_failed.saturating_add(summary.files_reported)
        );
    }

    Ok(())
}
