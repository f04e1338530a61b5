// src/core/report.rs
use anyhow::Result;
use std::io::Write;
use std::path::PathBuf;
use tracing::{error, info};

use crate::core::scanner::process_file;
use crate::models::{FileReport, RunSummary};

/// Processes `files` in order, writing one report line per file to `out` as
/// soon as that file has been scanned.
///
/// With `keep_going` unset the first failing file aborts the run and no later
/// file is opened. With it set, the failure is logged, counted in the returned
/// summary, and the next file is processed.
///
/// # Errors
///
/// This function may return an error if:
/// * A file fails and `keep_going` is unset (the error is a [`crate::ScanError`])
/// * Writing to `out` fails
pub fn report_files<W: Write>(
    files: &[PathBuf],
    marker: &str,
    keep_going: bool,
    out: &mut W,
) -> Result<RunSummary> {
    let mut summary = RunSummary::new();

    for file in files {
        let tally = match process_file(file, marker) {
            Ok(tally) => tally,
            Err(e) if keep_going => {
                error!(file = %file.display(), "{e}");
                summary.add_failure();
                continue;
            }
            Err(e) => return Err(e.into()),
        };

        let report = FileReport {
            file: file.clone(),
            tally,
        };
        writeln!(out, "{report}")?;
        info!(
            file = %file.display(),
            paths = tally.path_count,
            forces = tally.force_count,
            "reported"
        );
        summary.add_report(&tally);
    }

    Ok(summary)
}
