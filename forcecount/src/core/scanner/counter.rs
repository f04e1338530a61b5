// src/core/scanner/counter.rs
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use tracing::{debug, trace};

use crate::error::{LineError, ScanError};
use crate::models::ForceTally;

/// Marker GRRM writes once per optimized path, followed by `: <evaluations>`.
pub const DEFAULT_MARKER: &str = "NUMBER OF FORCE CALCULATIONS";

/// Extracts the value field of a marker line: the text after the first `:`
/// (up to the next `:` if there is one), with surrounding whitespace trimmed.
///
/// Returns `None` when the line has no `:` at all.
#[inline]
#[must_use]
pub fn marker_value(line: &str) -> Option<&str> {
    line.split(':').nth(1).map(str::trim)
}

/// Accumulates a [`ForceTally`] over every line of `reader` containing `marker`.
///
/// # Arguments
///
/// * `reader` - Any buffered line source
/// * `marker` - Literal substring identifying a marker line
///
/// # Returns
///
/// * `Ok(ForceTally)` - Marker line count and the sum of their values
///
/// # Errors
///
/// This function may return an error if:
/// * A line cannot be read (I/O failure or invalid UTF-8)
///
/// Lines end at `\n`, `\r\n` or a lone `\r`.
/// * A marker line has no `:` separator
/// * The value after the separator is not an integer
/// * The running sum overflows
pub fn tally_lines<R: BufRead>(mut reader: R, marker: &str) -> Result<ForceTally, LineError> {
    let mut tally = ForceTally::new();
    let mut line_number: usize = 0;
    let mut chunk = Vec::new();

    loop {
        chunk.clear();
        if reader.read_until(b'\n', &mut chunk)? == 0 {
            break;
        }

        for raw in split_line_endings(&chunk) {
            line_number = line_number.saturating_add(1);
            let line = std::str::from_utf8(raw)
                .map_err(|e| LineError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))?;
            if line.contains(marker) {
                tally_marker_line(&mut tally, line, line_number)?;
            }
        }
    }

    Ok(tally)
}

/// Splits a chunk ending in at most one `\n` into lines, treating `\n`,
/// `\r\n` and a lone `\r` all as line terminators.
fn split_line_endings(chunk: &[u8]) -> impl Iterator<Item = &[u8]> {
    let chunk = chunk.strip_suffix(b"\n").unwrap_or(chunk);
    let chunk = chunk.strip_suffix(b"\r").unwrap_or(chunk);
    chunk.split(|&byte| byte == b'\r')
}

fn tally_marker_line(
    tally: &mut ForceTally,
    line: &str,
    line_number: usize,
) -> Result<(), LineError> {
    let value = marker_value(line).ok_or(LineError::MissingSeparator { line: line_number })?;
    let forces = value.parse::<i64>().map_err(|source| LineError::Parse {
        line: line_number,
        value: value.to_owned(),
        source,
    })?;

    trace!(line = line_number, forces, "marker line");
    tally
        .record(forces)
        .ok_or(LineError::Overflow { line: line_number })
}

/// Counts marker lines in the file at `path` and sums their values.
///
/// The file handle lives only for the duration of this call and is closed
/// whether reading succeeds or fails.
///
/// # Errors
///
/// * [`ScanError::NotFound`] when `path` does not exist
/// * [`ScanError::Parse`] / [`ScanError::MissingSeparator`] for a malformed marker line
/// * [`ScanError::Read`] / [`ScanError::Overflow`] for the remaining failures
pub fn process_file(path: &Path, marker: &str) -> Result<ForceTally, ScanError> {
    debug!(file = %path.display(), "scanning");

    let file = File::open(path).map_err(|e| ScanError::from_io(path.to_path_buf(), e))?;
    let tally = tally_lines(BufReader::new(file), marker)
        .map_err(|e| ScanError::from_line_error(path.to_path_buf(), e))?;

    debug!(
        file = %path.display(),
        paths = tally.path_count,
        forces = tally.force_count,
        "scanned"
    );
    Ok(tally)
}
