// src/error.rs
use std::io;
use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

/// Failure while counting a single line stream, before a path is attached.
#[derive(Debug, Error)]
pub enum LineError {
    #[error("line {line}: marker line has no ':' separator")]
    MissingSeparator { line: usize },

    #[error("line {line}: invalid force count '{value}': {source}")]
    Parse {
        line: usize,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("line {line}: force count overflows the running total")]
    Overflow { line: usize },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Failure while processing one log file.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("File not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Marker line without ':' in '{}' at line {line}", path.display())]
    MissingSeparator { path: PathBuf, line: usize },

    #[error("Failed to parse force count '{value}' in '{}' at line {line}: {source}", path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("Force count total overflows in '{}' at line {line}", path.display())]
    Overflow { path: PathBuf, line: usize },
}

impl ScanError {
    /// Attaches `path` to an error raised while reading its lines.
    #[must_use]
    pub fn from_line_error(path: PathBuf, err: LineError) -> Self {
        match err {
            LineError::MissingSeparator { line } => Self::MissingSeparator { path, line },
            LineError::Parse {
                line,
                value,
                source,
            } => Self::Parse {
                path,
                line,
                value,
                source,
            },
            LineError::Overflow { line } => Self::Overflow { path, line },
            LineError::Io(source) => Self::from_io(path, source),
        }
    }

    /// Classifies an I/O failure on `path`: a missing file becomes
    /// [`ScanError::NotFound`], anything else [`ScanError::Read`].
    #[must_use]
    pub fn from_io(path: PathBuf, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            Self::NotFound { path }
        } else {
            Self::Read { path, source }
        }
    }

    /// Whether this is the file-not-found kind.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Whether a marker line was malformed: a value that is not an integer or
    /// a line with no `:` separator.
    #[must_use]
    pub const fn is_parse_error(&self) -> bool {
        matches!(self, Self::Parse { .. } | Self::MissingSeparator { .. })
    }
}

/// Failure while loading a `forcecount.toml` file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse config file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: Box<toml::de::Error>,
    },
}
