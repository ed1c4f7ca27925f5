//! Error type shared by the renderer and the command-line front end.

use std::path::PathBuf;

use crate::types::YearMonth;

/// Errors produced while parsing, rendering, or writing auxiliary files.
#[derive(Debug, thiserror::Error)]
pub enum CalError {
    /// The stop month precedes the start month.
    #[error("invalid range: {stop} is before {start}")]
    InvalidRange { start: YearMonth, stop: YearMonth },

    /// Month outside 1-12, year outside 1-9999, or malformed `YYYYMM` input.
    #[error("invalid date: {0}")]
    InvalidDate(String),

    /// A PID or log file could not be written.
    #[error("cannot write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CalError {
    /// Process exit code for this error.
    ///
    /// Bad input is an expected failure (1); I/O trouble is not (2).
    pub fn exit_code(&self) -> u8 {
        match self {
            CalError::InvalidRange { .. } | CalError::InvalidDate(_) => 1,
            CalError::Io { .. } => 2,
        }
    }
}
