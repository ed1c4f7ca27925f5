//! Logging context for the command-line front end.
//!
//! The context is built from arguments and installed only for the duration
//! of a run with [`tracing::dispatcher::with_default`]; nothing is set
//! process-wide. Library code just emits `tracing` events.

use std::fs::{File, OpenOptions};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use tracing::Dispatch;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::fmt::writer::OptionalWriter;

use crate::error::CalError;

/// Tag carried by every log line.
pub const LOG_IDENT: &str = "caltext";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Writer factory that opens the log file for each line and closes it
/// again once the line is written.
#[derive(Debug, Clone)]
pub struct LogFile {
    path: PathBuf,
}

impl LogFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        LogFile { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn open(&self) -> std::io::Result<File> {
        OpenOptions::new().create(true).append(true).open(&self.path)
    }
}

impl<'a> MakeWriter<'a> for LogFile {
    type Writer = OptionalWriter<File>;

    fn make_writer(&'a self) -> Self::Writer {
        // A line that cannot be written is dropped; the path was checked up front
        match self.open() {
            Ok(file) => OptionalWriter::some(file),
            Err(_) => OptionalWriter::none(),
        }
    }
}

/// Verbosity and destination for log output.
#[derive(Debug, Clone)]
pub struct LogContext {
    verbosity: u8,
    log_file: Option<LogFile>,
}

impl LogContext {
    /// Build a context, checking that the log file (if any) can be opened.
    pub fn new(verbosity: u8, log_file: Option<PathBuf>) -> Result<Self, CalError> {
        let log_file = log_file.map(LogFile::new);
        if let Some(file) = &log_file {
            file.open().map_err(|source| CalError::Io {
                path: file.path().to_path_buf(),
                source,
            })?;
        }
        Ok(LogContext {
            verbosity,
            log_file,
        })
    }

    /// Filter level for the CLI verbosity count.
    ///
    /// Mapping:
    /// - 0 (none) -> warn
    /// - 1 (-v)   -> info
    /// - 2 (-vv)  -> debug
    /// - 3+ (-vvv)-> trace
    pub fn level(&self) -> &'static str {
        match self.verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    pub fn log_file(&self) -> Option<&Path> {
        self.log_file.as_ref().map(LogFile::path)
    }

    /// Build the dispatcher for this context.
    ///
    /// `RUST_LOG` overrides the verbosity count if set.
    pub fn dispatch(&self) -> Dispatch {
        let default_filter = format!("{}={}", LOG_IDENT, self.level());
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_timer(ChronoLocal::new(TIMESTAMP_FORMAT.to_string()))
            .with_target(false);

        match &self.log_file {
            Some(file) => Dispatch::new(
                builder
                    .with_ansi(false)
                    .with_writer(file.clone())
                    .finish(),
            ),
            None => Dispatch::new(
                builder
                    .with_ansi(std::io::stderr().is_terminal())
                    .with_writer(std::io::stderr)
                    .finish(),
            ),
        }
    }

    /// Run `f` with this context as the active subscriber, inside the
    /// identifying root span.
    pub fn scope<T>(&self, f: impl FnOnce() -> T) -> T {
        tracing::dispatcher::with_default(&self.dispatch(), || {
            // Error level keeps the tag visible at every verbosity
            let span = tracing::error_span!(LOG_IDENT);
            let _guard = span.enter();
            f()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        let level = |v| LogContext::new(v, None).unwrap().level();
        assert_eq!(level(0), "warn");
        assert_eq!(level(1), "info");
        assert_eq!(level(2), "debug");
        assert_eq!(level(3), "trace");
        assert_eq!(level(9), "trace");
    }

    #[test]
    fn unopenable_log_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("caltext.log");
        let err = LogContext::new(0, Some(path.clone())).unwrap_err();
        assert!(matches!(err, CalError::Io { path: p, .. } if p == path));
    }

    #[test]
    fn scoped_lines_are_tagged_and_appended() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("caltext.log");
        let ctx = LogContext::new(1, Some(path.clone())).unwrap();
        assert_eq!(ctx.log_file(), Some(path.as_path()));

        ctx.scope(|| tracing::info!("first"));
        ctx.scope(|| tracing::info!("second"));
        // Outside the scope nothing is recorded
        tracing::info!("dropped");

        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2, "{text}");
        assert!(lines[0].contains("INFO"));
        assert!(lines[0].contains("caltext: first"));
        assert!(lines[1].ends_with("second"));
        assert!(!text.contains("dropped"));
        // Timestamp prefix, e.g. "2024-01-31 12:00:00"
        assert_eq!(lines[0].as_bytes()[4], b'-');
        assert_eq!(lines[0].as_bytes()[13], b':');
    }

    #[test]
    fn level_filter_applies() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quiet.log");
        let ctx = LogContext::new(0, Some(path.clone())).unwrap();

        ctx.scope(|| {
            tracing::info!("hidden");
            tracing::warn!("shown");
        });

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(!text.contains("hidden"));
        assert!(text.contains("shown"));
    }
}
