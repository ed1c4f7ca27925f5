//! Plaintext calendar renderer for an inclusive range of months.
//!
//! Features:
//! - Sunday-first fixed-width columns
//! - Inline three-letter month labels on the line holding each 1st
//! - Proleptic Gregorian dates via chrono
//! - CLI collaborators: PID file and scoped file/stderr logging

pub mod args;
pub mod calendar;
pub mod error;
pub mod formatter;
pub mod logging;
pub mod pidfile;
pub mod types;

pub use error::CalError;
pub use formatter::{render_calendar, render_calendar_yyyymm};
pub use types::{WeekRow, YearMonth};
