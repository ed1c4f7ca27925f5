//! Type definitions and constants for calendar formatting.

use std::fmt;

use chrono::NaiveDate;

/// A calendar month without a day component.
///
/// Field order matters: the derived ordering compares year, then month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}{:02}", self.year, self.month)
    }
}

/// Consecutive dates belonging to one Sunday-to-Saturday week.
///
/// Only the first row of a calendar can be short at the front; only the
/// last one can be short at the back. A row is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekRow(pub(crate) Vec<NaiveDate>);

impl WeekRow {
    pub fn days(&self) -> &[NaiveDate] {
        &self.0
    }

    pub fn first(&self) -> Option<NaiveDate> {
        self.0.first().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<NaiveDate>> for WeekRow {
    fn from(days: Vec<NaiveDate>) -> Self {
        WeekRow(days)
    }
}

// Accepted year range for YYYYMM input
pub const MIN_YEAR: i32 = 1;
pub const MAX_YEAR: i32 = 9999;

// Constants for calendar formatting
pub const HEADER: &str = "        Su Mo Tu We Th Fr Sa";
pub const COLUMN_STEP: usize = 3;
pub const MONTH_LABEL_GAP: usize = 5;
pub const ROW_INDENT: usize = 8;
pub const SATURDAY_END: &str = "    \n";
pub const DAY_END: &str = " ";

pub const MONTH_ABBREVS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];
