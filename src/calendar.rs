//! Calendar calculation logic: month arithmetic, day enumeration and week grouping.

use std::str::FromStr;

use chrono::{Datelike, NaiveDate, Weekday};
use tracing::{debug, trace};

use crate::error::CalError;
use crate::types::{MAX_YEAR, MIN_YEAR, WeekRow, YearMonth};

impl YearMonth {
    /// Build a validated year-month.
    pub fn new(year: i32, month: u32) -> Result<Self, CalError> {
        let ym = YearMonth { year, month };
        ym.validate()?;
        Ok(ym)
    }

    /// Build from the six-digit integer form, e.g. `202403` for March 2024.
    pub fn from_yyyymm(value: u32) -> Result<Self, CalError> {
        // u32::MAX / 100 fits in i32
        YearMonth::new((value / 100) as i32, value % 100)
    }

    /// Check month and year bounds.
    pub fn validate(&self) -> Result<(), CalError> {
        if !(1..=12).contains(&self.month) {
            return Err(CalError::InvalidDate(format!(
                "month {} out of range 1-12",
                self.month
            )));
        }
        if !(MIN_YEAR..=MAX_YEAR).contains(&self.year) {
            return Err(CalError::InvalidDate(format!(
                "year {} out of range {}-{}",
                self.year, MIN_YEAR, MAX_YEAR
            )));
        }
        Ok(())
    }

    /// The 1st of this month.
    pub fn first_day(&self) -> Result<NaiveDate, CalError> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .ok_or_else(|| CalError::InvalidDate(format!("no such month: {}", self)))
    }

    /// The following month, rolling over the year after December.
    pub fn next(&self) -> YearMonth {
        if self.month >= 12 {
            YearMonth {
                year: self.year + 1,
                month: 1,
            }
        } else {
            YearMonth {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// Number of days in this month.
    pub fn days(&self) -> Result<u32, CalError> {
        let first = self.first_day()?;
        let after = self.next().first_day()?;
        let days = after.signed_duration_since(first).num_days();
        u32::try_from(days).map_err(|_| CalError::InvalidDate(format!("no such month: {}", self)))
    }
}

impl From<NaiveDate> for YearMonth {
    fn from(date: NaiveDate) -> Self {
        YearMonth {
            year: date.year(),
            month: date.month(),
        }
    }
}

/// Parse the `YYYYMM` form: exactly six ASCII digits.
impl FromStr for YearMonth {
    type Err = CalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.len() != 6 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CalError::InvalidDate(format!(
                "expected YYYYMM, got {:?}",
                s
            )));
        }
        let year = s[..4]
            .parse::<i32>()
            .map_err(|_| CalError::InvalidDate(format!("invalid year in {:?}", s)))?;
        let month = s[4..]
            .parse::<u32>()
            .map_err(|_| CalError::InvalidDate(format!("invalid month in {:?}", s)))?;
        YearMonth::new(year, month)
    }
}

/// Every date from the 1st of `start` through the last day of `stop`.
pub fn day_sequence(start: YearMonth, stop: YearMonth) -> Result<Vec<NaiveDate>, CalError> {
    start.validate()?;
    stop.validate()?;
    if stop < start {
        return Err(CalError::InvalidRange { start, stop });
    }

    let begin = start.first_day()?;
    // Exclusive upper bound
    let end = stop.next().first_day()?;

    let days: Vec<NaiveDate> = begin.iter_days().take_while(|d| *d < end).collect();
    debug!(%start, %stop, days = days.len(), "enumerated days");
    Ok(days)
}

/// Split a day sequence into Sunday-to-Saturday rows.
///
/// A new row opens on every Sunday. The first row is short when the
/// sequence starts mid-week, the last one when it ends mid-week.
pub fn group_weeks(days: &[NaiveDate]) -> Vec<WeekRow> {
    let mut rows = Vec::with_capacity(days.len() / 7 + 2);
    let mut current = Vec::with_capacity(7);

    for &day in days {
        if day.weekday() == Weekday::Sun && !current.is_empty() {
            rows.push(WeekRow(std::mem::take(&mut current)));
        }
        current.push(day);
    }
    if !current.is_empty() {
        rows.push(WeekRow(current));
    }

    trace!(rows = rows.len(), "grouped weeks");
    rows
}
