//! Calendar text rendering: fixed-width columns with inline month labels.

use std::fmt::Write;

use chrono::{Datelike, NaiveDate, Weekday};
use tracing::debug;

use crate::calendar::{day_sequence, group_weeks};
use crate::error::CalError;
use crate::types::{
    COLUMN_STEP, DAY_END, HEADER, MONTH_ABBREVS, MONTH_LABEL_GAP, ROW_INDENT, SATURDAY_END,
    WeekRow, YearMonth,
};

/// Render the calendar for the inclusive month range `start..=stop`.
///
/// Fails before producing any text if the range is reversed or a month is
/// out of bounds.
pub fn render_calendar(start: YearMonth, stop: YearMonth) -> Result<String, CalError> {
    let days = day_sequence(start, stop)?;
    let rows = group_weeks(&days);
    let text = render_lines(&rows);
    debug!(rows = rows.len(), bytes = text.len(), "rendered calendar");
    Ok(text)
}

/// Same as [`render_calendar`], taking six-digit `YYYYMM` integers.
pub fn render_calendar_yyyymm(start: u32, stop: u32) -> Result<String, CalError> {
    render_calendar(YearMonth::from_yyyymm(start)?, YearMonth::from_yyyymm(stop)?)
}

/// The weekday header line.
pub fn format_header() -> &'static str {
    HEADER
}

/// English three-letter month abbreviation, `None` outside 1-12.
pub fn month_abbrev(month: u32) -> Option<&'static str> {
    let idx = usize::try_from(month.checked_sub(1)?).ok()?;
    MONTH_ABBREVS.get(idx).copied()
}

/// Leading offset of a weekday column, Sunday first.
pub fn weekday_offset(weekday: Weekday) -> usize {
    weekday.num_days_from_sunday() as usize * COLUMN_STEP
}

/// Render grouped rows below the header.
///
/// A month start opens a new line with its label; any other row-initial day
/// gets a fixed indent. Saturdays close the line.
pub fn render_lines(rows: &[WeekRow]) -> String {
    let mut out = String::with_capacity(HEADER.len() + rows.len() * 40);
    out.push_str(HEADER);

    for row in rows {
        let row_first = row.first();
        for &day in row.days() {
            if day.day() == 1 {
                out.push('\n');
                // chrono months are always 1-12
                out.push_str(month_abbrev(day.month()).unwrap_or_default());
                push_spaces(&mut out, MONTH_LABEL_GAP + weekday_offset(day.weekday()));
            } else if Some(day) == row_first {
                // Constant indent, not derived from the weekday column
                push_spaces(&mut out, ROW_INDENT);
            }
            push_day(&mut out, day);
        }
    }

    out
}

fn push_spaces(out: &mut String, count: usize) {
    out.extend(std::iter::repeat_n(' ', count));
}

fn push_day(out: &mut String, day: NaiveDate) {
    // Writing to a String cannot fail
    let _ = write!(out, "{:>2}", day.day());
    if day.weekday() == Weekday::Sat {
        out.push_str(SATURDAY_END);
    } else {
        out.push_str(DAY_END);
    }
}
