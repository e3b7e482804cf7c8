//! Month-grid calendar rendering.
//!
//! A [`MonthGrid`] is a pure value: the same year, month, and set of
//! dates-with-entries always produce the same grid, and building one never
//! touches storage. The grid only encodes which days carry at least one
//! entry; it holds no entry content.

use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};
use std::collections::HashSet;

/// One cell in the month grid.
///
/// Leading and trailing cells outside the month are blank: `day` is `0` and
/// `date` is `None`, matching the month-matrix convention of using zero as
/// the placeholder day number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    /// Day of month, or `0` for a blank cell.
    pub day: u32,
    /// The fully qualified date this cell navigates to, if not blank.
    pub date: Option<NaiveDate>,
    /// Whether at least one entry exists for this date.
    pub has_entry: bool,
}

impl DayCell {
    const BLANK: DayCell = DayCell {
        day: 0,
        date: None,
        has_entry: false,
    };

    /// True for the filler cells before the 1st and after the last day.
    pub fn is_blank(&self) -> bool {
        self.day == 0
    }
}

/// A Monday-first week-row grid for one month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    /// Week rows, each Monday through Sunday.
    pub weeks: Vec<[DayCell; 7]>,
}

/// Builds the month grid for `(year, month)`, marking the given dates.
///
/// # Errors
///
/// Returns `AppError::Entry` if `month` is not 1-12 or the year is outside
/// chrono's representable range.
pub fn month_grid(
    year: i32,
    month: u32,
    dates_with_entries: &HashSet<NaiveDate>,
) -> AppResult<MonthGrid> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| AppError::Entry(format!("invalid month: {}-{:02}", year, month)))?;

    let leading = first.weekday().num_days_from_monday() as usize;
    let mut cells: Vec<DayCell> = vec![DayCell::BLANK; leading];

    let mut date = first;
    loop {
        cells.push(DayCell {
            day: date.day(),
            date: Some(date),
            has_entry: dates_with_entries.contains(&date),
        });
        match date.succ_opt() {
            Some(next) if next.month() == month => date = next,
            _ => break,
        }
    }

    while cells.len() % 7 != 0 {
        cells.push(DayCell::BLANK);
    }

    let mut weeks = Vec::with_capacity(cells.len() / 7);
    for chunk in cells.chunks_exact(7) {
        let mut week = [DayCell::BLANK; 7];
        week.copy_from_slice(chunk);
        weeks.push(week);
    }

    Ok(MonthGrid { year, month, weeks })
}

/// Last day of the given month, for range queries feeding the grid.
pub fn last_day_of_month(year: i32, month: u32) -> AppResult<NaiveDate> {
    let first_of_next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };

    first_of_next
        .and_then(|d| d.pred_opt())
        .ok_or_else(|| AppError::Entry(format!("invalid month: {}-{:02}", year, month)))
}

/// Renders the grid as text, marking entry days with `*`.
///
/// Presentation only; the grid itself stays pure and data-only.
pub fn render_grid(grid: &MonthGrid) -> String {
    let mut out = String::new();
    out.push_str(&format!("     {:>4}-{:02}\n", grid.year, grid.month));
    out.push_str(" Mon  Tue  Wed  Thu  Fri  Sat  Sun\n");

    for week in &grid.weeks {
        for cell in week {
            if cell.is_blank() {
                out.push_str("     ");
            } else if cell.has_entry {
                out.push_str(&format!(" {:>2}* ", cell.day));
            } else {
                out.push_str(&format!(" {:>2}  ", cell.day));
            }
        }
        out.push('\n');
    }

    out
}
