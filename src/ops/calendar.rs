//! The calendar page: a month grid of entry dates.

use crate::calendar::{last_day_of_month, month_grid, render_grid};
use crate::db::{entries, Database};
use crate::errors::{AppError, AppResult};
use crate::ops::format_entry;
use chrono::{Datelike, NaiveDate};
use std::collections::HashSet;
use tracing::debug;

/// Shows the month grid, and optionally the entry for a selected date.
///
/// Year and month default to `today`. A selected `date` with no entry is a
/// normal branch: the page suggests writing one for that date.
///
/// # Errors
///
/// Returns `AppError::Entry` for an invalid year/month, or a database error
/// if the date query fails.
pub fn run(
    db: &Database,
    year: Option<i32>,
    month: Option<u32>,
    date: Option<NaiveDate>,
    today: NaiveDate,
) -> AppResult<()> {
    let year = year.unwrap_or_else(|| today.year());
    let month = month.unwrap_or_else(|| today.month());

    let start = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| AppError::Entry(format!("invalid month: {}-{:02}", year, month)))?;
    let end = last_day_of_month(year, month)?;

    let conn = db.get_conn()?;
    let dates = entries::entry_dates_between(&conn, start, end)?;
    debug!("{} dates with entries in {}-{:02}", dates.len(), year, month);

    let marked: HashSet<NaiveDate> = dates.into_iter().collect();
    let grid = month_grid(year, month, &marked)?;
    println!("{}", render_grid(&grid));
    println!("Days marked with * have an entry.");

    if let Some(selected) = date {
        println!();
        match entries::get_entry_by_date(&conn, selected)? {
            Some(entry) => print!("{}", format_entry(&entry, None)),
            None => println!(
                "No entry for {} yet. Create one with `daybook write --date {}`.",
                selected, selected
            ),
        }
    }

    Ok(())
}
