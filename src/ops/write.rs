//! The write page: create a new diary entry.

use crate::db::{entries, Database};
use crate::errors::{AppError, AppResult};
use crate::mood::Mood;
use chrono::NaiveDate;
use tracing::info;

/// Creates a new entry.
///
/// `date` is the navigation parameter: when absent the entry is filed under
/// `today`. Empty or whitespace-only content is rejected before the store is
/// reached.
///
/// # Errors
///
/// Returns `AppError::Entry` for empty content, or a database error if the
/// insert fails.
pub fn run(
    db: &Database,
    date: Option<NaiveDate>,
    today: NaiveDate,
    title: &str,
    mood: Mood,
    tags: &str,
    content: &str,
) -> AppResult<()> {
    if content.trim().is_empty() {
        return Err(AppError::Entry(
            "Diary content cannot be empty".to_string(),
        ));
    }

    let date = date.unwrap_or(today);

    let conn = db.get_conn()?;
    let id = entries::insert_entry(&conn, date, title, content, mood, tags)?;

    info!("Created entry {} for {}", id, date);
    println!("Saved entry #{} for {}.", id, date);
    Ok(())
}
