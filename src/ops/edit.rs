//! Editing an existing entry in place.

use crate::db::{entries, Database};
use crate::errors::{AppError, AppResult};
use crate::mood::Mood;
use tracing::debug;

/// Updates the given fields of an entry, leaving the rest unchanged.
///
/// The entry's date is fixed at creation and cannot be edited. Fields not
/// supplied keep their current values. A missing id is a normal branch, not
/// an error.
///
/// # Errors
///
/// Returns `AppError::Entry` if the resulting content would be empty, or a
/// database error if the update fails.
pub fn run(
    db: &Database,
    id: i64,
    title: Option<&str>,
    mood: Option<Mood>,
    tags: Option<&str>,
    content: Option<&str>,
) -> AppResult<()> {
    let conn = db.get_conn()?;

    let current = match entries::get_entry_by_id(&conn, id)? {
        Some(entry) => entry,
        None => {
            println!("No entry with id {}.", id);
            return Ok(());
        }
    };

    let title = title.unwrap_or(&current.title);
    let mood = mood.unwrap_or(current.mood);
    let tags = tags.unwrap_or(&current.tags);
    let content = content.unwrap_or(&current.content);

    if content.trim().is_empty() {
        return Err(AppError::Entry(
            "entry content cannot be empty".to_string(),
        ));
    }

    debug!("updating entry id={}", id);
    entries::update_entry(&conn, id, title, content, mood, tags)?;
    println!("Updated entry #{} ({}).", id, current.date);
    Ok(())
}
