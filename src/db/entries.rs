//! Entry CRUD operations.
//!
//! This module provides functions for creating, reading, updating, and
//! deleting diary entries. Every function takes a borrowed connection so
//! callers control acquisition and release; none of them retries a failed
//! statement.

use crate::constants::DATE_FORMAT_ISO;
use crate::errors::{AppResult, DatabaseError};
use crate::mood::Mood;
use chrono::NaiveDate;
use rusqlite::{params, Connection, Row};
use tracing::debug;

/// A diary entry as stored in the database.
///
/// `tags` is kept as the raw comma-separated string the user typed; splitting
/// into tokens is the filter engine's concern.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub id: i64,
    pub date: NaiveDate,
    pub title: String,
    pub content: String,
    pub mood: Mood,
    pub tags: String,
}

const ENTRY_COLUMNS: &str = "id, date, title, content, mood, tags";

fn entry_from_row(row: &Row) -> rusqlite::Result<Entry> {
    let date_str: String = row.get(1)?;
    let date = NaiveDate::parse_from_str(&date_str, DATE_FORMAT_ISO).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(1, rusqlite::types::Type::Text, Box::new(e))
    })?;

    let mood_str: String = row.get(4)?;
    let mood = Mood::from_label(&mood_str).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(4, rusqlite::types::Type::Text, Box::new(e))
    })?;

    Ok(Entry {
        id: row.get(0)?,
        date,
        title: row.get(2)?,
        content: row.get(3)?,
        mood,
        tags: row.get::<_, Option<String>>(5)?.unwrap_or_default(),
    })
}

/// Inserts a new diary entry and returns its assigned id.
///
/// Ids are assigned by SQLite's AUTOINCREMENT, so they are unique,
/// monotonically increasing, and never reused after deletion.
///
/// # Errors
///
/// Returns an error if the database operation fails.
pub fn insert_entry(
    conn: &Connection,
    date: NaiveDate,
    title: &str,
    content: &str,
    mood: Mood,
    tags: &str,
) -> AppResult<i64> {
    debug!("Inserting entry for date {}", date);

    conn.execute(
        "INSERT INTO entries (date, title, content, mood, tags) VALUES (?1, ?2, ?3, ?4, ?5)",
        params![date.to_string(), title, content, mood.label(), tags],
    )
    .map_err(DatabaseError::Sqlite)?;

    let entry_id = conn.last_insert_rowid();
    debug!("Entry inserted with id {}", entry_id);
    Ok(entry_id)
}

/// Lists all entries, newest first.
///
/// Order is `date DESC, id DESC` so same-date entries come back in a
/// deterministic order (most recently created first).
///
/// # Errors
///
/// Returns an error if the database operation fails.
pub fn list_entries(conn: &Connection) -> AppResult<Vec<Entry>> {
    let mut stmt = conn
        .prepare(&format!(
            "SELECT {ENTRY_COLUMNS} FROM entries ORDER BY date DESC, id DESC"
        ))
        .map_err(DatabaseError::Sqlite)?;

    let entries = stmt
        .query_map([], entry_from_row)
        .map_err(DatabaseError::Sqlite)?
        .collect::<Result<Vec<_>, _>>()
        .map_err(DatabaseError::Sqlite)?;

    debug!("Listed {} entries", entries.len());
    Ok(entries)
}

/// Retrieves the first entry for a date, or `None`.
///
/// Storage does not enforce one entry per date; when several share the date,
/// the earliest-created row wins. Callers must treat absence as a normal
/// branch, not an error.
///
/// # Errors
///
/// Returns an error if the database operation fails.
pub fn get_entry_by_date(conn: &Connection, date: NaiveDate) -> AppResult<Option<Entry>> {
    debug!("Getting entry for date {}", date);

    let result = conn.query_row(
        &format!("SELECT {ENTRY_COLUMNS} FROM entries WHERE date = ?1 ORDER BY id LIMIT 1"),
        params![date.to_string()],
        entry_from_row,
    );

    match result {
        Ok(entry) => Ok(Some(entry)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(DatabaseError::Sqlite(e).into()),
    }
}

/// Retrieves an entry by id, or `None`.
///
/// # Errors
///
/// Returns an error if the database operation fails.
pub fn get_entry_by_id(conn: &Connection, entry_id: i64) -> AppResult<Option<Entry>> {
    debug!("Getting entry with id {}", entry_id);

    let result = conn.query_row(
        &format!("SELECT {ENTRY_COLUMNS} FROM entries WHERE id = ?1"),
        params![entry_id],
        entry_from_row,
    );

    match result {
        Ok(entry) => Ok(Some(entry)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(DatabaseError::Sqlite(e).into()),
    }
}

/// Overwrites all mutable fields of an entry.
///
/// The entry's `date` is deliberately not part of this operation: editing an
/// entry never changes which date it is filed under, no matter what date the
/// edit form showed.
///
/// # Errors
///
/// Returns `DatabaseError::NotFound` if no entry has the given id, or an
/// error if the database operation fails.
pub fn update_entry(
    conn: &Connection,
    entry_id: i64,
    title: &str,
    content: &str,
    mood: Mood,
    tags: &str,
) -> AppResult<()> {
    debug!("Updating entry {}", entry_id);

    let rows_affected = conn
        .execute(
            "UPDATE entries SET title = ?1, content = ?2, mood = ?3, tags = ?4 WHERE id = ?5",
            params![title, content, mood.label(), tags, entry_id],
        )
        .map_err(DatabaseError::Sqlite)?;

    if rows_affected == 0 {
        return Err(
            DatabaseError::NotFound(format!("Entry with id {} not found", entry_id)).into(),
        );
    }

    Ok(())
}

/// Deletes an entry by id.
///
/// There are no child entities, so deletion has no cascading effects.
///
/// # Errors
///
/// Returns `DatabaseError::NotFound` if no entry has the given id, or an
/// error if the database operation fails.
pub fn delete_entry(conn: &Connection, entry_id: i64) -> AppResult<()> {
    debug!("Deleting entry {}", entry_id);

    let rows_affected = conn
        .execute("DELETE FROM entries WHERE id = ?1", params![entry_id])
        .map_err(DatabaseError::Sqlite)?;

    if rows_affected == 0 {
        return Err(
            DatabaseError::NotFound(format!("Entry with id {} not found", entry_id)).into(),
        );
    }

    Ok(())
}

/// Returns the distinct dates carrying at least one entry in the inclusive
/// range `start..=end`.
///
/// This feeds the calendar view, which only needs presence per day.
///
/// # Errors
///
/// Returns an error if the database operation fails.
pub fn entry_dates_between(
    conn: &Connection,
    start: NaiveDate,
    end: NaiveDate,
) -> AppResult<Vec<NaiveDate>> {
    debug!("Listing entry dates between {} and {}", start, end);

    let mut stmt = conn
        .prepare("SELECT DISTINCT date FROM entries WHERE date BETWEEN ?1 AND ?2 ORDER BY date")
        .map_err(DatabaseError::Sqlite)?;

    let dates = stmt
        .query_map(params![start.to_string(), end.to_string()], |row| {
            let date_str: String = row.get(0)?;
            NaiveDate::parse_from_str(&date_str, DATE_FORMAT_ISO).map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(
                    0,
                    rusqlite::types::Type::Text,
                    Box::new(e),
                )
            })
        })
        .map_err(DatabaseError::Sqlite)?
        .collect::<Result<Vec<_>, _>>()
        .map_err(DatabaseError::Sqlite)?;

    Ok(dates)
}
