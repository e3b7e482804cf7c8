//! Deleting an entry by id.

use crate::db::{entries, Database};
use crate::errors::{AppError, AppResult, DatabaseError};
use tracing::debug;

/// Deletes the entry with the given id.
///
/// A missing id is reported to the user rather than treated as a failure.
///
/// # Errors
///
/// Returns a database error if the delete fails for any reason other than
/// the id not existing.
pub fn run(db: &Database, id: i64) -> AppResult<()> {
    let conn = db.get_conn()?;
    debug!("deleting entry id={}", id);
    match entries::delete_entry(&conn, id) {
        Ok(()) => {
            println!("Deleted entry #{}.", id);
            Ok(())
        }
        Err(AppError::Database(DatabaseError::NotFound(_))) => {
            println!("No entry with id {}.", id);
            Ok(())
        }
        Err(e) => Err(e),
    }
}
