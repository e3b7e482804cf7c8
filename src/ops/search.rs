//! The search page: case-insensitive substring search with content previews.

use crate::constants::CONTENT_PREVIEW_CHARS;
use crate::db::{entries, Database};
use crate::errors::AppResult;
use crate::filter::search_entries;
use crate::ops::format_entry;
use tracing::debug;

/// Searches titles, contents, and tags for `query`, newest first.
///
/// A whitespace-only query matches nothing. Each hit is shown with its
/// content truncated to a preview.
///
/// # Errors
///
/// Returns a database error if the listing query fails.
pub fn run(db: &Database, query: &str) -> AppResult<()> {
    let query = query.trim();
    if query.is_empty() {
        println!("Nothing to search for.");
        return Ok(());
    }

    let conn = db.get_conn()?;
    let all = entries::list_entries(&conn)?;
    let hits = search_entries(&all, query);
    debug!("search for {:?} matched {} of {} entries", query, hits.len(), all.len());

    if hits.is_empty() {
        println!("No entries match \"{}\".", query);
        return Ok(());
    }

    if hits.len() == 1 {
        println!("1 entry matches \"{}\".", query);
    } else {
        println!("{} entries match \"{}\".", hits.len(), query);
    }
    println!();
    for entry in &hits {
        print!("{}", format_entry(entry, Some(CONTENT_PREVIEW_CHARS)));
        println!();
    }

    Ok(())
}
