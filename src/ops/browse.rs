//! The browse page: list entries with date, mood, and tag filters.

use crate::db::{entries, Database};
use crate::errors::AppResult;
use crate::filter::{self, FilterParams};
use crate::mood::Mood;
use crate::ops::format_entry;
use chrono::NaiveDate;
use tracing::debug;

/// Lists entries newest-first, filtered by date range, mood set, and tag set.
///
/// The date range defaults to the span of stored entries and the mood set to
/// all eight moods, so a bare `browse` shows everything. The tag universe is
/// recomputed from the full listing on every call and offered as context.
///
/// # Errors
///
/// Returns a database error if the listing fails.
pub fn run(
    db: &Database,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    moods: Vec<Mood>,
    tags: Vec<String>,
) -> AppResult<()> {
    let conn = db.get_conn()?;
    let all = entries::list_entries(&conn)?;
    drop(conn);

    if all.is_empty() {
        println!("No entries yet. Write your first one with `daybook write`.");
        return Ok(());
    }

    // Listing is date-descending, so the range defaults fall out of the ends.
    let start = from.unwrap_or_else(|| all[all.len() - 1].date);
    let end = to.unwrap_or_else(|| all[0].date);
    let moods = if moods.is_empty() {
        Mood::ALL.to_vec()
    } else {
        moods
    };

    let params = FilterParams {
        start,
        end,
        moods,
        tags,
    };
    debug!("Browsing entries with filter {:?}", params);

    let universe = filter::tag_universe(&all);
    if !universe.is_empty() {
        let known: Vec<&str> = universe.iter().map(String::as_str).collect();
        println!("Known tags: {}", known.join(", "));
    }

    let hits = filter::filter_entries(&all, &params);
    if hits.is_empty() {
        println!("No entries matched the filters.");
        return Ok(());
    }

    let noun = if hits.len() == 1 { "entry" } else { "entries" };
    println!("Found {} {}.\n", hits.len(), noun);
    for entry in &hits {
        print!("{}", format_entry(entry, None));
        println!();
    }

    Ok(())
}
