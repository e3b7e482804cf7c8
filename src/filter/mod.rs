//! In-memory filtering and search over the full entry set.
//!
//! Everything here is a pure function over `&[Entry]`: filtering by date
//! range, mood set, and tag set, plus case-insensitive substring search.
//! There is no index and nothing is cached between calls; at personal-diary
//! scale a full rescan per interaction is the whole design.

use crate::db::entries::Entry;
use crate::mood::Mood;
use chrono::NaiveDate;
use std::collections::BTreeSet;

/// Filter parameters for browsing entries.
///
/// `moods` defaults to all eight known moods (the mood selector's default),
/// and `tags` to the empty set, meaning "no tag filter".
#[derive(Debug, Clone)]
pub struct FilterParams {
    /// Earliest date to retain, inclusive.
    pub start: NaiveDate,
    /// Latest date to retain, inclusive.
    pub end: NaiveDate,
    /// Moods to retain; an entry whose mood is not in this set is dropped.
    pub moods: Vec<Mood>,
    /// Selected tags; when non-empty, only entries carrying at least one of
    /// these tags are retained.
    pub tags: Vec<String>,
}

impl FilterParams {
    /// Filter over a date range with all moods selected and no tag filter.
    pub fn for_range(start: NaiveDate, end: NaiveDate) -> Self {
        FilterParams {
            start,
            end,
            moods: Mood::ALL.to_vec(),
            tags: Vec::new(),
        }
    }
}

/// Splits a raw tag string into trimmed, non-empty tokens.
pub fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// The set of all tags across the given entries, sorted.
///
/// Recomputed on every call; this is what the browse page offers as filter
/// options.
pub fn tag_universe(entries: &[Entry]) -> BTreeSet<String> {
    entries
        .iter()
        .flat_map(|entry| split_tags(&entry.tags))
        .collect()
}

/// Applies date-range, mood, and tag filters to the entries, preserving
/// their order.
///
/// An entry with no tags is excluded whenever the tag filter is non-empty;
/// it can never intersect a non-empty selection.
pub fn filter_entries(entries: &[Entry], params: &FilterParams) -> Vec<Entry> {
    entries
        .iter()
        .filter(|entry| entry.date >= params.start && entry.date <= params.end)
        .filter(|entry| params.moods.contains(&entry.mood))
        .filter(|entry| {
            if params.tags.is_empty() {
                return true;
            }
            split_tags(&entry.tags)
                .iter()
                .any(|tag| params.tags.contains(tag))
        })
        .cloned()
        .collect()
}

/// Case-insensitive substring search across title, content, and the raw tag
/// string.
///
/// There is no ranking; results keep the order of the input listing.
pub fn search_entries(entries: &[Entry], query: &str) -> Vec<Entry> {
    let needle = query.to_lowercase();
    entries
        .iter()
        .filter(|entry| {
            entry.title.to_lowercase().contains(&needle)
                || entry.content.to_lowercase().contains(&needle)
                || entry.tags.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}
