//! Page operations: the presentation layer over the entry store.
//!
//! Each submodule implements one page of the diary {write, browse, calendar,
//! search, about} or one of the per-entry actions {edit, delete}. Every
//! operation is a full synchronous pass: acquire a connection, recompute the
//! page, print, release. Nothing is cached between invocations.

pub mod about;
pub mod browse;
pub mod calendar;
pub mod delete;
pub mod edit;
pub mod search;
pub mod write;

use crate::db::entries::Entry;
use crate::filter::split_tags;

/// Formats one entry for terminal display.
///
/// With `preview = Some(n)` the content is truncated to `n` characters with
/// an ellipsis, the way search results are shown.
pub fn format_entry(entry: &Entry, preview: Option<usize>) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "#{}  {}  {}\n",
        entry.id,
        entry.date,
        entry.mood.label()
    ));

    if !entry.title.is_empty() {
        out.push_str(&format!("  {}\n", entry.title));
    }

    let tags = split_tags(&entry.tags);
    if !tags.is_empty() {
        out.push_str(&format!("  [{}]\n", tags.join("] [")));
    }

    let content = match preview {
        Some(limit) if entry.content.chars().count() > limit => {
            let truncated: String = entry.content.chars().take(limit).collect();
            format!("{}...", truncated)
        }
        _ => entry.content.clone(),
    };
    for line in content.lines() {
        out.push_str(&format!("  {}\n", line));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mood::Mood;
    use chrono::NaiveDate;

    fn entry() -> Entry {
        Entry {
            id: 7,
            date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            title: "Trip".to_string(),
            content: "Went hiking".to_string(),
            mood: Mood::Happy,
            tags: "travel, outdoors".to_string(),
        }
    }

    #[test]
    fn test_format_entry_full() {
        let text = format_entry(&entry(), None);

        assert!(text.contains("#7"));
        assert!(text.contains("2025-06-01"));
        assert!(text.contains("😊 开心"));
        assert!(text.contains("Trip"));
        assert!(text.contains("[travel] [outdoors]"));
        assert!(text.contains("Went hiking"));
        assert!(!text.contains("..."));
    }

    #[test]
    fn test_format_entry_preview_truncates() {
        let mut long = entry();
        long.content = "x".repeat(400);

        let text = format_entry(&long, Some(300));
        assert!(text.contains(&"x".repeat(300)));
        assert!(!text.contains(&"x".repeat(301)));
        assert!(text.contains("..."));
    }

    #[test]
    fn test_format_entry_short_content_not_truncated() {
        let text = format_entry(&entry(), Some(300));
        assert!(text.contains("Went hiking"));
        assert!(!text.contains("..."));
    }

    #[test]
    fn test_format_entry_omits_empty_title_and_tags() {
        let mut bare = entry();
        bare.title = String::new();
        bare.tags = String::new();

        let text = format_entry(&bare, None);
        assert!(!text.contains("Trip"));
        assert!(!text.contains('['));
    }
}
