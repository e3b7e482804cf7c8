//! Integration tests for the entry store.
//!
//! These tests exercise the full database layer through `Database`: the
//! write/read round-trip, in-place edits, deletion, and the date listing
//! that drives the calendar.

use chrono::NaiveDate;
use daybook::db::{entries, Database};
use daybook::filter::{filter_entries, search_entries, FilterParams};
use daybook::mood::Mood;
use tempfile::TempDir;

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid date")
}

fn setup_database(temp_dir: &TempDir) -> Database {
    let db = Database::open(&temp_dir.path().join("daybook.db")).expect("open database");
    db.initialize_schema().expect("initialize schema");
    db
}

#[test]
fn test_entry_round_trip() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let db = setup_database(&temp_dir);
    let conn = db.get_conn().expect("get connection");

    let id = entries::insert_entry(
        &conn,
        date("2025-03-08"),
        "Market day",
        "Bought flowers and bread.",
        Mood::Happy,
        "travel, outdoors",
    )
    .expect("insert entry");

    let entry = entries::get_entry_by_id(&conn, id)
        .expect("get entry")
        .expect("entry exists");
    assert_eq!(entry.date, date("2025-03-08"));
    assert_eq!(entry.title, "Market day");
    assert_eq!(entry.content, "Bought flowers and bread.");
    assert_eq!(entry.mood, Mood::Happy);
    assert_eq!(entry.tags, "travel, outdoors");

    // The same entry comes back through the date lookup.
    let by_date = entries::get_entry_by_date(&conn, date("2025-03-08"))
        .expect("get by date")
        .expect("entry exists");
    assert_eq!(by_date.id, id);
}

#[test]
fn test_update_preserves_id_and_date() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let db = setup_database(&temp_dir);
    let conn = db.get_conn().expect("get connection");

    let id = entries::insert_entry(
        &conn,
        date("2025-03-08"),
        "Draft",
        "First version.",
        Mood::Pensive,
        "",
    )
    .expect("insert entry");

    entries::update_entry(&conn, id, "Final", "Second version.", Mood::Calm, "notes")
        .expect("update entry");

    let entry = entries::get_entry_by_id(&conn, id)
        .expect("get entry")
        .expect("entry exists");
    assert_eq!(entry.id, id);
    assert_eq!(entry.date, date("2025-03-08"));
    assert_eq!(entry.title, "Final");
    assert_eq!(entry.content, "Second version.");
    assert_eq!(entry.mood, Mood::Calm);
    assert_eq!(entry.tags, "notes");
}

#[test]
fn test_delete_is_terminal() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let db = setup_database(&temp_dir);
    let conn = db.get_conn().expect("get connection");

    let id = entries::insert_entry(&conn, date("2025-03-08"), "T", "C", Mood::Sad, "")
        .expect("insert entry");

    entries::delete_entry(&conn, id).expect("delete entry");
    assert!(entries::get_entry_by_id(&conn, id)
        .expect("get entry")
        .is_none());

    // A second delete of the same id is a not-found error.
    assert!(entries::delete_entry(&conn, id).is_err());
    // An update of the deleted id is too.
    assert!(entries::update_entry(&conn, id, "T", "C", Mood::Sad, "").is_err());
}

#[test]
fn test_listing_is_newest_first() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let db = setup_database(&temp_dir);
    let conn = db.get_conn().expect("get connection");

    entries::insert_entry(&conn, date("2025-01-10"), "old", "c", Mood::Calm, "")
        .expect("insert entry");
    entries::insert_entry(&conn, date("2025-03-05"), "new", "c", Mood::Calm, "")
        .expect("insert entry");
    entries::insert_entry(&conn, date("2025-02-01"), "mid", "c", Mood::Calm, "")
        .expect("insert entry");

    let all = entries::list_entries(&conn).expect("list entries");
    let titles: Vec<&str> = all.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, vec!["new", "mid", "old"]);
}

#[test]
fn test_same_date_entries_break_ties_by_id() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let db = setup_database(&temp_dir);
    let conn = db.get_conn().expect("get connection");

    let first = entries::insert_entry(&conn, date("2025-03-08"), "first", "c", Mood::Calm, "")
        .expect("insert entry");
    let second = entries::insert_entry(&conn, date("2025-03-08"), "second", "c", Mood::Calm, "")
        .expect("insert entry");
    assert!(second > first);

    // Later insert wins the tie in the listing.
    let all = entries::list_entries(&conn).expect("list entries");
    assert_eq!(all[0].id, second);
    assert_eq!(all[1].id, first);

    // But the date lookup returns the earlier one.
    let by_date = entries::get_entry_by_date(&conn, date("2025-03-08"))
        .expect("get by date")
        .expect("entry exists");
    assert_eq!(by_date.id, first);
}

#[test]
fn test_entry_dates_between_is_distinct_and_bounded() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let db = setup_database(&temp_dir);
    let conn = db.get_conn().expect("get connection");

    for d in ["2025-02-03", "2025-02-14", "2025-02-14", "2025-03-01"] {
        entries::insert_entry(&conn, date(d), "t", "c", Mood::Calm, "").expect("insert entry");
    }

    let dates = entries::entry_dates_between(&conn, date("2025-02-01"), date("2025-02-28"))
        .expect("list dates");
    assert_eq!(dates, vec![date("2025-02-03"), date("2025-02-14")]);
}

#[test]
fn test_create_then_lookup_filter_and_search() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let db = setup_database(&temp_dir);
    let conn = db.get_conn().expect("get connection");

    entries::insert_entry(
        &conn,
        date("2025-06-01"),
        "Trip",
        "Went hiking",
        Mood::Happy,
        "travel, outdoors",
    )
    .expect("insert entry");

    let found = entries::get_entry_by_date(&conn, date("2025-06-01"))
        .expect("get by date")
        .expect("entry exists");
    assert_eq!(found.title, "Trip");

    let all = entries::list_entries(&conn).expect("list entries");
    let mut params = FilterParams::for_range(date("2025-01-01"), date("2025-12-31"));

    params.tags = vec!["travel".to_string()];
    assert_eq!(filter_entries(&all, &params).len(), 1);

    params.tags = vec!["work".to_string()];
    assert!(filter_entries(&all, &params).is_empty());

    assert_eq!(search_entries(&all, "hiking").len(), 1);
}

#[test]
fn test_store_persists_across_reopen() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let db_path = temp_dir.path().join("daybook.db");

    {
        let db = Database::open(&db_path).expect("open database");
        db.initialize_schema().expect("initialize schema");
        let conn = db.get_conn().expect("get connection");
        entries::insert_entry(&conn, date("2025-03-08"), "kept", "c", Mood::Happy, "")
            .expect("insert entry");
    }

    let db = Database::open(&db_path).expect("reopen database");
    db.initialize_schema().expect("reinitialize schema");
    let conn = db.get_conn().expect("get connection");
    let all = entries::list_entries(&conn).expect("list entries");
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].title, "kept");
}
