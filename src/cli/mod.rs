use crate::mood::Mood;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// A personal diary with moods, tags, and a calendar view
#[derive(Parser, Debug)]
#[clap(name = "daybook", about = "A personal diary with moods, tags, and a calendar view")]
#[clap(author, version, long_about = None)]
pub struct CliArgs {
    #[clap(subcommand)]
    pub command: Command,

    /// Print verbose output
    #[clap(short = 'v', long, global = true)]
    pub verbose: bool,
}

/// One subcommand per page, plus the per-entry edit and delete actions.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write a new diary entry
    Write {
        /// Date to file the entry under (YYYY-MM-DD, defaults to today)
        #[clap(short = 'd', long)]
        date: Option<NaiveDate>,

        /// Entry title
        #[clap(short = 't', long, default_value = "")]
        title: String,

        /// Mood for the entry
        #[clap(short = 'm', long, value_enum)]
        mood: Mood,

        /// Comma-separated tags (e.g. "travel, birthday")
        #[clap(long, default_value = "")]
        tags: String,

        /// The diary text itself; must not be empty
        #[clap(short = 'c', long)]
        content: String,
    },

    /// Browse entries, optionally filtered by date range, mood, and tag
    Browse {
        /// Start of the date range (defaults to the oldest entry)
        #[clap(long)]
        from: Option<NaiveDate>,

        /// End of the date range (defaults to the newest entry)
        #[clap(long)]
        to: Option<NaiveDate>,

        /// Only show entries with these moods (repeatable; default: all)
        #[clap(long = "mood", value_enum)]
        moods: Vec<Mood>,

        /// Only show entries carrying one of these tags (repeatable)
        #[clap(long = "tag")]
        tags: Vec<String>,
    },

    /// Show a month calendar marking the days that have entries
    Calendar {
        /// Year to show (defaults to the current year)
        #[clap(short = 'y', long)]
        year: Option<i32>,

        /// Month to show, 1-12 (defaults to the current month)
        #[clap(short = 'm', long)]
        month: Option<u32>,

        /// Also show the entry for this date below the grid
        #[clap(short = 'd', long)]
        date: Option<NaiveDate>,
    },

    /// Search entries by keyword across title, content, and tags
    Search {
        /// Keyword to look for (case-insensitive)
        query: String,
    },

    /// About daybook
    About,

    /// Edit an existing entry; omitted fields keep their current values
    Edit {
        /// Id of the entry to edit
        #[clap(long)]
        id: i64,

        /// New title
        #[clap(short = 't', long)]
        title: Option<String>,

        /// New mood
        #[clap(short = 'm', long, value_enum)]
        mood: Option<Mood>,

        /// New comma-separated tags
        #[clap(long)]
        tags: Option<String>,

        /// New diary text; must not be empty
        #[clap(short = 'c', long)]
        content: Option<String>,
    },

    /// Delete an entry by id
    Delete {
        /// Id of the entry to delete
        #[clap(long)]
        id: i64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_args() {
        let args = CliArgs::parse_from(vec![
            "daybook", "write", "--date", "2025-06-01", "--title", "Trip", "--mood", "happy",
            "--tags", "travel, outdoors", "--content", "Went hiking",
        ]);

        match args.command {
            Command::Write {
                date,
                title,
                mood,
                tags,
                content,
            } => {
                assert_eq!(date, NaiveDate::from_ymd_opt(2025, 6, 1));
                assert_eq!(title, "Trip");
                assert_eq!(mood, Mood::Happy);
                assert_eq!(tags, "travel, outdoors");
                assert_eq!(content, "Went hiking");
            }
            _ => panic!("Expected Write command"),
        }
    }

    #[test]
    fn test_write_defaults() {
        let args =
            CliArgs::parse_from(vec!["daybook", "write", "--mood", "calm", "--content", "x"]);

        match args.command {
            Command::Write {
                date, title, tags, ..
            } => {
                assert!(date.is_none());
                assert_eq!(title, "");
                assert_eq!(tags, "");
            }
            _ => panic!("Expected Write command"),
        }
    }

    #[test]
    fn test_write_rejects_invalid_date() {
        let result = CliArgs::try_parse_from(vec![
            "daybook", "write", "--date", "2025-13-45", "--mood", "happy", "--content", "x",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_write_rejects_unknown_mood() {
        let result = CliArgs::try_parse_from(vec![
            "daybook", "write", "--mood", "ecstatic", "--content", "x",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_browse_repeatable_filters() {
        let args = CliArgs::parse_from(vec![
            "daybook", "browse", "--mood", "happy", "--mood", "tired", "--tag", "travel",
        ]);

        match args.command {
            Command::Browse {
                from,
                to,
                moods,
                tags,
            } => {
                assert!(from.is_none());
                assert!(to.is_none());
                assert_eq!(moods, vec![Mood::Happy, Mood::Tired]);
                assert_eq!(tags, vec!["travel".to_string()]);
            }
            _ => panic!("Expected Browse command"),
        }
    }

    #[test]
    fn test_calendar_args() {
        let args = CliArgs::parse_from(vec!["daybook", "calendar", "-y", "2025", "-m", "2"]);

        match args.command {
            Command::Calendar { year, month, date } => {
                assert_eq!(year, Some(2025));
                assert_eq!(month, Some(2));
                assert!(date.is_none());
            }
            _ => panic!("Expected Calendar command"),
        }
    }

    #[test]
    fn test_search_query() {
        let args = CliArgs::parse_from(vec!["daybook", "search", "hiking"]);

        match args.command {
            Command::Search { query } => assert_eq!(query, "hiking"),
            _ => panic!("Expected Search command"),
        }
    }

    #[test]
    fn test_edit_partial_fields() {
        let args = CliArgs::parse_from(vec!["daybook", "edit", "--id", "3", "--mood", "sad"]);

        match args.command {
            Command::Edit {
                id,
                title,
                mood,
                tags,
                content,
            } => {
                assert_eq!(id, 3);
                assert!(title.is_none());
                assert_eq!(mood, Some(Mood::Sad));
                assert!(tags.is_none());
                assert!(content.is_none());
            }
            _ => panic!("Expected Edit command"),
        }
    }

    #[test]
    fn test_edit_has_no_date_flag() {
        // Editing never moves an entry to a different date.
        let result = CliArgs::try_parse_from(vec![
            "daybook", "edit", "--id", "3", "--date", "2025-01-01",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_verbose_flag_is_global() {
        let args = CliArgs::parse_from(vec!["daybook", "about", "--verbose"]);
        assert!(args.verbose);
        assert!(matches!(args.command, Command::About));
    }
}
