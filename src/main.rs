/*!
# daybook - A Personal Diary

daybook keeps a single-user diary in a local SQLite database. Each entry is
filed under a calendar date with a title, free-form text, a mood, and
comma-separated tags.

## Usage

```text
daybook <COMMAND>

Commands:
  write     Write a new diary entry
  browse    Browse entries, optionally filtered by date range, mood, and tag
  calendar  Show a month calendar marking the days that have entries
  search    Search entries by keyword across title, content, and tags
  about     About daybook
  edit      Edit an existing entry; omitted fields keep their current values
  delete    Delete an entry by id
```

## Configuration

- `DAYBOOK_DB`: path to the SQLite database (defaults to `~/.daybook/daybook.db`)
- `RUST_LOG`: log filter, e.g. `daybook=debug`
*/

use chrono::Local;
use clap::Parser;
use daybook::cli::{CliArgs, Command};
use daybook::config::Config;
use daybook::constants::DEFAULT_LOG_LEVEL;
use daybook::db::Database;
use daybook::errors::AppResult;
use daybook::ops;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Coordinates the application flow: logging, configuration, the database,
/// then the requested operation.
fn run() -> AppResult<()> {
    let args = CliArgs::parse();

    let default_filter = if args.verbose {
        "debug"
    } else {
        DEFAULT_LOG_LEVEL
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    debug!("CLI arguments: {:?}", args);

    info!("Loading configuration");
    let config = Config::load()?;
    config.validate()?;

    let db = Database::open(&config.db_path)?;
    db.initialize_schema()?;

    let today = Local::now().date_naive();

    match args.command {
        Command::Write {
            date,
            title,
            mood,
            tags,
            content,
        } => ops::write::run(&db, date, today, &title, mood, &tags, &content),
        Command::Browse {
            from,
            to,
            moods,
            tags,
        } => ops::browse::run(&db, from, to, moods, tags),
        Command::Calendar { year, month, date } => {
            ops::calendar::run(&db, year, month, date, today)
        }
        Command::Search { query } => ops::search::run(&db, &query),
        Command::About => {
            ops::about::run();
            Ok(())
        }
        Command::Edit {
            id,
            title,
            mood,
            tags,
            content,
        } => ops::edit::run(
            &db,
            id,
            title.as_deref(),
            mood,
            tags.as_deref(),
            content.as_deref(),
        ),
        Command::Delete { id } => ops::delete::run(&db, id),
    }
}
