/*!
# daybook

A single-user personal diary for the terminal.

Each entry is filed under a calendar date and carries a title, free-form
text, one mood drawn from a fixed set, and comma-separated tags. Entries
live in a local SQLite database; every command opens the store, does its
work, and exits.

## Modules

* `calendar` - Monday-first month grids marking the days with entries
* `cli` - command-line argument definitions
* `config` - database location resolution
* `db` - SQLite store: schema and entry CRUD
* `errors` - application error types
* `filter` - in-memory filtering and keyword search over entries
* `mood` - the fixed mood vocabulary
* `ops` - one operation per page or per-entry action
*/

pub mod calendar;
pub mod cli;
pub mod config;
pub mod constants;
pub mod db;
pub mod errors;
pub mod filter;
pub mod mood;
pub mod ops;

pub use cli::CliArgs;
pub use config::Config;
pub use errors::{AppError, AppResult};
