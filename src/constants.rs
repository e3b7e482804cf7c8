//! Constants used throughout the application.
//!
//! This module contains all constants used in the daybook application, organized
//! into logical groups. Having constants centralized makes them easier to find,
//! modify, and reference consistently.

// Application Metadata
/// The name of the application.
pub const APP_NAME: &str = "daybook";
/// The description of the application used in CLI help text.
pub const APP_DESCRIPTION: &str = "A personal diary with moods, tags, and a calendar view";

// Configuration Keys & Environment Variables
/// Environment variable for specifying the daybook database path.
pub const ENV_VAR_DAYBOOK_DB: &str = "DAYBOOK_DB";
/// Standard environment variable for the user's home directory.
pub const ENV_VAR_HOME: &str = "HOME";
/// Default database location relative to the user's home directory.
pub const DEFAULT_DB_SUBPATH: &str = ".daybook/daybook.db";

// Date/Time Logic
/// Date format string for ISO date format (YYYY-MM-DD).
pub const DATE_FORMAT_ISO: &str = "%Y-%m-%d";

// Presentation
/// Maximum number of characters shown per entry in search results.
pub const CONTENT_PREVIEW_CHARS: usize = 300;

// Logging Configuration
/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";
