//! Configuration management for the daybook application.
//!
//! This module handles loading and validating configuration settings from
//! environment variables, with sensible defaults. The only setting is the
//! location of the diary database file.
//!
//! # Environment Variables
//!
//! - `DAYBOOK_DB`: Path to the database file (defaults to ~/.daybook/daybook.db)
//! - `HOME`: Used for expanding the default database path

use crate::constants;
use crate::errors::{AppError, AppResult};
use std::env;
use std::fmt;
use std::path::PathBuf;

/// Configuration for the daybook application.
///
/// # Examples
///
/// Creating a configuration manually:
/// ```
/// use daybook::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     db_path: PathBuf::from("/path/to/daybook.db"),
/// };
/// assert!(config.validate().is_ok());
/// ```
pub struct Config {
    /// Path to the SQLite database file holding all diary entries.
    ///
    /// Loaded from the DAYBOOK_DB environment variable with a fallback to
    /// ~/.daybook/daybook.db if not specified.
    pub db_path: PathBuf,
}

impl fmt::Debug for Config {
    // The diary location is private data; keep it out of logs.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("db_path", &"[REDACTED_PATH]")
            .finish()
    }
}

impl Config {
    /// Loads configuration from environment variables with sensible defaults.
    ///
    /// Reads the database path from `DAYBOOK_DB`, falling back to
    /// `~/.daybook/daybook.db`. The path is expanded with `shellexpand` so
    /// `~` and environment variable references are handled.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if path expansion fails or the resulting
    /// path is empty.
    pub fn load() -> AppResult<Self> {
        let db_path_str = env::var(constants::ENV_VAR_DAYBOOK_DB).unwrap_or_else(|_| {
            let home = env::var(constants::ENV_VAR_HOME).unwrap_or_default();
            format!("{}/{}", home, constants::DEFAULT_DB_SUBPATH)
        });

        let expanded = shellexpand::full(&db_path_str)
            .map_err(|e| AppError::Config(format!("Failed to expand database path: {}", e)))?;

        let db_path = PathBuf::from(expanded.into_owned());

        if db_path.as_os_str().is_empty() {
            return Err(AppError::Config("Database path is empty".to_string()));
        }

        Ok(Config { db_path })
    }

    /// Validates that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the database path is empty or relative.
    pub fn validate(&self) -> AppResult<()> {
        if self.db_path.as_os_str().is_empty() {
            return Err(AppError::Config("Database path is empty".to_string()));
        }

        if !self.db_path.is_absolute() {
            return Err(AppError::Config(
                "Database path must be an absolute path".to_string(),
            ));
        }

        Ok(())
    }
}
