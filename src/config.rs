//! Configuration management for the address book.
//!
//! All settings come from environment variables with sensible defaults, so
//! the program runs with no setup at all. A `.env` file is honored when
//! present.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Default book file used when `ABOOK_FILE` is not set.
pub const DEFAULT_BOOK_FILE: &str = "addressbook.json";

/// Runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Default path for save/load when the user enters a blank filename
    pub book_path: PathBuf,

    /// Log level (default: "info")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ABOOK_FILE`: default book file path (default: `addressbook.json`)
    /// - `LOG_LEVEL`: logging level (default: "info")
    pub fn from_env() -> ConfigResult<Self> {
        // Load .env if present; its absence is not an error
        let _ = dotenvy::dotenv();

        let book_path = match env::var("ABOOK_FILE") {
            Ok(val) if val.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    var: "ABOOK_FILE".to_string(),
                    reason: "Cannot be empty".to_string(),
                });
            }
            Ok(val) => PathBuf::from(val),
            Err(_) => PathBuf::from(DEFAULT_BOOK_FILE),
        };

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Config {
            book_path,
            log_level,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            book_path: PathBuf::from(DEFAULT_BOOK_FILE),
            log_level: "info".to_string(),
        }
    }
}
