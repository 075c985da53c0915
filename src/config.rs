//! Configuration management for the address book assistant.
//!
//! This module loads optional overrides from environment variables and a
//! `.env` file. Every setting has a default, so an empty environment is a
//! valid configuration.

use crate::error::{ConfigError, ConfigResult};
use crate::repositories::DEFAULT_STORAGE_PATH;
use crate::services::DEFAULT_WINDOW_DAYS;
use std::env;
use std::path::PathBuf;

/// Largest accepted birthday window, one (leap) year.
pub const MAX_WINDOW_DAYS: u32 = 366;

/// Configuration for the address book assistant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Address book file (default: "addressbook.json")
    pub storage_path: PathBuf,

    /// Days ahead the `birthdays` command looks (default: 7)
    pub birthday_window_days: u32,

    /// Log level (default: "warn")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ADDRESS_BOOK_PATH`: Address book file (default: "addressbook.json")
    /// - `BIRTHDAY_WINDOW_DAYS`: Upcoming birthday window in days (default: 7)
    /// - `LOG_LEVEL`: Logging level (default: "warn")
    pub fn from_env() -> ConfigResult<Self> {
        // Missing .env is fine
        let _ = dotenvy::dotenv();

        let defaults = Self::default();

        let storage_path = match env::var("ADDRESS_BOOK_PATH") {
            Ok(path) if path.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    var: "ADDRESS_BOOK_PATH".to_string(),
                    reason: "Cannot be empty".to_string(),
                });
            }
            Ok(path) => PathBuf::from(path),
            Err(_) => defaults.storage_path,
        };

        let birthday_window_days =
            Self::parse_env_u32("BIRTHDAY_WINDOW_DAYS", defaults.birthday_window_days)?;
        if birthday_window_days > MAX_WINDOW_DAYS {
            return Err(ConfigError::InvalidValue {
                var: "BIRTHDAY_WINDOW_DAYS".to_string(),
                reason: format!("Must be between 0 and {MAX_WINDOW_DAYS}"),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);

        Ok(Config {
            storage_path,
            birthday_window_days,
            log_level,
        })
    }

    /// Parse an environment variable as u32 with a default value.
    fn parse_env_u32(var_name: &str, default: u32) -> ConfigResult<u32> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<u32>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a non-negative number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            storage_path: PathBuf::from(DEFAULT_STORAGE_PATH),
            birthday_window_days: DEFAULT_WINDOW_DAYS,
            log_level: "warn".to_string(),
        }
    }
}
