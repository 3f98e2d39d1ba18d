//! Configuration management for the contact assistant.
//!
//! This module handles loading and validating configuration from environment
//! variables. A `.env` file in the working directory is read first if present.

use crate::error::{ConfigError, ConfigResult};
use crate::models::DEFAULT_BIRTHDAY_WINDOW_DAYS;
use std::env;
use std::path::PathBuf;

/// File the address book is stored in when nothing else is configured.
pub const DEFAULT_BOOK_PATH: &str = "addressbook.json";

/// Configuration for the contact assistant.
#[derive(Debug, Clone)]
pub struct Config {
    /// Where the address book is persisted (default: `addressbook.json`)
    pub book_path: PathBuf,

    /// Days ahead covered by the `birthdays` command (default: 7)
    pub birthday_window_days: u32,

    /// Maximum number of search results to return (default: 5)
    pub max_search_results: usize,

    /// Fuzzy match confidence threshold (0-100, default: 30)
    pub match_confidence_threshold: u8,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// All variables are optional:
    /// - `ASSISTANT_BOOK_PATH`: address book file (default: `addressbook.json`)
    /// - `BIRTHDAY_WINDOW_DAYS`: upcoming birthday window (default: 7, max 366)
    /// - `MAX_SEARCH_RESULTS`: max search results (default: 5)
    /// - `MATCH_CONFIDENCE_THRESHOLD`: min confidence score (default: 30)
    /// - `LOG_LEVEL`: logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Missing .env is fine
        let _ = dotenvy::dotenv();

        let book_path = env::var("ASSISTANT_BOOK_PATH")
            .ok()
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_BOOK_PATH));

        let birthday_window_days =
            Self::parse_env("BIRTHDAY_WINDOW_DAYS", DEFAULT_BIRTHDAY_WINDOW_DAYS)?;
        if birthday_window_days > 366 {
            return Err(ConfigError::InvalidValue {
                var: "BIRTHDAY_WINDOW_DAYS".to_string(),
                reason: "Must be at most 366".to_string(),
            });
        }

        let max_search_results = Self::parse_env("MAX_SEARCH_RESULTS", 5)?;
        let match_confidence_threshold: u8 = Self::parse_env("MATCH_CONFIDENCE_THRESHOLD", 30)?;
        if match_confidence_threshold > 100 {
            return Err(ConfigError::InvalidValue {
                var: "MATCH_CONFIDENCE_THRESHOLD".to_string(),
                reason: "Must be between 0 and 100".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            book_path,
            birthday_window_days,
            max_search_results,
            match_confidence_threshold,
            log_level,
        })
    }

    /// Parse an environment variable as a number with a default value.
    fn parse_env<T: std::str::FromStr>(var_name: &str, default: T) -> ConfigResult<T> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<T>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            book_path: PathBuf::from(DEFAULT_BOOK_PATH),
            birthday_window_days: DEFAULT_BIRTHDAY_WINDOW_DAYS,
            max_search_results: 5,
            match_confidence_threshold: 30,
            log_level: "error".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    const VARS: [&str; 5] = [
        "ASSISTANT_BOOK_PATH",
        "BIRTHDAY_WINDOW_DAYS",
        "MAX_SEARCH_RESULTS",
        "MATCH_CONFIDENCE_THRESHOLD",
        "LOG_LEVEL",
    ];

    // Sets variables for one test and clears every known variable on drop
    struct EnvGuard;

    impl EnvGuard {
        fn new() -> Self {
            for var in VARS {
                env::remove_var(var);
            }
            EnvGuard
        }

        fn set(&mut self, key: &str, value: &str) {
            env::set_var(key, value);
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for var in VARS {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.book_path, PathBuf::from("addressbook.json"));
        assert_eq!(config.birthday_window_days, 7);
        assert_eq!(config.max_search_results, 5);
        assert_eq!(config.match_confidence_threshold, 30);
        assert_eq!(config.log_level, "error");
    }

    #[test]
    #[serial]
    fn test_config_from_env_valid() {
        let mut guard = EnvGuard::new();
        guard.set("ASSISTANT_BOOK_PATH", "/tmp/contacts.json");
        guard.set("BIRTHDAY_WINDOW_DAYS", "14");
        guard.set("MAX_SEARCH_RESULTS", "10");
        guard.set("LOG_LEVEL", "debug");

        let config = Config::from_env().unwrap();
        assert_eq!(config.book_path, PathBuf::from("/tmp/contacts.json"));
        assert_eq!(config.birthday_window_days, 14);
        assert_eq!(config.max_search_results, 10);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    #[serial]
    fn test_config_blank_book_path_uses_default() {
        let mut guard = EnvGuard::new();
        guard.set("ASSISTANT_BOOK_PATH", "  ");

        let config = Config::from_env().unwrap();
        assert_eq!(config.book_path, PathBuf::from(DEFAULT_BOOK_PATH));
    }

    #[test]
    #[serial]
    fn test_config_invalid_window() {
        let mut guard = EnvGuard::new();
        guard.set("BIRTHDAY_WINDOW_DAYS", "soon");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => assert_eq!(var, "BIRTHDAY_WINDOW_DAYS"),
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_config_window_too_large() {
        let mut guard = EnvGuard::new();
        guard.set("BIRTHDAY_WINDOW_DAYS", "400");
        assert!(Config::from_env().is_err());
    }

    #[test]
    #[serial]
    fn test_config_invalid_confidence_threshold() {
        let mut guard = EnvGuard::new();
        guard.set("MATCH_CONFIDENCE_THRESHOLD", "150");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => {
                assert_eq!(var, "MATCH_CONFIDENCE_THRESHOLD")
            }
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_parse_env() {
        let mut guard = EnvGuard::new();
        guard.set("MAX_SEARCH_RESULTS", "42");

        let result: ConfigResult<usize> = Config::parse_env("MAX_SEARCH_RESULTS", 10);
        assert_eq!(result.unwrap(), 42);

        let result: ConfigResult<usize> = Config::parse_env("NONEXISTENT_ASSISTANT_VAR", 10);
        assert_eq!(result.unwrap(), 10);
    }

    #[test]
    #[serial]
    fn test_parse_env_invalid() {
        let mut guard = EnvGuard::new();
        guard.set("MAX_SEARCH_RESULTS", "-3");

        let result: ConfigResult<usize> = Config::parse_env("MAX_SEARCH_RESULTS", 10);
        assert!(result.is_err());
    }
}
