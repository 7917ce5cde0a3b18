//! Application configuration.
//!
//! Handles loading configuration from environment variables and .env files.

use dotenv::dotenv;
use std::env;

use crate::constants;
use crate::error::{Error, Result};
use crate::types::Language;

/// Configuration for the analysis engine and its front end.
#[derive(Debug, Clone)]
pub struct Config {
    /// The application name
    app_name: String,
    /// The application version
    app_version: String,
    /// Language used when none is given explicitly
    pub language: Language,
    /// Maximum number of analyzed lines kept in the line cache
    pub cache_capacity: usize,
    /// Separator inserted between syllables in hyphenated output
    pub separator: String,
}

impl Config {
    /// Get the application name.
    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Get the application version.
    #[must_use]
    pub fn app_version(&self) -> &str {
        &self.app_version
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: env!("CARGO_PKG_NAME").to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            language: Language::default(),
            cache_capacity: constants::cache::DEFAULT_CAPACITY,
            separator: constants::overlay::DEFAULT_SEPARATOR.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn load() -> Result<Self> {
        // Try to load .env file if present
        dotenv().ok();

        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build a configuration from a variable lookup, starting from defaults.
    fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(tag) = lookup(constants::env::LANGUAGE) {
            config.language = tag.parse()?;
        }

        if let Some(raw) = lookup(constants::env::CACHE_CAPACITY) {
            config.cache_capacity = raw.trim().parse::<usize>().map_err(|e| {
                Error::config(
                    format!("invalid cache capacity '{raw}': {e}"),
                    "Set LYRICMETER_CACHE_CAPACITY to a positive integer",
                )
            })?;
        }

        if let Some(separator) = lookup(constants::env::SEPARATOR) {
            config.separator = separator;
        }

        config.validate()?;
        Ok(config)
    }

    /// Check values that cannot be expressed in the types alone.
    pub fn validate(&self) -> Result<()> {
        if self.cache_capacity == 0 {
            return Err(Error::config(
                "cache capacity must be at least 1",
                "Set LYRICMETER_CACHE_CAPACITY or --cache-capacity to a positive integer",
            ));
        }
        Ok(())
    }
}
