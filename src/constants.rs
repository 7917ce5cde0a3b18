//! Application constants.
//!
//! Centralizes magic numbers and configuration values for better maintainability.

/// Line cache constants.
pub mod cache {
    /// Default number of analyzed lines kept in the line cache.
    pub const DEFAULT_CAPACITY: usize = 2000;

    /// Share of the capacity evicted at once when the cache is full, in percent.
    pub const EVICTION_PERCENT: usize = 10;
}

/// Overlay rendering constants.
pub mod overlay {
    /// Default separator placed between syllables in hyphenated output.
    pub const DEFAULT_SEPARATOR: &str = "·";

    /// Gutter label shown for lines without countable syllables.
    pub const EMPTY_GUTTER: &str = "-";
}

/// Environment variable names read by [`crate::config::Config::load`].
pub mod env {
    /// Default language tag.
    pub const LANGUAGE: &str = "LYRICMETER_LANGUAGE";

    /// Line cache capacity.
    pub const CACHE_CAPACITY: &str = "LYRICMETER_CACHE_CAPACITY";

    /// Syllable separator for hyphenated output.
    pub const SEPARATOR: &str = "LYRICMETER_SEPARATOR";
}
