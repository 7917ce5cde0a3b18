//! `lyricmeter` - line-by-line syllable and structure analysis for lyrics.
//!
//! The engine classifies each line as header, comment or content, splits
//! content lines into whitespace-preserving tokens and syllabifies words
//! with language-specific hyphenation patterns. Results are cached per line
//! and aggregated into document statistics for an overlay or report.

// Re-export public modules for use in integration tests and as a library
pub mod config;
pub mod constants;
pub mod error;
pub mod input;
pub mod lyrics;
pub mod services;
pub mod types;

pub use error::{Error, Result};
pub use lyrics::{DocumentStats, LineAnalyzer, LineStats, Token};
pub use types::Language;
