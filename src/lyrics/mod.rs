//! Line analysis engine for lyric and poetry text.
//!
//! Text flows through [`classify`], [`tokenize`] and [`syllables`] one line
//! at a time inside [`LineAnalyzer`], which caches each line's result;
//! [`aggregate`] reduces the lines to document totals.

pub mod aggregate;
pub mod analyzer;
pub mod cache;
pub mod classify;
pub mod stats;
pub mod syllables;
pub mod tokenize;

pub use aggregate::aggregate;
pub use analyzer::LineAnalyzer;
pub use cache::LineCache;
pub use stats::{DocumentStats, LineStats, Token};
