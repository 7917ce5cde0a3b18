//! Presentation helpers for a syllable overlay.
//!
//! These functions only read analysis results; they are what an editor
//! overlay or status bar needs to draw gutter counts, syllable breaks and
//! the document summary.

use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use crate::constants;
use crate::lyrics::{DocumentStats, LineStats};

/// Position of one syllable of a multi-syllable word within its line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyllableSpan {
    /// Index of the owning token in [`LineStats::tokens`].
    pub token: usize,
    /// Display column where the syllable starts.
    pub column: usize,
    /// Display width of the syllable.
    pub width: usize,
    /// Syllable text, including attached punctuation.
    pub text: String,
}

/// Gutter label for a line: its syllable count, or `-` when there is none.
pub fn gutter_label(line: &LineStats) -> String {
    if line.syllable_count > 0 {
        line.syllable_count.to_string()
    } else {
        constants::overlay::EMPTY_GUTTER.to_string()
    }
}

/// Line text with `separator` between the syllables of each multi-syllable word.
pub fn hyphenated(line: &LineStats, separator: &str) -> String {
    let mut out = String::with_capacity(line.text.len());
    for token in &line.tokens {
        if token.syllables.len() > 1 {
            out.push_str(&token.syllables.join(separator));
        } else {
            out.push_str(&token.raw);
        }
    }
    out
}

/// Display positions of every syllable in the multi-syllable words of a line.
pub fn syllable_spans(line: &LineStats) -> Vec<SyllableSpan> {
    let mut spans = Vec::new();
    let mut column = 0;

    for (index, token) in line.tokens.iter().enumerate() {
        if token.syllables.len() > 1 {
            let mut offset = column;
            for syllable in &token.syllables {
                let width = syllable.width();
                spans.push(SyllableSpan {
                    token: index,
                    column: offset,
                    width,
                    text: syllable.clone(),
                });
                offset += width;
            }
        }
        column += token.raw.width();
    }
    spans
}

/// One-line status summary, e.g. `12 words · 20 syl · 5.0 avg`.
pub fn summary(stats: &DocumentStats) -> String {
    format!(
        "{} words · {} syl · {:.1} avg",
        stats.word_count, stats.total_syllables, stats.avg_syllables_per_line
    )
}
