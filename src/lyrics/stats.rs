//! Result structures produced by the analysis engine.
//!
//! Every structure here is built once and never mutated afterwards. Lines
//! are shared through [`Arc`] so cache hits hand out the same value.

use std::sync::Arc;

use serde::Serialize;

use crate::types::TokenKind;

/// One whitespace run or non-whitespace run of a line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    /// Exact source text of the token.
    pub raw: String,
    /// Whether this is a whitespace run.
    pub kind: TokenKind,
    /// Syllable parts, concatenating back to `raw`.
    pub syllables: Vec<String>,
    /// Countable syllables contributed by this token.
    pub syllable_count: usize,
}

impl Token {
    /// Token that contributes no syllables and renders as itself.
    pub fn uncounted(raw: &str, kind: TokenKind) -> Self {
        let syllables = if raw.is_empty() { Vec::new() } else { vec![raw.to_string()] };
        Self {
            raw: raw.to_string(),
            kind,
            syllables,
            syllable_count: 0,
        }
    }

    /// Whether this token is a whitespace run.
    pub fn is_whitespace(&self) -> bool {
        self.kind == TokenKind::Whitespace
    }

    /// Whether this token counts as a word in document statistics.
    pub const fn is_counted(&self) -> bool {
        self.syllable_count > 0
    }
}

/// Analysis of a single line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineStats {
    /// The line exactly as given.
    pub text: String,
    /// Fully bracketed section marker such as `[Chorus]`.
    pub is_header: bool,
    /// Line starting with `#` after trimming.
    pub is_comment: bool,
    /// Total syllables of all word tokens.
    pub syllable_count: usize,
    /// Tokens that concatenate back to `text`.
    pub tokens: Vec<Token>,
}

impl LineStats {
    /// Header or comment line wrapped as one synthetic token.
    pub fn marker(text: &str, is_header: bool, is_comment: bool) -> Self {
        Self {
            text: text.to_string(),
            is_header,
            is_comment,
            syllable_count: 0,
            tokens: vec![Token {
                raw: text.to_string(),
                kind: TokenKind::Word,
                syllables: vec![text.to_string()],
                syllable_count: 0,
            }],
        }
    }

    /// Lines that contribute to document totals: not a header, not a
    /// comment, not blank.
    pub fn is_content(&self) -> bool {
        !self.is_header && !self.is_comment && !self.text.trim().is_empty()
    }

    /// Number of tokens with at least one syllable.
    pub fn word_count(&self) -> usize {
        self.tokens.iter().filter(|t| t.is_counted()).count()
    }
}

/// Whole-document metrics, derived from its lines.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentStats {
    /// Counted words over content lines.
    pub word_count: usize,
    /// Syllables over content lines.
    pub total_syllables: usize,
    /// `total_syllables` divided by the number of content lines, or 0.
    pub avg_syllables_per_line: f64,
    /// Per-line analysis in document order.
    pub lines: Vec<Arc<LineStats>>,
}

impl DocumentStats {
    /// Number of lines that contributed to the totals.
    pub fn content_line_count(&self) -> usize {
        self.lines.iter().filter(|l| l.is_content()).count()
    }
}
