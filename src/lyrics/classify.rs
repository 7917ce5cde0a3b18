//! Line classification: section headers, comments and content.

use std::sync::LazyLock;

use regex::Regex;

/// Regex matching a fully bracketed section marker like `[Verse 1]`.
#[allow(clippy::expect_used)]
static RE_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\[.*\]$").expect("valid regex: RE_HEADER")
});

/// Classification flags of a raw line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineClass {
    /// Trimmed line is wrapped in square brackets.
    pub is_header: bool,
    /// Trimmed line starts with `#`.
    pub is_comment: bool,
}

impl LineClass {
    /// Header and comment lines are never syllabified.
    pub const fn is_marker(self) -> bool {
        self.is_header || self.is_comment
    }
}

/// Classify a raw line. Both flags are evaluated independently.
pub fn classify(line: &str) -> LineClass {
    let trimmed = line.trim();
    LineClass {
        is_header: RE_HEADER.is_match(trimmed),
        is_comment: trimmed.starts_with('#'),
    }
}
