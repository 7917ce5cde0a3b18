//! Document-level reduction of line statistics.

use std::sync::Arc;

use super::stats::{DocumentStats, LineStats};

/// Reduce analyzed lines to document totals.
///
/// Only content lines count: headers, comments and blank lines are kept
/// in `lines` but contribute nothing.
#[allow(clippy::cast_precision_loss)] // syllable totals stay far below 2^52
pub fn aggregate(lines: Vec<Arc<LineStats>>) -> DocumentStats {
    let (content_lines, total_syllables, word_count) = lines
        .iter()
        .filter(|line| line.is_content())
        .fold((0usize, 0usize, 0usize), |(count, syllables, words), line| {
            (count + 1, syllables + line.syllable_count, words + line.word_count())
        });

    let avg_syllables_per_line = if content_lines > 0 {
        total_syllables as f64 / content_lines as f64
    } else {
        0.0
    };

    DocumentStats {
        word_count,
        total_syllables,
        avg_syllables_per_line,
        lines,
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use crate::lyrics::stats::Token;
    use crate::types::TokenKind;

    fn word(raw: &str, count: usize) -> Token {
        Token {
            raw: raw.to_string(),
            kind: TokenKind::Word,
            syllables: vec![raw.to_string()],
            syllable_count: count,
        }
    }

    fn content(text: &str, tokens: Vec<Token>) -> Arc<LineStats> {
        Arc::new(LineStats {
            text: text.to_string(),
            is_header: false,
            is_comment: false,
            syllable_count: tokens.iter().map(|t| t.syllable_count).sum(),
            tokens,
        })
    }

    #[test]
    fn test_mixed_document() {
        let lines = vec![
            Arc::new(LineStats::marker("[Verse]", true, false)),
            content(
                "one two",
                vec![word("one", 1), Token::uncounted(" ", TokenKind::Whitespace), word("two", 1)],
            ),
            Arc::new(LineStats::marker("# note", false, true)),
            content("", vec![Token::uncounted("", TokenKind::Word)]),
        ];

        let doc = aggregate(lines);
        assert_eq!(doc.word_count, 2);
        assert_eq!(doc.total_syllables, 2);
        assert!((doc.avg_syllables_per_line - 2.0).abs() < f64::EPSILON);
        assert_eq!(doc.lines.len(), 4);
        assert_eq!(doc.content_line_count(), 1);
    }

    #[test]
    fn test_punctuation_is_not_a_word() {
        let lines = vec![
            content("la ...", vec![word("la", 1), Token::uncounted(" ", TokenKind::Whitespace), word("...", 0)]),
            content("lalala", vec![word("lalala", 3)]),
        ];

        let doc = aggregate(lines);
        assert_eq!(doc.word_count, 2);
        assert_eq!(doc.total_syllables, 4);
        assert!((doc.avg_syllables_per_line - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_whitespace_only_line_is_not_content() {
        let doc = aggregate(vec![content("   ", vec![Token::uncounted("   ", TokenKind::Whitespace)])]);
        assert_eq!(doc.content_line_count(), 0);
        assert!(doc.avg_syllables_per_line.abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_document() {
        let doc = aggregate(Vec::new());
        assert_eq!(doc.word_count, 0);
        assert_eq!(doc.total_syllables, 0);
        assert!(doc.avg_syllables_per_line.abs() < f64::EPSILON);
    }
}
