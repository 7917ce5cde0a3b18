//! Word cleaning, syllabification and punctuation re-attachment.
//!
//! A token such as `(feiern,` is cleaned to `feiern`, split by the
//! hyphenation provider into `["fei", "ern"]`, and rebuilt as
//! `["(fei", "ern,"]` so the parts still spell the original token.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

use super::stats::Token;
use super::tokenize::is_whitespace_run;
use crate::services::hyphenator::Hyphenator;
use crate::types::TokenKind;

/// Everything that is not a letter, combining mark, apostrophe or hyphen.
#[allow(clippy::expect_used)]
static RE_NON_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^\p{L}\p{M}'-]").expect("valid regex: RE_NON_WORD")
});

/// Strip a token down to the characters the hyphenation patterns understand.
pub fn clean_word(token: &str) -> Cow<'_, str> {
    RE_NON_WORD.replace_all(token, "")
}

/// Re-attach the characters stripped from `raw` to the syllables of `clean`.
///
/// Text before the first occurrence of `clean` goes onto the first part,
/// text after it onto the last. If `clean` does not occur in `raw` (the
/// stripped characters were inside the word) the token stays unsplit.
pub fn reconstruct(raw: &str, clean: &str, parts: &[String]) -> Vec<String> {
    let Some(index) = raw.find(clean) else {
        return vec![raw.to_string()];
    };
    let (Some(first), Some(last)) = (parts.first(), parts.last()) else {
        return vec![raw.to_string()];
    };

    let prefix = &raw[..index];
    let suffix = &raw[index + clean.len()..];

    let mut result = parts.to_vec();
    let end = result.len() - 1;
    if end == 0 {
        result[0] = format!("{prefix}{first}{suffix}");
    } else {
        result[0] = format!("{prefix}{first}");
        result[end] = format!("{last}{suffix}");
    }
    result
}

/// Provider output must be non-empty and spell the clean word exactly.
fn satisfies_contract(clean: &str, parts: &[String]) -> bool {
    !parts.is_empty() && parts.iter().all(|p| !p.is_empty()) && parts.concat() == clean
}

/// Analyze one token of a content line.
pub fn analyze_token(raw: &str, hyphenator: &dyn Hyphenator) -> Token {
    if raw.is_empty() {
        return Token::uncounted(raw, TokenKind::Word);
    }
    if is_whitespace_run(raw) {
        return Token::uncounted(raw, TokenKind::Whitespace);
    }

    let clean = clean_word(raw);
    if clean.is_empty() {
        return Token::uncounted(raw, TokenKind::Word);
    }

    let parts = hyphenator.hyphenate(&clean);
    if !satisfies_contract(&clean, &parts) {
        tracing::warn!(
            provider = hyphenator.name(),
            word = %clean,
            parts = ?parts,
            "Hyphenation result does not reconstruct the word; keeping token unsplit"
        );
        return Token {
            raw: raw.to_string(),
            kind: TokenKind::Word,
            syllables: vec![raw.to_string()],
            syllable_count: 1,
        };
    }

    Token {
        raw: raw.to_string(),
        kind: TokenKind::Word,
        syllables: reconstruct(raw, &clean, &parts),
        syllable_count: parts.len(),
    }
}
