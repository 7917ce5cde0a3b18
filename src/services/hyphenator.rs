//! Hyphenation providers.
//!
//! A provider splits a clean word (letters, marks, apostrophes, hyphens)
//! into syllables. The analyzer treats the result as ground truth, but
//! still checks the provider contract before using it.

use std::collections::HashMap;
use std::sync::Arc;

use hyphenation::{Hyphenator as _, Load, Standard};

use crate::error::{Error, Result};
use crate::types::Language;

/// Trait for syllable providers.
///
/// Implementations must return at least one part, and the parts must
/// concatenate back to `word`. A word that cannot be split is returned
/// as a single part.
pub trait Hyphenator: Send + Sync {
    /// Split a clean, non-empty word into syllables.
    fn hyphenate(&self, word: &str) -> Vec<String>;

    /// Get the name of this provider (for debugging/logging).
    fn name(&self) -> &'static str;
}

/// Knuth-Liang pattern dictionary embedded in the binary.
pub struct DictionaryHyphenator {
    language: Language,
    dictionary: Standard,
}

impl DictionaryHyphenator {
    /// Load the embedded pattern dictionary for `language`.
    pub fn embedded(language: Language) -> Result<Self> {
        let patterns = match language {
            Language::English => hyphenation::Language::EnglishUS,
            Language::German => hyphenation::Language::German1996,
        };

        let dictionary = Standard::from_embedded(patterns)
            .map_err(|e| Error::dictionary(language.tag(), e.to_string()))?;

        tracing::debug!("Loaded {} hyphenation dictionary", language.name());
        Ok(Self { language, dictionary })
    }

    /// Language whose patterns this provider applies.
    pub const fn language(&self) -> Language {
        self.language
    }
}

impl Hyphenator for DictionaryHyphenator {
    fn hyphenate(&self, word: &str) -> Vec<String> {
        // Patterns are lowercase; breaks found on the folded word are mapped
        // back by character position.
        let lower = word.to_lowercase();
        let original: Vec<usize> = word.char_indices().map(|(i, _)| i).collect();
        let folded: Vec<usize> = lower.char_indices().map(|(i, _)| i).collect();
        if original.len() != folded.len() {
            return vec![word.to_string()];
        }

        let breaks = self.dictionary.hyphenate(&lower).breaks;
        split_at_chars(word, &original, breaks.iter().filter_map(|b| folded.binary_search(b).ok()))
    }

    fn name(&self) -> &'static str {
        match self.language {
            Language::English => "DictionaryHyphenator(en-us)",
            Language::German => "DictionaryHyphenator(de-1996)",
        }
    }
}

/// Fixed word list mapping words to their syllables.
///
/// Lookup is case-insensitive; the returned parts keep the casing of the
/// word being split. Unknown words come back unsplit.
#[derive(Debug, Clone, Default)]
pub struct TableHyphenator {
    /// Lowercased word -> syllable lengths in characters
    entries: HashMap<String, Vec<usize>>,
}

impl TableHyphenator {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a word given as its syllables, e.g. `["beau", "ti", "ful"]`.
    #[must_use]
    pub fn with_word(mut self, syllables: &[&str]) -> Self {
        let word: String = syllables.concat();
        let lengths = syllables.iter().map(|s| s.chars().count()).collect();
        self.entries.insert(word.to_lowercase(), lengths);
        self
    }

    /// Number of words in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no words.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Hyphenator for TableHyphenator {
    fn hyphenate(&self, word: &str) -> Vec<String> {
        let Some(lengths) = self.entries.get(&word.to_lowercase()) else {
            return vec![word.to_string()];
        };

        let original: Vec<usize> = word.char_indices().map(|(i, _)| i).collect();
        if lengths.iter().sum::<usize>() != original.len() {
            return vec![word.to_string()];
        }

        let positions = lengths.iter().scan(0, |acc, len| {
            *acc += len;
            Some(*acc)
        });
        split_at_chars(word, &original, positions)
    }

    fn name(&self) -> &'static str {
        "TableHyphenator"
    }
}

/// Split `word` before each character position in `positions`.
///
/// `offsets` holds the byte offset of every character. Positions at the
/// edges or out of order are ignored, so the parts always concatenate to
/// `word`.
fn split_at_chars(word: &str, offsets: &[usize], positions: impl Iterator<Item = usize>) -> Vec<String> {
    let mut parts = Vec::new();
    let mut start = 0;
    for pos in positions {
        let Some(&at) = offsets.get(pos) else {
            continue;
        };
        if at > start {
            parts.push(word[start..at].to_string());
            start = at;
        }
    }
    parts.push(word[start..].to_string());
    parts
}

/// One immutable provider bound to every supported language.
#[derive(Clone)]
pub struct HyphenatorSet {
    english: Arc<dyn Hyphenator>,
    german: Arc<dyn Hyphenator>,
}

impl HyphenatorSet {
    /// Bind explicit providers.
    pub fn new(english: Arc<dyn Hyphenator>, german: Arc<dyn Hyphenator>) -> Self {
        Self { english, german }
    }

    /// Load the embedded dictionaries for all languages.
    pub fn embedded() -> Result<Self> {
        Ok(Self::new(
            Arc::new(DictionaryHyphenator::embedded(Language::English)?),
            Arc::new(DictionaryHyphenator::embedded(Language::German)?),
        ))
    }

    /// Use the same provider for every language.
    pub fn uniform(provider: Arc<dyn Hyphenator>) -> Self {
        Self::new(Arc::clone(&provider), provider)
    }

    /// Provider bound to `language`.
    pub fn get(&self, language: Language) -> &dyn Hyphenator {
        match language {
            Language::English => self.english.as_ref(),
            Language::German => self.german.as_ref(),
        }
    }
}

impl std::fmt::Debug for HyphenatorSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HyphenatorSet")
            .field("english", &self.english.name())
            .field("german", &self.german.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn test_table_splits_known_word() {
        let table = TableHyphenator::new().with_word(&["beau", "ti", "ful"]);
        assert_eq!(table.hyphenate("beautiful"), vec!["beau", "ti", "ful"]);
    }

    #[test]
    fn test_table_keeps_case_of_input() {
        let table = TableHyphenator::new().with_word(&["fei", "ern"]);
        assert_eq!(table.hyphenate("Feiern"), vec!["Fei", "ern"]);
    }

    #[test]
    fn test_table_unknown_word_unsplit() {
        let table = TableHyphenator::new().with_word(&["beau", "ti", "ful"]);
        assert_eq!(table.hyphenate("night"), vec!["night"]);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_table_multibyte_word() {
        let table = TableHyphenator::new().with_word(&["grü", "ßen"]);
        assert_eq!(table.hyphenate("grüßen"), vec!["grü", "ßen"]);
    }

    #[test]
    fn test_split_ignores_edge_positions() {
        let word = "abc";
        let offsets: Vec<usize> = word.char_indices().map(|(i, _)| i).collect();
        let parts = split_at_chars(word, &offsets, [0, 1, 1, 3, 7].into_iter());
        assert_eq!(parts, vec!["a", "bc"]);
    }

    #[test]
    fn test_uniform_set_binds_all_languages() {
        let set = HyphenatorSet::uniform(Arc::new(TableHyphenator::new()));
        for lang in Language::all() {
            assert_eq!(set.get(*lang).name(), "TableHyphenator");
        }
    }

    #[test]
    fn test_embedded_dictionaries_reconstruct_words() {
        let set = HyphenatorSet::embedded().unwrap();
        for (lang, word) in [
            (Language::English, "Beautiful"),
            (Language::English, "hyphenation"),
            (Language::German, "Wunderschöne"),
            (Language::German, "feiern"),
        ] {
            let parts = set.get(lang).hyphenate(word);
            assert!(!parts.is_empty());
            assert_eq!(parts.concat(), word);
        }
    }

    #[test]
    fn test_embedded_dictionary_splits_long_word() {
        let en = DictionaryHyphenator::embedded(Language::English).unwrap();
        assert!(en.hyphenate("hyphenation").len() > 1);
        assert_eq!(en.language(), Language::English);
    }
}
