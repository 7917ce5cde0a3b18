//! Line analyzer: classification, tokenization and syllabification of
//! each line, backed by the line cache.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::aggregate::aggregate;
use super::cache::LineCache;
use super::classify::classify;
use super::stats::{DocumentStats, LineStats};
use super::syllables::analyze_token;
use super::tokenize::tokenize;
use crate::config::Config;
use crate::error::Result;
use crate::services::hyphenator::{Hyphenator, HyphenatorSet};
use crate::types::Language;

/// Analyzes lines and documents against a fixed set of hyphenation providers.
///
/// The analyzer owns its cache. Analysis is synchronous and never fails;
/// callers that react to every keystroke should debounce on their side.
#[derive(Debug)]
pub struct LineAnalyzer {
    hyphenators: HyphenatorSet,
    cache: Mutex<LineCache>,
}

impl LineAnalyzer {
    /// Create an analyzer with explicit providers and cache capacity.
    pub fn new(hyphenators: HyphenatorSet, cache_capacity: usize) -> Self {
        Self {
            hyphenators,
            cache: Mutex::new(LineCache::new(cache_capacity)),
        }
    }

    /// Create an analyzer with the embedded dictionaries.
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(HyphenatorSet::embedded()?, config.cache_capacity))
    }

    /// Analyze one line. Identical `(line, language)` pairs return the
    /// cached result.
    pub fn analyze_line(&self, line: &str, language: Language) -> Arc<LineStats> {
        if let Some(hit) = self.lock_cache().get(language, line) {
            tracing::trace!(line, "Line cache hit");
            return hit;
        }

        let stats = Arc::new(compute_line(line, self.hyphenators.get(language)));
        self.lock_cache()
            .put(language, line.to_string(), Arc::clone(&stats));
        stats
    }

    /// Analyze every `\n`-separated line of `text`, in document order.
    pub fn analyze_text(&self, text: &str, language: Language) -> Vec<Arc<LineStats>> {
        text.split('\n')
            .map(|line| self.analyze_line(line, language))
            .collect()
    }

    /// Analyze `text` and aggregate the result.
    pub fn analyze_document(&self, text: &str, language: Language) -> DocumentStats {
        aggregate(self.analyze_text(text, language))
    }

    /// Number of lines currently cached.
    pub fn cached_lines(&self) -> usize {
        self.lock_cache().len()
    }

    fn lock_cache(&self) -> MutexGuard<'_, LineCache> {
        // The cache is always left consistent, so a poisoned lock is still usable
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Analyze a line without consulting any cache.
pub fn compute_line(line: &str, hyphenator: &dyn Hyphenator) -> LineStats {
    let class = classify(line);
    if class.is_marker() {
        return LineStats::marker(line, class.is_header, class.is_comment);
    }

    let tokens: Vec<_> = tokenize(line)
        .into_iter()
        .map(|raw| analyze_token(raw, hyphenator))
        .collect();
    let syllable_count = tokens.iter().map(|t| t.syllable_count).sum();

    LineStats {
        text: line.to_string(),
        is_header: false,
        is_comment: false,
        syllable_count,
        tokens,
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use crate::services::hyphenator::TableHyphenator;
    use crate::types::TokenKind;

    fn analyzer(capacity: usize) -> LineAnalyzer {
        let table = TableHyphenator::new()
            .with_word(&["beau", "ti", "ful"])
            .with_word(&["hel", "lo"])
            .with_word(&["wun", "der", "bar"]);
        LineAnalyzer::new(HyphenatorSet::uniform(Arc::new(table)), capacity)
    }

    #[test]
    fn test_content_line_counts_syllables() {
        let line = analyzer(10).analyze_line("Hello, beautiful world!", Language::English);
        assert!(!line.is_header && !line.is_comment);
        assert_eq!(line.syllable_count, 2 + 3 + 1);
        assert_eq!(line.tokens.len(), 5);
        assert_eq!(line.tokens[0].syllables, vec!["Hel", "lo,"]);
        assert_eq!(line.tokens[1].kind, TokenKind::Whitespace);
        assert_eq!(line.tokens[4].syllables, vec!["world!"]);
    }

    #[test]
    fn test_header_and_comment_lines() {
        let analyzer = analyzer(10);

        let header = analyzer.analyze_line("[Chorus]", Language::English);
        assert!(header.is_header);
        assert_eq!(header.syllable_count, 0);
        assert_eq!(header.tokens.len(), 1);
        assert_eq!(header.tokens[0].raw, "[Chorus]");

        let comment = analyzer.analyze_line("# fix this", Language::English);
        assert!(comment.is_comment);
        assert_eq!(comment.syllable_count, 0);
        assert_eq!(comment.tokens[0].syllables, vec!["# fix this"]);
    }

    #[test]
    fn test_empty_line() {
        let line = analyzer(10).analyze_line("", Language::German);
        assert!(!line.is_header && !line.is_comment);
        assert_eq!(line.syllable_count, 0);
        assert_eq!(line.tokens.len(), 1);
        assert!(line.tokens[0].raw.is_empty());
        assert!(line.tokens[0].syllables.is_empty());
    }

    #[test]
    fn test_tokens_reconstruct_line() {
        let text = "  wunderbar... (hello)\t— beautiful  ";
        let line = analyzer(10).analyze_line(text, Language::German);
        let raw: String = line.tokens.iter().map(|t| t.raw.as_str()).collect();
        assert_eq!(raw, text);
        for token in &line.tokens {
            assert_eq!(token.syllables.concat(), token.raw);
        }
    }

    #[test]
    fn test_cache_hit_returns_same_result() {
        let analyzer = analyzer(10);
        let first = analyzer.analyze_line("hello there", Language::English);
        let second = analyzer.analyze_line("hello there", Language::English);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(*first, compute_line("hello there", analyzer.hyphenators.get(Language::English)));
        assert_eq!(analyzer.cached_lines(), 1);
    }

    #[test]
    fn test_cache_distinguishes_language_and_whitespace() {
        let analyzer = analyzer(10);
        analyzer.analyze_line("hello", Language::English);
        analyzer.analyze_line("hello", Language::German);
        analyzer.analyze_line("hello ", Language::English);
        assert_eq!(analyzer.cached_lines(), 3);
    }

    #[test]
    fn test_cache_stays_bounded() {
        let analyzer = analyzer(10);
        for i in 0..25 {
            analyzer.analyze_line(&format!("line {i}"), Language::English);
        }
        assert!(analyzer.cached_lines() <= 10);
    }

    #[test]
    fn test_analyze_text_preserves_order() {
        let lines = analyzer(10).analyze_text("[Verse]\nhello\n\nbeautiful", Language::English);
        let texts: Vec<&str> = lines.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["[Verse]", "hello", "", "beautiful"]);
    }

    #[test]
    fn test_analyze_document() {
        let doc = analyzer(10).analyze_document("[Verse]\none two\n# note\n", Language::English);
        assert_eq!(doc.word_count, 2);
        assert_eq!(doc.total_syllables, 2);
        assert!((doc.avg_syllables_per_line - 2.0).abs() < f64::EPSILON);
        assert_eq!(doc.lines.len(), 4);
    }

    #[test]
    fn test_shared_across_threads() {
        let analyzer = Arc::new(analyzer(100));
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let analyzer = Arc::clone(&analyzer);
                std::thread::spawn(move || analyzer.analyze_line("beautiful hello", Language::English).syllable_count)
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), 5);
        }
    }
}
