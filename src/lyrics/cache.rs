//! Bounded per-line result cache with batched FIFO eviction.
//!
//! Entries are keyed by language and the exact line text. Lookups never
//! change the eviction order; when the cache is full the oldest tenth of
//! the capacity is dropped in one batch before the new entry goes in.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use super::stats::LineStats;
use crate::constants;
use crate::types::Language;

/// Insertion-ordered cache of analyzed lines.
#[derive(Debug)]
pub struct LineCache {
    capacity: usize,
    entries: HashMap<Language, HashMap<String, Arc<LineStats>>>,
    /// Keys in insertion order, oldest first
    order: VecDeque<(Language, String)>,
}

impl LineCache {
    /// Create an empty cache holding at most `capacity` lines (minimum 1).
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            entries: HashMap::new(),
            order: VecDeque::new(),
        }
    }

    /// Maximum number of entries.
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of entries dropped when inserting into a full cache.
    pub const fn eviction_batch(&self) -> usize {
        let batch = self.capacity * constants::cache::EVICTION_PERCENT / 100;
        if batch == 0 { 1 } else { batch }
    }

    /// Current number of entries.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Look up a previously analyzed line.
    pub fn get(&self, language: Language, text: &str) -> Option<Arc<LineStats>> {
        self.entries.get(&language)?.get(text).map(Arc::clone)
    }

    /// Whether an entry exists for the key.
    pub fn contains(&self, language: Language, text: &str) -> bool {
        self.entries
            .get(&language)
            .is_some_and(|lines| lines.contains_key(text))
    }

    /// Store an analyzed line, evicting the oldest batch first if full.
    ///
    /// Returns the number of evicted entries. Storing an existing key
    /// replaces its value and keeps its position.
    pub fn put(&mut self, language: Language, text: String, stats: Arc<LineStats>) -> usize {
        if let Some(existing) = self
            .entries
            .get_mut(&language)
            .and_then(|lines| lines.get_mut(&text))
        {
            *existing = stats;
            return 0;
        }

        let evicted = if self.order.len() >= self.capacity {
            self.evict_oldest(self.eviction_batch())
        } else {
            0
        };

        self.entries
            .entry(language)
            .or_default()
            .insert(text.clone(), stats);
        self.order.push_back((language, text));
        evicted
    }

    fn evict_oldest(&mut self, count: usize) -> usize {
        let mut evicted = 0;
        while evicted < count {
            let Some((language, text)) = self.order.pop_front() else {
                break;
            };
            if let Some(lines) = self.entries.get_mut(&language) {
                lines.remove(&text);
            }
            evicted += 1;
        }
        tracing::debug!(evicted, remaining = self.order.len(), "Line cache evicted oldest entries");
        evicted
    }
}
