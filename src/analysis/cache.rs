/*!
 * Word-level memoization cache.
 *
 * Caches resolved stress patterns keyed by normalized word text so that
 * repeated words ("the" in nearly every line) skip dictionary and heuristic
 * work. The cache is an injected dependency of the analyzer, never a
 * global, so tests can swap it for a disabled one.
 */

use std::collections::HashMap;
use std::sync::Arc;

use log::debug;
use parking_lot::RwLock;

use super::types::StressPattern;

/// A memoized resolution: the pattern plus the reasoning that produced it,
/// so a cache hit replays the original analysis byte-for-byte.
#[derive(Debug, Clone, PartialEq)]
pub struct CachedAnalysis {
    /// Resolved stress pattern
    pub pattern: StressPattern,

    /// Decision-path label of the original resolution
    pub reasoning: String,
}

/// Cache hit/miss counters and current size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    /// Number of lookups answered from the cache
    pub hits: usize,

    /// Number of lookups that fell through to resolution
    pub misses: usize,

    /// Number of entries currently cached
    pub entries: usize,
}

impl CacheStats {
    /// Fraction of lookups answered from the cache
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total > 0 {
            self.hits as f64 / total as f64
        } else {
            0.0
        }
    }
}

/// Memoization cache for per-word stress resolutions
pub struct AnalysisCache {
    /// Internal cache storage, keyed by normalized word
    entries: Arc<RwLock<HashMap<String, CachedAnalysis>>>,

    /// Cache hit counter
    hits: Arc<RwLock<usize>>,

    /// Cache miss counter
    misses: Arc<RwLock<usize>>,

    /// Whether caching is enabled
    enabled: bool,
}

impl AnalysisCache {
    /// Create a new cache
    pub fn new(enabled: bool) -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            hits: Arc::new(RwLock::new(0)),
            misses: Arc::new(RwLock::new(0)),
            enabled,
        }
    }

    /// Look up a word. Counts a hit or miss unless the cache is disabled.
    pub fn get(&self, word: &str) -> Option<CachedAnalysis> {
        if !self.enabled {
            return None;
        }

        let entries = self.entries.read();
        match entries.get(word) {
            Some(cached) => {
                let mut hits = self.hits.write();
                *hits += 1;
                debug!("Cache hit for '{}'", word);
                Some(cached.clone())
            }
            None => {
                let mut misses = self.misses.write();
                *misses += 1;
                debug!("Cache miss for '{}'", word);
                None
            }
        }
    }

    /// Store a resolution for a word.
    ///
    /// An existing entry whose pattern carries a manual override is kept
    /// as-is: re-running analysis must never clear a human-set value.
    /// Concurrent writers for the same word compute equivalent values, so
    /// last-writer-wins is fine everywhere else.
    pub fn store(&self, word: &str, analysis: CachedAnalysis) {
        if !self.enabled {
            return;
        }

        let mut entries = self.entries.write();
        if let Some(existing) = entries.get(word) {
            if existing.pattern.is_overridden() {
                debug!("Keeping overridden cache entry for '{}'", word);
                return;
            }
        }
        entries.insert(word.to_string(), analysis);
    }

    /// Get cache statistics
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: *self.hits.read(),
            misses: *self.misses.read(),
            entries: self.entries.read().len(),
        }
    }

    /// Clear the cache and reset the counters
    pub fn clear(&self) {
        self.entries.write().clear();
        *self.hits.write() = 0;
        *self.misses.write() = 0;
        debug!("Analysis cache cleared");
    }

    /// Number of entries in the cache
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Check if the cache is empty
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Check if the cache is enabled
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

impl Default for AnalysisCache {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Clone for AnalysisCache {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
            hits: self.hits.clone(),
            misses: self.misses.clone(),
            enabled: self.enabled,
        }
    }
}
