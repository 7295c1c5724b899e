/*!
 * CMU Pronouncing Dictionary loading and lookup.
 *
 * Parses the plain-text `cmudict-0.7b` format into an in-memory map keyed
 * by normalized lowercase word. Entries whose phoneme syllable count cannot
 * be aligned onto the orthography are skipped at load time, so every stored
 * entry satisfies the syllable/stress length invariant.
 */

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, info};

use super::{Resolution, StressResolver, pattern_from_alignment, stress_digits};
use crate::analysis::heuristics::DICTIONARY_CONFIDENCE;
use crate::analysis::syllabify::{approximate_syllables, clean_word};
use crate::errors::{DictionaryError, ResolverError};

/// One dictionary entry, aligned onto the orthographic word
#[derive(Debug, Clone, PartialEq)]
pub struct CmuEntry {
    /// Orthographic syllable split; concatenates to the entry's key
    pub syllables: Vec<String>,

    /// Stress digit per syllable: 0 unstressed, 1 primary, 2 secondary
    pub stress: Vec<u8>,

    /// Entry confidence; dictionary data is authoritative
    pub confidence: f64,
}

/// Summary counts for status reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DictionaryStats {
    /// Total entries loaded
    pub total_words: usize,

    /// Entries with at least one stressed syllable
    pub words_with_stress: usize,
}

/// In-memory CMU pronouncing dictionary
#[derive(Debug, Default)]
pub struct CmuDictionary {
    entries: HashMap<String, CmuEntry>,
}

impl CmuDictionary {
    /// Load and parse a dictionary file.
    ///
    /// A missing or unreadable file is a configuration-level failure; the
    /// caller decides whether to run degraded without a dictionary.
    pub fn load(path: &Path) -> Result<Self, DictionaryError> {
        if !path.exists() {
            return Err(DictionaryError::NotFound(path.display().to_string()));
        }

        // cmudict-0.7b is latin-1; lossy decoding only mangles a few
        // comment lines, never entry keys.
        let bytes = fs::read(path).map_err(|e| DictionaryError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let content = String::from_utf8_lossy(&bytes);

        let dictionary = Self::parse(&content);
        info!(
            "Loaded {} pronunciation entries from {}",
            dictionary.len(),
            path.display()
        );
        Ok(dictionary)
    }

    /// Parse dictionary content in `WORD  PH1 PH2 ...` format
    pub fn parse(content: &str) -> Self {
        let mut entries = HashMap::new();
        let mut skipped = 0usize;

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with(";;;") {
                continue;
            }

            let mut parts = line.split_whitespace();
            let Some(word) = parts.next() else { continue };
            // Variant pronunciations like WORD(1) keep only the base entry.
            if word.contains('(') {
                continue;
            }

            let key = clean_word(word);
            if key.is_empty() {
                continue;
            }

            let phonemes: Vec<&str> = parts.collect();
            let stress = stress_digits(&phonemes);
            if stress.is_empty() {
                skipped += 1;
                continue;
            }
            let Some(syllables) = approximate_syllables(&key, stress.len()) else {
                skipped += 1;
                continue;
            };

            entries.insert(
                key,
                CmuEntry {
                    syllables,
                    stress,
                    confidence: DICTIONARY_CONFIDENCE,
                },
            );
        }

        if skipped > 0 {
            debug!("Skipped {} unalignable dictionary entries", skipped);
        }
        Self { entries }
    }

    /// Look up an entry by word, normalizing the key
    pub fn lookup(&self, word: &str) -> Option<&CmuEntry> {
        self.entries.get(clean_word(word).as_str())
    }

    /// Check if a word exists in the dictionary
    pub fn has_word(&self, word: &str) -> bool {
        self.lookup(word).is_some()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the dictionary is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Summary counts for status reporting
    pub fn stats(&self) -> DictionaryStats {
        DictionaryStats {
            total_words: self.entries.len(),
            words_with_stress: self
                .entries
                .values()
                .filter(|e| e.stress.iter().any(|&s| s > 0))
                .count(),
        }
    }
}

/// Resolver strategy backed by the local CMU dictionary
#[derive(Debug)]
pub struct CmuResolver {
    dictionary: Arc<CmuDictionary>,
}

impl CmuResolver {
    /// Create a resolver over a shared dictionary
    pub fn new(dictionary: Arc<CmuDictionary>) -> Self {
        Self { dictionary }
    }
}

#[async_trait]
impl StressResolver for CmuResolver {
    fn name(&self) -> &'static str {
        "dictionary"
    }

    async fn resolve(&self, word: &str) -> Result<Option<Resolution>, ResolverError> {
        let resolution = self.dictionary.lookup(word).and_then(|entry| {
            pattern_from_alignment(entry.syllables.clone(), &entry.stress, entry.confidence).map(
                |pattern| Resolution {
                    pattern,
                    reasoning: "dictionary".to_string(),
                },
            )
        });
        Ok(resolution)
    }
}
