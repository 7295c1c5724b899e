/*!
 * Word- and line-level stress analysis.
 *
 * Orchestrates per-word resolution through the strategy chain
 * (dictionary/G2P resolvers, then the built-in heuristic) and assembles
 * line-level records with aggregated syllable and stress totals.
 *
 * Failure policy: nothing a single word does can abort a line. Resolver
 * errors are logged and fall through to the next strategy; tokens that
 * clean down to nothing yield a well-formed empty result with zero
 * confidence.
 */

use std::sync::Arc;
use std::time::Instant;

use log::warn;

use super::cache::{AnalysisCache, CachedAnalysis};
use super::heuristics::{assign_heuristic_stress, heuristic_reasoning};
use super::lexicon::pos_tag;
use super::syllabify::{clean_word, syllabify};
use super::types::{LineAnalysis, WordAnalysis};
use crate::dictionary::StressResolver;

/// A whitespace-delimited, punctuation-trimmed token with its start offset
/// (in chars) within the original line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Token text, edge punctuation removed, interior characters kept
    pub text: String,

    /// Char offset of the token's first kept character
    pub start: usize,
}

/// Split a line into word tokens, retaining start offsets.
///
/// Tokens are whitespace-delimited; leading and trailing non-alphanumeric
/// characters are trimmed so `"Hello,"` and `"(world)"` tokenize to their
/// bare words, while interior apostrophes ("don't") survive. Tokens with no
/// alphanumeric characters at all are dropped.
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut span: Vec<char> = Vec::new();
    let mut span_start = 0usize;

    let mut flush = |span: &mut Vec<char>, span_start: usize| {
        if span.is_empty() {
            return;
        }
        let mut lead = 0;
        while lead < span.len() && !span[lead].is_alphanumeric() {
            lead += 1;
        }
        let mut tail = span.len();
        while tail > lead && !span[tail - 1].is_alphanumeric() {
            tail -= 1;
        }
        if tail > lead {
            tokens.push(Token {
                text: span[lead..tail].iter().collect(),
                start: span_start + lead,
            });
        }
        span.clear();
    };

    for (i, c) in text.chars().enumerate() {
        if c.is_whitespace() {
            flush(&mut span, span_start);
        } else {
            if span.is_empty() {
                span_start = i;
            }
            span.push(c);
        }
    }
    flush(&mut span, span_start);
    tokens
}

/// Per-word and per-line stress analyzer
pub struct StressAnalyzer {
    /// Resolution strategies, tried in order for multi-syllable words
    resolvers: Vec<Arc<dyn StressResolver>>,

    /// Memoization cache keyed by normalized word
    cache: AnalysisCache,
}

impl StressAnalyzer {
    /// Create an analyzer with the given strategy chain and cache
    pub fn new(resolvers: Vec<Arc<dyn StressResolver>>, cache: AnalysisCache) -> Self {
        Self { resolvers, cache }
    }

    /// An analyzer with no resolvers: syllabifier + heuristics only
    pub fn heuristic_only() -> Self {
        Self::new(Vec::new(), AnalysisCache::default())
    }

    /// The analyzer's cache, for stats and external overrides
    pub fn cache(&self) -> &AnalysisCache {
        &self.cache
    }

    /// Analyze a single word in isolation
    pub async fn analyze_word(&self, word: &str) -> WordAnalysis {
        self.analyze_word_at(word, 0).await
    }

    /// Analyze a word token anchored at `start` chars into its line
    async fn analyze_word_at(&self, word: &str, start: usize) -> WordAnalysis {
        let clean = clean_word(word);
        if clean.is_empty() {
            return WordAnalysis::empty(word);
        }

        let resolved = match self.cache.get(&clean) {
            Some(cached) => cached,
            None => {
                let syllables = syllabify(&clean);
                let resolved = self.resolve_word(&clean, &syllables).await;
                self.cache.store(&clean, resolved.clone());
                resolved
            }
        };

        build_word_analysis(word, start, &resolved)
    }

    /// Run the strategy chain for a word.
    ///
    /// Resolvers are only consulted for multi-syllable words; the heuristic
    /// terminates the chain and always produces a pattern.
    async fn resolve_word(&self, clean: &str, syllables: &[String]) -> CachedAnalysis {
        if syllables.len() >= 2 {
            for resolver in &self.resolvers {
                match resolver.resolve(clean).await {
                    Ok(Some(resolution)) => {
                        return CachedAnalysis {
                            pattern: resolution.pattern,
                            reasoning: resolution.reasoning,
                        };
                    }
                    Ok(None) => {}
                    Err(e) => {
                        warn!("{} lookup failed for '{}': {}", resolver.name(), clean, e);
                    }
                }
            }
        }

        CachedAnalysis {
            pattern: assign_heuristic_stress(clean, syllables),
            reasoning: heuristic_reasoning(clean, syllables.len()).to_string(),
        }
    }

    /// Analyze one line of text
    pub async fn analyze_line(&self, text: &str) -> LineAnalysis {
        let started = Instant::now();

        let mut words = Vec::new();
        for token in tokenize(text) {
            words.push(self.analyze_word_at(&token.text, token.start).await);
        }

        let total_syllables = words.iter().map(WordAnalysis::syllable_count).sum();
        let stressed_syllables = words.iter().map(WordAnalysis::stressed_count).sum();

        LineAnalysis {
            text: text.to_string(),
            total_syllables,
            stressed_syllables,
            processing_time_ms: started.elapsed().as_secs_f64() * 1000.0,
            words,
        }
    }
}

/// Project a resolved pattern onto the surface word: texts, binary stress
/// levels, and prefix-sum char positions anchored at the token offset.
fn build_word_analysis(word: &str, start: usize, resolved: &CachedAnalysis) -> WordAnalysis {
    let syllables = resolved.pattern.texts();
    let mut char_positions = Vec::with_capacity(syllables.len());
    let mut offset = start;
    for text in &syllables {
        char_positions.push(offset);
        offset += text.chars().count();
    }

    WordAnalysis {
        word: word.to_string(),
        pos: pos_tag(word).to_string(),
        stress_pattern: resolved.pattern.stress_levels(),
        reasoning: resolved.reasoning.clone(),
        confidence: resolved.pattern.confidence(),
        syllables,
        char_positions,
    }
}
