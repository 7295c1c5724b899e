/*!
 * Pronunciation resolution strategies.
 *
 * Stress resolution is an ordered chain of resolvers, each returning an
 * optional resolution; the first non-empty result wins and the analyzer's
 * built-in heuristic terminates the chain. This keeps the layering explicit
 * and lets new resolvers (a learned stress predictor, say) slot in without
 * touching the analyzer's control flow.
 *
 * - `cmu`: local CMU pronouncing dictionary
 * - `g2p`: external grapheme-to-phoneme HTTP service
 * - `mock`: scripted resolver for testing
 */

use std::fmt::Debug;

use async_trait::async_trait;

use crate::analysis::types::{StressPattern, Syllable};
use crate::errors::ResolverError;

pub mod cmu;
pub mod g2p;
pub mod mock;

pub use cmu::{CmuDictionary, CmuResolver};
pub use g2p::{G2pClient, G2pResolver};
pub use mock::{MockBehavior, MockResolver};

/// A successful stress resolution for one word
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    /// The resolved stress pattern, carrying the resolver's syllable split
    pub pattern: StressPattern,

    /// Decision-path label ("dictionary", "g2p", ...)
    pub reasoning: String,
}

/// Common trait for all stress resolution strategies
///
/// Resolvers are only consulted for multi-syllable words; single-syllable
/// words always take the classifier/heuristic path. A resolver failure is
/// never fatal: the caller logs it and falls through to the next strategy.
#[async_trait]
pub trait StressResolver: Send + Sync + Debug {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Resolve a normalized (lowercase, alphabetic-only) word.
    ///
    /// `Ok(None)` is a miss; `Err` is a lookup failure the caller absorbs.
    async fn resolve(&self, word: &str) -> Result<Option<Resolution>, ResolverError>;
}

/// Extract per-vowel stress digits from ARPAbet-style phonemes.
///
/// Vowel phonemes carry a trailing stress digit (`AH0`, `EY1`, `OW2`);
/// consonants carry none. The digit sequence therefore is the per-syllable
/// stress pattern, one entry per nucleus.
pub fn stress_digits<S: AsRef<str>>(phonemes: &[S]) -> Vec<u8> {
    phonemes
        .iter()
        .filter_map(|p| {
            p.as_ref()
                .chars()
                .last()
                .and_then(|c| c.to_digit(10))
                .map(|d| d.min(2) as u8)
        })
        .collect()
}

/// Build a stress pattern from aligned syllable texts and stress digits.
///
/// Any digit >= 1 (primary or secondary) maps to `stressed = true`; the
/// emitted levels stay binary. Returns `None` when the alignment does not
/// hold, which the caller treats as a miss.
pub fn pattern_from_alignment(syllables: Vec<String>, stress: &[u8], confidence: f64) -> Option<StressPattern> {
    if syllables.len() != stress.len() {
        return None;
    }
    let syllables = syllables
        .into_iter()
        .zip(stress)
        .enumerate()
        .map(|(position, (text, &digit))| Syllable::new(text, digit >= 1, confidence, position))
        .collect();
    StressPattern::new(syllables).ok()
}
