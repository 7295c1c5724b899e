/*!
 * Heuristic stress assignment.
 *
 * Assigns a stress pattern to a syllabified word when no dictionary or G2P
 * resolution exists, using syllable-count-dependent rules with fixed
 * confidence values. The confidence constants below are a contract with
 * downstream consumers (UI highlighting of low-confidence guesses): new
 * values must not be introduced ad hoc.
 */

use super::lexicon::is_word_stressed;
use super::syllabify::clean_word;
use super::types::{StressPattern, Syllable};

/// Dictionary entries without their own confidence value
pub const DICTIONARY_CONFIDENCE: f64 = 1.0;

/// G2P-derived patterns
pub const G2P_CONFIDENCE: f64 = 0.8;

/// Monosyllables classified as stressed content words
pub const MONOSYLLABLE_CONTENT_CONFIDENCE: f64 = 0.9;

/// Monosyllables classified as unstressed function words
pub const MONOSYLLABLE_FUNCTION_CONFIDENCE: f64 = 0.8;

/// Two-syllable words: stress the first syllable
pub const DISYLLABLE_CONFIDENCE: f64 = 0.5;

/// Three or more syllables: stress the penultimate
pub const POLYSYLLABLE_CONFIDENCE: f64 = 0.4;

/// Assign stress to a syllabified word by rule.
///
/// Never fails; a zero-syllable input is a precondition violation the
/// caller must have filtered, and degrades to a single unstressed syllable
/// of the cleaned word.
pub fn assign_heuristic_stress(word: &str, syllables: &[String]) -> StressPattern {
    debug_assert!(!syllables.is_empty(), "caller must filter empty syllabifications");

    let (stressed_index, confidence) = match syllables.len() {
        0 => {
            let syllable = Syllable::new(clean_word(word), false, 0.0, 0);
            return StressPattern::new(vec![syllable]).expect("single syllable is non-empty");
        }
        1 => {
            if is_word_stressed(word) {
                (Some(0), MONOSYLLABLE_CONTENT_CONFIDENCE)
            } else {
                // Function words are classified with high confidence, but
                // nothing in the word is stressed.
                (None, MONOSYLLABLE_FUNCTION_CONFIDENCE)
            }
        }
        2 => (Some(0), DISYLLABLE_CONFIDENCE),
        count => (Some(count - 2), POLYSYLLABLE_CONFIDENCE),
    };

    let syllables = syllables
        .iter()
        .enumerate()
        .map(|(position, text)| {
            Syllable::new(text.clone(), stressed_index == Some(position), confidence, position)
        })
        .collect();

    StressPattern::new(syllables).expect("input syllables are non-empty")
}

/// Reasoning label for the heuristic path, matching the rule that fired
pub fn heuristic_reasoning(word: &str, syllable_count: usize) -> &'static str {
    match syllable_count {
        0 => "fallback: empty",
        1 => {
            if is_word_stressed(word) {
                "function-word: stressed"
            } else {
                "function-word: unstressed"
            }
        }
        2 => "heuristic: initial",
        _ => "heuristic: penultimate",
    }
}
