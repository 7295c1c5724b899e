/*!
 * Function-word classification.
 *
 * Fixed lexical sets deciding stress for monosyllabic words by grammatical
 * category. The lists are static data rather than code branches so they can
 * be unit-tested and extended without touching control flow.
 */

use std::collections::HashSet;

use once_cell::sync::Lazy;

use super::syllabify::clean_word;

/// Articles and determiners
pub const ARTICLES: &[&str] = &["a", "an", "the"];

/// Coordinating conjunctions
pub const CONJUNCTIONS: &[&str] = &["and", "but", "or", "nor", "for", "so", "yet"];

/// Personal pronouns
pub const PRONOUNS: &[&str] = &[
    "i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us", "them",
];

/// Common monosyllabic prepositions
pub const PREPOSITIONS: &[&str] = &[
    "at", "by", "in", "of", "on", "to", "up", "as", "if", "off", "out", "with", "from",
];

/// Modal and auxiliary verbs
pub const AUXILIARIES: &[&str] = &[
    "am", "is", "are", "was", "were", "be", "been", "do", "does", "did", "has", "have", "had",
    "can", "could", "will", "would", "shall", "should", "may", "might", "must",
];

/// Words whose stress depends on grammatical role (interrogative vs.
/// expletive, locative vs. dummy subject). Treated as stressed by default,
/// the more common reading in lyrics.
pub const CONTEXTUAL: &[&str] = &["there", "here", "where", "when", "how", "why", "what"];

/// Union of all unstressed function-word categories
static UNSTRESSED_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    ARTICLES
        .iter()
        .chain(CONJUNCTIONS)
        .chain(PRONOUNS)
        .chain(PREPOSITIONS)
        .chain(AUXILIARIES)
        .copied()
        .collect()
});

static CONTEXTUAL_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| CONTEXTUAL.iter().copied().collect());

/// Decide whether a word is stressed in normal speech.
///
/// Total function with no error case: function words are unstressed,
/// contextual words and unknown (content) words default to stressed. Only
/// meaningful for single-syllable words but callable on any word.
pub fn is_word_stressed(word: &str) -> bool {
    let clean = clean_word(word);
    if UNSTRESSED_SET.contains(clean.as_str()) {
        return false;
    }
    // Contextual interrogatives/demonstratives and unknown content words
    // both default to stressed.
    true
}

/// Coarse part-of-speech tag for a word, derived from the lexical sets.
///
/// Content words get an empty tag: without a real tagger the engine only
/// knows the closed classes. The tags use the Universal POS inventory the
/// way the original annotations did.
pub fn pos_tag(word: &str) -> &'static str {
    let clean = clean_word(word);
    let clean = clean.as_str();
    if ARTICLES.contains(&clean) {
        "DET"
    } else if CONJUNCTIONS.contains(&clean) {
        "CCONJ"
    } else if PRONOUNS.contains(&clean) {
        "PRON"
    } else if PREPOSITIONS.contains(&clean) {
        "ADP"
    } else if AUXILIARIES.contains(&clean) {
        "AUX"
    } else {
        ""
    }
}

/// Whether a word is in the contextual set
pub fn is_contextual(word: &str) -> bool {
    CONTEXTUAL_SET.contains(clean_word(word).as_str())
}
