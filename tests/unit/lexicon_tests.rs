/*!
 * Tests for function-word classification
 */

use scansion::analysis::lexicon::{
    ARTICLES, AUXILIARIES, CONJUNCTIONS, CONTEXTUAL, PREPOSITIONS, PRONOUNS, is_contextual,
    is_word_stressed, pos_tag,
};

#[test]
fn test_is_word_stressed_withArticles_shouldBeUnstressed() {
    for word in ARTICLES {
        assert!(!is_word_stressed(word), "word: {word}");
    }
}

#[test]
fn test_is_word_stressed_withFunctionWordCategories_shouldBeUnstressed() {
    for word in CONJUNCTIONS.iter().chain(PRONOUNS).chain(PREPOSITIONS).chain(AUXILIARIES) {
        assert!(!is_word_stressed(word), "word: {word}");
    }
}

#[test]
fn test_is_word_stressed_withContentWords_shouldBeStressed() {
    for word in ["cat", "sat", "beautiful", "love", "scream"] {
        assert!(is_word_stressed(word), "word: {word}");
    }
}

#[test]
fn test_is_word_stressed_withContextualWords_shouldDefaultToStressed() {
    for word in CONTEXTUAL {
        assert!(is_word_stressed(word), "word: {word}");
    }
}

#[test]
fn test_is_word_stressed_withUnknownWord_shouldDefaultToStressed() {
    assert!(is_word_stressed("zyzzyva"));
    assert!(is_word_stressed("xylophone"));
}

#[test]
fn test_is_word_stressed_shouldNormalizeCaseAndPunctuation() {
    assert!(!is_word_stressed("The"));
    assert!(!is_word_stressed("\"and\""));
    assert!(is_word_stressed("Cat,"));
}

#[test]
fn test_is_contextual_shouldMatchOnlyContextualSet() {
    assert!(is_contextual("there"));
    assert!(is_contextual("Where?"));
    assert!(!is_contextual("the"));
    assert!(!is_contextual("cat"));
}

#[test]
fn test_pos_tag_shouldMapCategories() {
    assert_eq!(pos_tag("an"), "DET");
    assert_eq!(pos_tag("but"), "CCONJ");
    assert_eq!(pos_tag("they"), "PRON");
    assert_eq!(pos_tag("from"), "ADP");
    assert_eq!(pos_tag("should"), "AUX");
    assert_eq!(pos_tag("melody"), "");
}
