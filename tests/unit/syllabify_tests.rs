/*!
 * Tests for orthographic syllabification
 */

use scansion::analysis::syllabify::{approximate_syllables, clean_word, syllabify};

#[test]
fn test_clean_word_withMixedInput_shouldKeepLowercaseLetters() {
    assert_eq!(clean_word("Hello!"), "hello");
    assert_eq!(clean_word("don't"), "dont");
    assert_eq!(clean_word("Über"), "über");
    assert_eq!(clean_word("42"), "");
}

#[test]
fn test_syllabify_withEmptyInput_shouldReturnEmptySequence() {
    assert!(syllabify("").is_empty());
    assert!(syllabify("   ").is_empty());
    assert!(syllabify("123!").is_empty());
}

#[test]
fn test_syllabify_withShortWord_shouldReturnSingleSyllable() {
    assert_eq!(syllabify("cat"), vec!["cat"]);
    assert_eq!(syllabify("go"), vec!["go"]);
    assert_eq!(syllabify("I"), vec!["i"]);
}

#[test]
fn test_syllabify_withExceptionWord_shouldReturnSingleSyllable() {
    for word in ["the", "are", "time", "make", "house", "there"] {
        assert_eq!(syllabify(word), vec![word], "word: {word}");
    }
}

#[test]
fn test_syllabify_withSilentE_shouldReturnSingleSyllable() {
    assert_eq!(syllabify("stone"), vec!["stone"]);
    assert_eq!(syllabify("grace"), vec!["grace"]);
    assert_eq!(syllabify("shine"), vec!["shine"]);
}

#[test]
fn test_syllabify_withWalking_shouldSplitIntoTwoSyllables() {
    assert_eq!(syllabify("walking"), vec!["walk", "ing"]);
}

#[test]
fn test_syllabify_withMultisyllableWords_shouldSplitAtVowelGroups() {
    assert_eq!(syllabify("sunset").len(), 2);
    assert_eq!(syllabify("remember").len(), 3);
}

#[test]
fn test_syllabify_concatenation_shouldReproduceCleanWord() {
    for word in [
        "walking",
        "beautiful",
        "remember",
        "yesterday",
        "Supercalifragilistic",
        "don't",
        "HELLO",
    ] {
        let joined: String = syllabify(word).concat();
        assert_eq!(joined, clean_word(word), "word: {word}");
    }
}

#[test]
fn test_syllabify_shouldBeDeterministic() {
    for word in ["walking", "beautiful", "melody"] {
        assert_eq!(syllabify(word), syllabify(word), "word: {word}");
    }
}

#[test]
fn test_approximate_syllables_withFittingCount_shouldPartition() {
    for (word, count) in [("walking", 2), ("beautiful", 3), ("banana", 3), ("remember", 3)] {
        let segments = approximate_syllables(word, count).unwrap();
        assert_eq!(segments.len(), count, "word: {word}");
        assert_eq!(segments.concat(), word, "word: {word}");
        assert!(segments.iter().all(|s| !s.is_empty()), "word: {word}");
    }
}

#[test]
fn test_approximate_syllables_withOversizedCount_shouldReturnNone() {
    assert!(approximate_syllables("be", 3).is_none());
    assert!(approximate_syllables("", 1).is_none());
    assert!(approximate_syllables("word", 0).is_none());
}

#[test]
fn test_approximate_syllables_withSingleCount_shouldReturnWholeWord() {
    assert_eq!(approximate_syllables("cat", 1).unwrap(), vec!["cat"]);
}
