/*!
 * Tests for dictionary loading and resolver strategies
 */

use std::path::Path;

use scansion::dictionary::{
    CmuDictionary, CmuResolver, MockResolver, StressResolver, stress_digits,
};
use scansion::errors::{DictionaryError, ResolverError};

use crate::common;

#[test]
fn test_cmu_load_withMissingFile_shouldReturnNotFound() {
    let result = CmuDictionary::load(Path::new("/nonexistent/cmudict-0.7b"));
    assert!(matches!(result, Err(DictionaryError::NotFound(_))));
}

#[test]
fn test_cmu_load_withSampleFile_shouldParseEntries() {
    let dir = common::create_temp_dir().unwrap();
    let path = common::write_sample_dictionary(&dir).unwrap();

    let dictionary = CmuDictionary::load(&path).unwrap();
    assert!(dictionary.has_word("walking"));
    assert!(dictionary.has_word("banana"));
    assert!(!dictionary.has_word("zyzzyva"));
}

#[test]
fn test_cmu_parse_shouldSkipCommentsAndVariantEntries() {
    let dictionary = common::sample_dictionary();
    // 6 sample lines: one comment, one variant, five distinct words.
    assert_eq!(dictionary.len(), 5);
}

#[test]
fn test_cmu_entry_shouldCarryAlignedSyllablesAndStress() {
    let dictionary = common::sample_dictionary();

    let entry = dictionary.lookup("banana").unwrap();
    assert_eq!(entry.stress, vec![0, 1, 0]);
    assert_eq!(entry.syllables.len(), 3);
    assert_eq!(entry.syllables.concat(), "banana");

    let entry = dictionary.lookup("walking").unwrap();
    assert_eq!(entry.stress, vec![1, 0]);
    assert_eq!(entry.syllables.concat(), "walking");
}

#[test]
fn test_cmu_lookup_shouldNormalizeKeys() {
    let dictionary = common::sample_dictionary();
    assert!(dictionary.lookup("Walking").is_some());
    assert!(dictionary.lookup("WALKING,").is_some());
}

#[test]
fn test_cmu_stats_shouldCountStressedWords() {
    let dictionary = common::sample_dictionary();
    let stats = dictionary.stats();
    assert_eq!(stats.total_words, 5);
    // "the" (DH AH0) has no stressed syllable.
    assert_eq!(stats.words_with_stress, 4);
}

#[test]
fn test_stress_digits_shouldExtractVowelDigitsOnly() {
    let phonemes = ["B", "AH0", "N", "AE1", "N", "AH0"];
    assert_eq!(stress_digits(&phonemes), vec![0, 1, 0]);
    assert!(stress_digits(&["HH", "M"]).is_empty());
}

#[tokio::test]
async fn test_cmu_resolver_withKnownWord_shouldResolveWithDictionaryReasoning() {
    let resolver = CmuResolver::new(common::sample_dictionary());

    let resolution = resolver.resolve("remember").await.unwrap().unwrap();
    assert_eq!(resolution.reasoning, "dictionary");
    assert_eq!(resolution.pattern.stress_levels(), vec![0, 1, 0]);
    assert_eq!(resolution.pattern.confidence(), 1.0);
}

#[tokio::test]
async fn test_cmu_resolver_withUnknownWord_shouldMiss() {
    let resolver = CmuResolver::new(common::sample_dictionary());
    assert!(resolver.resolve("zyzzyva").await.unwrap().is_none());
}

#[tokio::test]
async fn test_mock_resolver_working_shouldAnswerFromTable() {
    let resolver = MockResolver::working().with_entry("melody", &["mel", "o", "dy"], &[1, 0, 0], 1.0);

    let resolution = resolver.resolve("melody").await.unwrap().unwrap();
    assert_eq!(resolution.pattern.stress_levels(), vec![1, 0, 0]);
    assert!(resolver.resolve("other").await.unwrap().is_none());
    assert_eq!(resolver.request_count(), 2);
}

#[tokio::test]
async fn test_mock_resolver_failing_shouldAlwaysError() {
    let resolver = MockResolver::failing();
    let result = resolver.resolve("anything").await;
    assert!(matches!(result, Err(ResolverError::RequestFailed(_))));
}

#[tokio::test]
async fn test_mock_resolver_intermittent_shouldFailEveryNth() {
    let resolver = MockResolver::intermittent(2).with_entry("melody", &["mel", "o", "dy"], &[1, 0, 0], 1.0);

    assert!(resolver.resolve("melody").await.is_ok());
    assert!(resolver.resolve("melody").await.is_err());
    assert!(resolver.resolve("melody").await.is_ok());
    assert!(resolver.resolve("melody").await.is_err());
}

#[tokio::test]
async fn test_mock_resolver_slow_shouldStillAnswer() {
    let resolver = MockResolver::slow(10).with_entry("melody", &["mel", "o", "dy"], &[1, 0, 0], 1.0);
    let resolution = resolver.resolve("melody").await.unwrap();
    assert!(resolution.is_some());
}
