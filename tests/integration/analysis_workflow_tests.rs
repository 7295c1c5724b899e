/*!
 * End-to-end tests: configuration through batch analysis
 */

use scansion::analysis::BatchAnalyzer;
use scansion::app_config::Config;

use crate::common;

fn lines(texts: &[&str]) -> Vec<String> {
    texts.iter().map(|s| s.to_string()).collect()
}

/// Config pointing at the sample dictionary written into `dir`
fn config_with_dictionary(dir: &tempfile::TempDir) -> Config {
    let path = common::write_sample_dictionary(dir).unwrap();
    let mut config = Config::default();
    config.dictionary.path = path.to_string_lossy().into_owned();
    config
}

#[tokio::test]
async fn test_engine_fromConfig_shouldResolveDictionaryWords() {
    let dir = common::create_temp_dir().unwrap();
    let batch = BatchAnalyzer::from_config(&config_with_dictionary(&dir));

    let result = batch.analyze_batch(&lines(&["remember walking home"])).await;
    let words = &result.lines[0].analysis.words;

    assert_eq!(words[0].reasoning, "dictionary");
    assert_eq!(words[0].stress_pattern, vec![0, 1, 0]);
    assert_eq!(words[1].reasoning, "dictionary");
    // "home" is monosyllabic and never reaches the dictionary.
    assert_eq!(words[2].reasoning, "function-word: stressed");
}

#[tokio::test]
async fn test_engine_fromConfig_statusShouldReportDictionary() {
    let dir = common::create_temp_dir().unwrap();
    let batch = BatchAnalyzer::from_config(&config_with_dictionary(&dir));

    let status = batch.status();
    assert!(status.ready);
    assert!(status.dictionary_loaded);
    assert_eq!(status.dictionary_entries, 5);
    assert!(batch.dictionary_error().is_none());
}

#[tokio::test]
async fn test_engine_withMissingDictionaryFile_shouldDegradeNotFail() {
    let mut config = Config::default();
    config.dictionary.path = "/nonexistent/cmudict-0.7b".to_string();
    let batch = BatchAnalyzer::from_config(&config);

    // Startup reports the configuration failure...
    let status = batch.status();
    assert!(!status.ready);
    assert!(!status.dictionary_loaded);
    assert!(batch.dictionary_error().is_some());

    // ...but analysis still works on the heuristic path.
    let result = batch.analyze_batch(&lines(&["walking home"])).await;
    assert_eq!(result.lines[0].analysis.words[0].reasoning, "heuristic: initial");
}

#[tokio::test]
async fn test_engine_withDictionaryDisabled_shouldStayReady() {
    let mut config = Config::default();
    config.dictionary.path = String::new();
    let batch = BatchAnalyzer::from_config(&config);

    let status = batch.status();
    assert!(status.ready);
    assert!(!status.dictionary_loaded);
}

#[tokio::test]
async fn test_manual_override_shouldSurviveReanalysis() {
    let dir = common::create_temp_dir().unwrap();
    let batch = BatchAnalyzer::from_config(&config_with_dictionary(&dir));
    let analyzer = batch.analyzer();

    // First analysis populates the cache with the automatic resolution.
    let first = analyzer.analyze_word("walking").await;
    assert_eq!(first.stress_pattern, vec![1, 0]);

    // A human flips the second syllable.
    let mut edited = analyzer.cache().get("walking").unwrap();
    edited.pattern.override_syllable(1, true).unwrap();
    analyzer.cache().store("walking", edited);

    // Re-running batch analysis must not clear the override.
    let result = batch.analyze_batch(&lines(&["walking walking"])).await;
    for word in &result.lines[0].analysis.words {
        assert_eq!(word.stress_pattern, vec![1, 1]);
    }
    assert!(analyzer.cache().get("walking").unwrap().pattern.is_overridden());
}

#[tokio::test]
async fn test_repeated_analysis_shouldProduceIdenticalResults() {
    let dir = common::create_temp_dir().unwrap();
    let batch = BatchAnalyzer::from_config(&config_with_dictionary(&dir));
    let input = lines(&["The beautiful banana", "walking there alone"]);

    let first = batch.analyze_batch(&input).await;
    let second = batch.analyze_batch(&input).await;

    for (a, b) in first.lines.iter().zip(&second.lines) {
        assert_eq!(a.analysis.words, b.analysis.words);
        assert_eq!(a.analysis.total_syllables, b.analysis.total_syllables);
        assert_eq!(a.analysis.stressed_syllables, b.analysis.stressed_syllables);
    }
}
