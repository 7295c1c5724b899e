/*!
 * Common test utilities for the scansion test suite
 */

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use tempfile::TempDir;

use scansion::analysis::{AnalysisCache, StressAnalyzer};
use scansion::dictionary::{CmuDictionary, CmuResolver, StressResolver};

/// A small CMU-format dictionary covering the words the tests rely on
pub const SAMPLE_DICTIONARY: &str = "\
;;; # CMUdict sample for tests
BANANA  B AH0 N AE1 N AH0
BEAUTIFUL  B Y UW1 T AH0 F AH0 L
BEAUTIFUL(1)  B Y UW1 T IH0 F AH0 L
REMEMBER  R IH0 M EH1 M B ER0
THE  DH AH0
WALKING  W AO1 K IH0 NG
";

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &TempDir, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.path().join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Writes the sample dictionary to disk and returns its path
pub fn write_sample_dictionary(dir: &TempDir) -> Result<PathBuf> {
    create_test_file(dir, "cmudict-test", SAMPLE_DICTIONARY)
}

/// The sample dictionary, parsed
pub fn sample_dictionary() -> Arc<CmuDictionary> {
    Arc::new(CmuDictionary::parse(SAMPLE_DICTIONARY))
}

/// An analyzer with no resolvers: heuristics only
pub fn heuristic_analyzer() -> StressAnalyzer {
    StressAnalyzer::heuristic_only()
}

/// An analyzer backed by the sample dictionary
pub fn analyzer_with_dictionary() -> StressAnalyzer {
    let resolver: Arc<dyn StressResolver> = Arc::new(CmuResolver::new(sample_dictionary()));
    StressAnalyzer::new(vec![resolver], AnalysisCache::new(true))
}
