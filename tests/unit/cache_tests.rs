/*!
 * Tests for the word memoization cache
 */

use scansion::analysis::cache::{AnalysisCache, CachedAnalysis};
use scansion::analysis::types::{StressPattern, Syllable};

fn entry(text: &str, stressed: bool) -> CachedAnalysis {
    let pattern = StressPattern::new(vec![Syllable::new(text, stressed, 0.9, 0)]).unwrap();
    CachedAnalysis {
        pattern,
        reasoning: "function-word: stressed".to_string(),
    }
}

#[test]
fn test_cache_new_withDisabled_shouldNeverStore() {
    let cache = AnalysisCache::new(false);
    cache.store("cat", entry("cat", true));
    assert!(cache.get("cat").is_none());
    assert!(cache.is_empty());
    assert!(!cache.is_enabled());
}

#[test]
fn test_cache_store_withEnabledCache_shouldReturnStoredEntry() {
    let cache = AnalysisCache::new(true);
    cache.store("cat", entry("cat", true));

    let cached = cache.get("cat").unwrap();
    assert_eq!(cached.reasoning, "function-word: stressed");
    assert_eq!(cached.pattern.stress_levels(), vec![1]);
}

#[test]
fn test_cache_get_withMissingKey_shouldCountMiss() {
    let cache = AnalysisCache::new(true);
    assert!(cache.get("nonexistent").is_none());

    let stats = cache.stats();
    assert_eq!(stats.hits, 0);
    assert_eq!(stats.misses, 1);
}

#[test]
fn test_cache_stats_shouldTrackHitsAndMisses() {
    let cache = AnalysisCache::new(true);
    cache.store("cat", entry("cat", true));

    cache.get("cat");
    cache.get("cat");
    cache.get("dog");

    let stats = cache.stats();
    assert_eq!(stats.hits, 2);
    assert_eq!(stats.misses, 1);
    assert_eq!(stats.entries, 1);
    assert!((stats.hit_rate() - 2.0 / 3.0).abs() < 1e-9);
}

#[test]
fn test_cache_store_withSameKey_shouldOverwrite() {
    let cache = AnalysisCache::new(true);
    cache.store("cat", entry("cat", false));
    cache.store("cat", entry("cat", true));

    assert_eq!(cache.get("cat").unwrap().pattern.stress_levels(), vec![1]);
}

#[test]
fn test_cache_store_withOverriddenEntry_shouldKeepOverride() {
    let cache = AnalysisCache::new(true);

    let mut overridden = entry("cat", false);
    overridden.pattern.override_syllable(0, true).unwrap();
    cache.store("cat", overridden);

    // A later automatic resolution must not clear the human-set value.
    cache.store("cat", entry("cat", false));

    let cached = cache.get("cat").unwrap();
    assert!(cached.pattern.is_overridden());
    assert_eq!(cached.pattern.stress_levels(), vec![1]);
}

#[test]
fn test_cache_clear_shouldResetEntriesAndCounters() {
    let cache = AnalysisCache::new(true);
    cache.store("cat", entry("cat", true));
    cache.get("cat");
    cache.get("dog");

    cache.clear();

    assert!(cache.is_empty());
    let stats = cache.stats();
    assert_eq!((stats.hits, stats.misses, stats.entries), (0, 0, 0));
}

#[test]
fn test_cache_clone_shouldShareStorage() {
    let cache1 = AnalysisCache::new(true);
    let cache2 = cache1.clone();

    cache1.store("cat", entry("cat", true));

    // cache2 should see the same data (shared storage)
    assert!(cache2.get("cat").is_some());
    assert_eq!(cache1.len(), cache2.len());
}

#[tokio::test]
async fn test_cache_concurrent_access_shouldBeThreadSafe() {
    use std::sync::Arc;
    use tokio::task::JoinSet;

    let cache = Arc::new(AnalysisCache::new(true));
    let mut join_set = JoinSet::new();

    // Spawn multiple tasks to write to the cache
    for i in 0..10 {
        let cache = cache.clone();
        let key = format!("word{}", i);
        join_set.spawn(async move {
            cache.store(&key, entry(&key, true));
        });
    }

    // Wait for all writes
    while join_set.join_next().await.is_some() {}

    // Verify all values are stored
    for i in 0..10 {
        let key = format!("word{}", i);
        assert!(cache.get(&key).is_some(), "key: {key}");
    }
}
