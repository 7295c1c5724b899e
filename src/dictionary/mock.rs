/*!
 * Mock resolver for testing.
 *
 * Simulates the behaviors a real dictionary/G2P backend can exhibit:
 * - `MockResolver::working()` - answers from a scripted entry table
 * - `MockResolver::missing()` - always misses
 * - `MockResolver::failing()` - always fails with an error
 * - `MockResolver::slow(ms)` - sleeps before answering (timeout testing)
 * - `MockResolver::intermittent(n)` - fails every nth request
 */

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use super::{Resolution, StressResolver, pattern_from_alignment};
use crate::errors::ResolverError;

/// Behavior mode for the mock resolver
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MockBehavior {
    /// Answer from the scripted entry table
    Working,
    /// Always miss
    Missing,
    /// Always fail with a request error
    Failing,
    /// Fail every nth request
    Intermittent {
        /// Every how many requests a failure fires
        fail_every: usize,
    },
    /// Sleep before answering from the table
    Slow {
        /// Delay before answering
        delay_ms: u64,
    },
}

/// Mock resolver with scripted entries and failure modes
#[derive(Debug)]
pub struct MockResolver {
    /// Behavior mode
    behavior: MockBehavior,

    /// Scripted resolutions keyed by normalized word
    entries: HashMap<String, Resolution>,

    /// Request counter, shared so tests can observe call volume
    request_count: Arc<AtomicUsize>,
}

impl MockResolver {
    /// Create a mock resolver with the given behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            entries: HashMap::new(),
            request_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// A resolver that answers from its entry table
    pub fn working() -> Self {
        Self::new(MockBehavior::Working)
    }

    /// A resolver that never finds anything
    pub fn missing() -> Self {
        Self::new(MockBehavior::Missing)
    }

    /// A resolver that always errors
    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    /// A resolver that sleeps before answering
    pub fn slow(delay_ms: u64) -> Self {
        Self::new(MockBehavior::Slow { delay_ms })
    }

    /// A resolver that fails every `fail_every`th request
    pub fn intermittent(fail_every: usize) -> Self {
        Self::new(MockBehavior::Intermittent { fail_every })
    }

    /// Script an entry: syllable texts, stress digits, and confidence
    pub fn with_entry(mut self, word: &str, syllables: &[&str], stress: &[u8], confidence: f64) -> Self {
        let texts: Vec<String> = syllables.iter().map(|s| s.to_string()).collect();
        if let Some(pattern) = pattern_from_alignment(texts, stress, confidence) {
            self.entries.insert(
                word.to_string(),
                Resolution {
                    pattern,
                    reasoning: "dictionary".to_string(),
                },
            );
        }
        self
    }

    /// Number of resolve calls seen so far
    pub fn request_count(&self) -> usize {
        self.request_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl StressResolver for MockResolver {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn resolve(&self, word: &str) -> Result<Option<Resolution>, ResolverError> {
        let count = self.request_count.fetch_add(1, Ordering::SeqCst) + 1;

        match self.behavior {
            MockBehavior::Working => Ok(self.entries.get(word).cloned()),
            MockBehavior::Missing => Ok(None),
            MockBehavior::Failing => Err(ResolverError::RequestFailed(
                "mock resolver configured to fail".to_string(),
            )),
            MockBehavior::Intermittent { fail_every } => {
                if fail_every > 0 && count % fail_every == 0 {
                    Err(ResolverError::RequestFailed(format!(
                        "mock resolver intermittent failure on request {}",
                        count
                    )))
                } else {
                    Ok(self.entries.get(word).cloned())
                }
            }
            MockBehavior::Slow { delay_ms } => {
                tokio::time::sleep(Duration::from_millis(delay_ms)).await;
                Ok(self.entries.get(word).cloned())
            }
        }
    }
}
