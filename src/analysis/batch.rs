/*!
 * Batch analysis service.
 *
 * Fans line analysis out over independent lines with bounded concurrency,
 * restores input order in the output, and exposes readiness and cache
 * introspection. Lines share no mutable state except the memoization
 * cache, which serializes its own writes.
 */

use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

use futures::stream::{self, StreamExt};
use log::{error, info, warn};
use tokio::sync::Semaphore;

use super::analyzer::StressAnalyzer;
use super::cache::AnalysisCache;
use super::types::{AnalyzerStatus, BatchAnalysis, BatchLine};
use crate::app_config::Config;
use crate::dictionary::{CmuDictionary, CmuResolver, G2pClient, G2pResolver, StressResolver};

/// Batch analyzer fanning work out over independent lines
pub struct BatchAnalyzer {
    /// The word/line analyzer shared by all lines
    analyzer: Arc<StressAnalyzer>,

    /// Loaded pronunciation dictionary, for status introspection
    dictionary: Option<Arc<CmuDictionary>>,

    /// Load failure message when the configured dictionary was unusable
    dictionary_error: Option<String>,

    /// Maximum number of lines analyzed concurrently
    max_concurrent_lines: usize,

    /// Optional overall deadline for a batch call
    deadline: Option<Duration>,
}

impl BatchAnalyzer {
    /// Create a batch analyzer over an existing line analyzer
    pub fn new(analyzer: Arc<StressAnalyzer>, max_concurrent_lines: usize) -> Self {
        Self {
            analyzer,
            dictionary: None,
            dictionary_error: None,
            max_concurrent_lines: max_concurrent_lines.max(1),
            deadline: None,
        }
    }

    /// Attach a loaded dictionary for status reporting
    pub fn with_dictionary(mut self, dictionary: Arc<CmuDictionary>) -> Self {
        self.dictionary = Some(dictionary);
        self
    }

    /// Set an overall deadline for batch calls
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Assemble the full engine from configuration.
    ///
    /// A missing or corrupt dictionary file does not abort startup: the
    /// service runs degraded on the heuristic path and reports the failure
    /// through `status()`.
    pub fn from_config(config: &Config) -> Self {
        let cache = AnalysisCache::new(config.analysis.cache_enabled);
        let mut resolvers: Vec<Arc<dyn StressResolver>> = Vec::new();

        let (dictionary, dictionary_error) = match config.dictionary.resolved_path() {
            None => {
                info!("Pronunciation dictionary disabled by configuration");
                (None, None)
            }
            Some(path) => match CmuDictionary::load(Path::new(&path)) {
                Ok(dictionary) => (Some(Arc::new(dictionary)), None),
                Err(e) => {
                    error!("Failed to load pronunciation dictionary: {}", e);
                    (None, Some(e.to_string()))
                }
            },
        };

        if let Some(dictionary) = &dictionary {
            resolvers.push(Arc::new(CmuResolver::new(dictionary.clone())));
        }

        if !config.dictionary.g2p_endpoint.is_empty() {
            match G2pClient::new(
                &config.dictionary.g2p_endpoint,
                config.dictionary.g2p_timeout_ms,
                config.dictionary.g2p_retry_count,
                config.dictionary.g2p_backoff_ms,
            ) {
                Ok(client) => resolvers.push(Arc::new(G2pResolver::new(client))),
                Err(e) => warn!(
                    "Ignoring invalid G2P endpoint '{}': {}",
                    config.dictionary.g2p_endpoint, e
                ),
            }
        }

        Self {
            analyzer: Arc::new(StressAnalyzer::new(resolvers, cache)),
            dictionary,
            dictionary_error,
            max_concurrent_lines: config.analysis.max_concurrent_lines.max(1),
            deadline: config.analysis.batch_deadline(),
        }
    }

    /// The shared line analyzer
    pub fn analyzer(&self) -> &Arc<StressAnalyzer> {
        &self.analyzer
    }

    /// The loaded dictionary, if any
    pub fn dictionary(&self) -> Option<&Arc<CmuDictionary>> {
        self.dictionary.as_ref()
    }

    /// Analyze a batch of lines
    pub async fn analyze_batch(&self, lines: &[String]) -> BatchAnalysis {
        self.analyze_batch_with_progress(lines, |_, _| {}).await
    }

    /// Analyze a batch of lines, reporting progress after each line.
    ///
    /// Lines are processed concurrently but the output preserves input
    /// order and is numbered from 1. When a deadline is configured, lines
    /// that miss it are returned as `partial` instead of failing the batch.
    pub async fn analyze_batch_with_progress(
        &self,
        lines: &[String],
        progress_callback: impl Fn(usize, usize) + Clone + Send + 'static,
    ) -> BatchAnalysis {
        let started = Instant::now();
        let deadline = self.deadline.map(|d| tokio::time::Instant::now() + d);

        // Limit concurrent line analyses
        let semaphore = Arc::new(Semaphore::new(self.max_concurrent_lines));
        let total_lines = lines.len();
        let processed_lines = Arc::new(AtomicUsize::new(0));

        let mut results = stream::iter(lines.iter().cloned().enumerate())
            .map(|(index, line)| {
                let analyzer = self.analyzer.clone();
                let semaphore = semaphore.clone();
                let processed_lines = processed_lines.clone();
                let progress_callback = progress_callback.clone();

                async move {
                    let _permit = semaphore.acquire().await.expect("semaphore is never closed");

                    let result = match deadline {
                        Some(at) => {
                            match tokio::time::timeout_at(at, analyzer.analyze_line(&line)).await {
                                Ok(analysis) => BatchLine::complete(index + 1, analysis),
                                Err(_) => {
                                    warn!("Line {} missed the batch deadline", index + 1);
                                    BatchLine::deadline_exceeded(index + 1, line)
                                }
                            }
                        }
                        None => BatchLine::complete(index + 1, analyzer.analyze_line(&line).await),
                    };

                    let current = processed_lines.fetch_add(1, Ordering::SeqCst) + 1;
                    progress_callback(current, total_lines);

                    (index, result)
                }
            })
            .buffer_unordered(self.max_concurrent_lines)
            .collect::<Vec<_>>()
            .await;

        // Workers finish in arbitrary order; the output must not.
        results.sort_by_key(|(index, _)| *index);

        BatchAnalysis {
            total_lines,
            total_processing_time_ms: started.elapsed().as_secs_f64() * 1000.0,
            lines: results.into_iter().map(|(_, line)| line).collect(),
        }
    }

    /// Readiness and cache statistics.
    ///
    /// Never blocks on analysis: readiness reflects startup configuration
    /// only, and the counters are simple shared reads.
    pub fn status(&self) -> AnalyzerStatus {
        let cache_stats = self.analyzer.cache().stats();
        AnalyzerStatus {
            ready: self.dictionary_error.is_none(),
            dictionary_loaded: self.dictionary.is_some(),
            dictionary_entries: self.dictionary.as_ref().map_or(0, |d| d.len()),
            cache_size: cache_stats.entries,
            cache_hits: cache_stats.hits,
            cache_misses: cache_stats.misses,
        }
    }

    /// The dictionary load failure, when one happened at startup
    pub fn dictionary_error(&self) -> Option<&str> {
        self.dictionary_error.as_deref()
    }
}
