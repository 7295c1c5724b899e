/*!
 * Grapheme-to-phoneme service client.
 *
 * Covers words outside the local dictionary by asking an external G2P
 * service for an ARPAbet transcription. Every failure mode (connect error,
 * non-2xx status, malformed body, timeout) maps to a resolver error the
 * analyzer absorbs, so the line analysis never hangs or aborts on a flaky
 * service.
 */

use std::time::Duration;

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use url::Url;

use super::{Resolution, StressResolver, pattern_from_alignment, stress_digits};
use crate::analysis::heuristics::G2P_CONFIDENCE;
use crate::analysis::syllabify::approximate_syllables;
use crate::errors::ResolverError;

/// ARPAbet phoneme with optional stress digit. G2P services interleave
/// punctuation and whitespace tokens; only these are kept.
static ARPABET_PHONEME: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z]+[0-2]?$").expect("valid regex"));

/// Phonemization request body
#[derive(Debug, Serialize)]
struct PhonemizeRequest<'a> {
    word: &'a str,
}

/// Phonemization response from the G2P service
#[derive(Debug, Deserialize)]
pub struct PhonemizeResponse {
    /// ARPAbet phonemes, stress digits on the vowels
    pub phonemes: Vec<String>,

    /// Service-reported confidence, if any
    #[serde(default)]
    pub confidence: Option<f64>,
}

/// HTTP client for a grapheme-to-phoneme service
#[derive(Debug)]
pub struct G2pClient {
    /// Base URL of the service
    base_url: String,

    /// HTTP client for making requests
    client: Client,

    /// Maximum number of retry attempts
    max_retries: u32,

    /// Base backoff time in milliseconds between attempts
    backoff_base_ms: u64,

    /// Per-attempt deadline in milliseconds
    timeout_ms: u64,
}

impl G2pClient {
    /// Create a new client for the given endpoint.
    ///
    /// Accepts bare `host:port` endpoints and defaults the scheme to http.
    pub fn new(endpoint: &str, timeout_ms: u64, max_retries: u32, backoff_base_ms: u64) -> Result<Self> {
        if endpoint.is_empty() {
            return Err(anyhow!("G2P endpoint cannot be empty"));
        }

        let url = if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
            Url::parse(endpoint)?
        } else {
            Url::parse(&format!("http://{}", endpoint))?
        };
        if url.host_str().is_none() {
            return Err(anyhow!("Invalid host in G2P endpoint: {}", endpoint));
        }

        let client = Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .unwrap_or_default();

        Ok(Self {
            base_url: url.to_string().trim_end_matches('/').to_string(),
            client,
            max_retries,
            backoff_base_ms,
            timeout_ms,
        })
    }

    /// Ask the service for a transcription of one word, with retry and
    /// exponential backoff. Each attempt is bounded by the configured
    /// timeout, so a wedged service resolves as a lookup failure instead of
    /// stalling the caller.
    pub async fn phonemize(&self, word: &str) -> Result<PhonemizeResponse, ResolverError> {
        let url = format!("{}/phonemize", self.base_url);
        let request = PhonemizeRequest { word };

        let mut attempt = 0;
        let mut last_error = ResolverError::RequestFailed("no attempts made".to_string());

        while attempt <= self.max_retries {
            if attempt > 0 {
                let backoff = self.backoff_base_ms.saturating_mul(1u64 << (attempt - 1).min(8));
                tokio::time::sleep(Duration::from_millis(backoff)).await;
            }
            attempt += 1;

            let send = self.client.post(&url).json(&request).send();
            let response = match tokio::time::timeout(Duration::from_millis(self.timeout_ms), send).await {
                Err(_) => {
                    last_error = ResolverError::Timeout(self.timeout_ms);
                    continue;
                }
                Ok(Err(e)) => {
                    last_error = ResolverError::RequestFailed(e.to_string());
                    continue;
                }
                Ok(Ok(response)) => response,
            };

            let status = response.status();
            if !status.is_success() {
                let message = response.text().await.unwrap_or_default();
                last_error = ResolverError::ServiceError {
                    status_code: status.as_u16(),
                    message,
                };
                continue;
            }

            let mut parsed: PhonemizeResponse = response
                .json()
                .await
                .map_err(|e| ResolverError::ParseError(e.to_string()))?;
            parsed.phonemes.retain(|p| ARPABET_PHONEME.is_match(p));
            return Ok(parsed);
        }

        debug!("G2P lookup for '{}' gave up after {} attempts", word, attempt);
        Err(last_error)
    }
}

/// Resolver strategy backed by the external G2P service
#[derive(Debug)]
pub struct G2pResolver {
    client: G2pClient,
}

impl G2pResolver {
    /// Create a resolver around a configured client
    pub fn new(client: G2pClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl StressResolver for G2pResolver {
    fn name(&self) -> &'static str {
        "g2p"
    }

    async fn resolve(&self, word: &str) -> Result<Option<Resolution>, ResolverError> {
        let response = self.client.phonemize(word).await?;

        let stress = stress_digits(&response.phonemes);
        if stress.is_empty() {
            return Ok(None);
        }
        let Some(syllables) = approximate_syllables(word, stress.len()) else {
            return Ok(None);
        };

        let confidence = response.confidence.unwrap_or(G2P_CONFIDENCE).clamp(0.0, 1.0);
        Ok(pattern_from_alignment(syllables, &stress, confidence).map(|pattern| Resolution {
            pattern,
            reasoning: "g2p".to_string(),
        }))
    }
}
