use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use url::Url;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Pronunciation dictionary and G2P settings
    #[serde(default)]
    pub dictionary: DictionaryConfig,

    /// Analysis engine settings
    #[serde(default)]
    pub analysis: AnalysisSettings,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// HTTP server configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ServerConfig {
    // @field: Bind address
    #[serde(default = "default_host")]
    pub host: String,

    // @field: Bind port
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Dictionary and G2P service configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DictionaryConfig {
    // @field: Path to the CMU dictionary file; empty disables dictionary lookup
    #[serde(default = "default_dictionary_path")]
    pub path: String,

    // @field: G2P service URL; empty disables the G2P fallback
    #[serde(default = "String::new")]
    pub g2p_endpoint: String,

    // @field: Per-attempt G2P timeout in milliseconds
    #[serde(default = "default_g2p_timeout_ms")]
    pub g2p_timeout_ms: u64,

    // @field: G2P retry attempts after the first
    #[serde(default = "default_g2p_retry_count")]
    pub g2p_retry_count: u32,

    // @field: Base backoff between G2P attempts in milliseconds
    #[serde(default = "default_g2p_backoff_ms")]
    pub g2p_backoff_ms: u64,
}

impl DictionaryConfig {
    /// The configured dictionary path, `None` when lookup is disabled
    pub fn resolved_path(&self) -> Option<PathBuf> {
        if self.path.is_empty() {
            None
        } else {
            Some(PathBuf::from(&self.path))
        }
    }
}

/// Analysis engine configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AnalysisSettings {
    // @field: Max lines analyzed concurrently in a batch
    #[serde(default = "default_max_concurrent_lines")]
    pub max_concurrent_lines: usize,

    // @field: Overall batch deadline in milliseconds; 0 means none
    #[serde(default)]
    pub batch_deadline_ms: u64,

    // @field: Whether the word memoization cache is enabled
    #[serde(default = "default_cache_enabled")]
    pub cache_enabled: bool,
}

impl AnalysisSettings {
    /// The batch deadline as a duration, `None` when unset
    pub fn batch_deadline(&self) -> Option<Duration> {
        if self.batch_deadline_ms == 0 {
            None
        } else {
            Some(Duration::from_millis(self.batch_deadline_ms))
        }
    }
}

/// Log level configuration
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    // @returns: log crate level filter
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            Self::Error => log::LevelFilter::Error,
            Self::Warn => log::LevelFilter::Warn,
            Self::Info => log::LevelFilter::Info,
            Self::Debug => log::LevelFilter::Debug,
            Self::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8787
}

fn default_dictionary_path() -> String {
    // Prefer a per-user data dir; fall back to a repo-relative path so a
    // checkout with the dictionary vendored in still works out of the box.
    dirs::data_dir()
        .map(|dir| dir.join("scansion").join("cmudict-0.7b"))
        .unwrap_or_else(|| PathBuf::from("dictionary/cmudict-0.7b"))
        .to_string_lossy()
        .into_owned()
}

fn default_g2p_timeout_ms() -> u64 {
    2000
}

fn default_g2p_retry_count() -> u32 {
    2
}

fn default_g2p_backoff_ms() -> u64 {
    250
}

fn default_max_concurrent_lines() -> usize {
    4
}

fn default_cache_enabled() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            path: default_dictionary_path(),
            g2p_endpoint: String::new(),
            g2p_timeout_ms: default_g2p_timeout_ms(),
            g2p_retry_count: default_g2p_retry_count(),
            g2p_backoff_ms: default_g2p_backoff_ms(),
        }
    }
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            max_concurrent_lines: default_max_concurrent_lines(),
            batch_deadline_ms: 0,
            cache_enabled: default_cache_enabled(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            dictionary: DictionaryConfig::default(),
            analysis: AnalysisSettings::default(),
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration, writing a default file if none exists
    pub fn load_or_create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            let config = Config::default();
            config.save(path)?;
            Ok(config)
        }
    }

    /// Save configuration as pretty-printed JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write config file {}", path.display()))?;
        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.analysis.max_concurrent_lines == 0 {
            return Err(anyhow!("analysis.max_concurrent_lines must be at least 1"));
        }
        if self.dictionary.g2p_timeout_ms == 0 {
            return Err(anyhow!("dictionary.g2p_timeout_ms must be greater than 0"));
        }
        if !self.dictionary.g2p_endpoint.is_empty() {
            let endpoint = &self.dictionary.g2p_endpoint;
            let candidate = if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
                endpoint.clone()
            } else {
                format!("http://{}", endpoint)
            };
            Url::parse(&candidate)
                .map_err(|e| anyhow!("Invalid G2P endpoint '{}': {}", endpoint, e))?;
        }
        Ok(())
    }
}
