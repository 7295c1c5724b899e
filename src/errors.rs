/*!
 * Error types for the scansion engine.
 *
 * This module contains custom error types for different parts of the
 * application, using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Errors that can occur when talking to the external G2P service
#[derive(Error, Debug)]
pub enum ResolverError {
    /// Error when making an API request fails
    #[error("G2P request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing an API response fails
    #[error("Failed to parse G2P response: {0}")]
    ParseError(String),

    /// Error returned by the service itself
    #[error("G2P service responded with error: {status_code} - {message}")]
    ServiceError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the service
        message: String,
    },

    /// Lookup did not complete within the configured deadline
    #[error("G2P lookup timed out after {0} ms")]
    Timeout(u64),
}

/// Errors that can occur while loading the pronunciation dictionary.
///
/// These are configuration-level failures: the service keeps running but
/// reports itself as degraded through `status()`.
#[derive(Error, Debug)]
pub enum DictionaryError {
    /// The dictionary file does not exist
    #[error("Dictionary file not found: {0}")]
    NotFound(String),

    /// The dictionary file could not be read
    #[error("Failed to read dictionary file {path}: {reason}")]
    Io {
        /// Path that failed to load
        path: String,
        /// Underlying IO error text
        reason: String,
    },
}

/// Errors from the analysis data model itself
#[derive(Error, Debug, PartialEq)]
pub enum AnalysisError {
    /// A stress pattern must always contain at least one syllable
    #[error("A stress pattern must contain at least one syllable")]
    EmptyPattern,

    /// Syllable index out of range for an override
    #[error("No syllable at position {position} (pattern has {len})")]
    SyllableOutOfRange {
        /// Requested syllable index
        position: usize,
        /// Number of syllables in the pattern
        len: usize,
    },
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from configuration loading or validation
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from dictionary loading
    #[error("Dictionary error: {0}")]
    Dictionary(#[from] DictionaryError),

    /// Error from the G2P resolver
    #[error("Resolver error: {0}")]
    Resolver(#[from] ResolverError),

    /// Error from the analysis data model
    #[error("Analysis error: {0}")]
    Analysis(#[from] AnalysisError),

    /// Error from the HTTP server
    #[error("HTTP server error: {0}")]
    Http(String),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
