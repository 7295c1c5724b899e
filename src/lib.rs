/*!
 * # scansion - prosodic stress analysis for lyrics
 *
 * A Rust library that determines syllable boundaries and stress assignment
 * for lines of text, using a layered strategy: function-word heuristics,
 * pronunciation dictionary lookup, and a grapheme-to-phoneme fallback, with
 * confidence scoring on every path.
 *
 * ## Features
 *
 * - Orthographic syllabification with silent-e and short-word handling
 * - Function-word classification from fixed lexical sets
 * - CMU pronouncing dictionary lookup for multi-syllable words
 * - External G2P service fallback with bounded timeouts
 * - Word-level memoization cache with hit/miss statistics
 * - Concurrent batch analysis preserving input line order
 * - JSON HTTP API for editor front-ends
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `analysis`: The core engine:
 *   - `analysis::syllabify`: Syllable segmentation
 *   - `analysis::lexicon`: Function-word lexical sets
 *   - `analysis::heuristics`: Rule-based stress assignment
 *   - `analysis::analyzer`: Word/line orchestration
 *   - `analysis::batch`: Concurrent batch service
 *   - `analysis::cache`: Memoization cache
 * - `dictionary`: Resolution strategies:
 *   - `dictionary::cmu`: Local CMU dictionary
 *   - `dictionary::g2p`: External G2P service client
 *   - `dictionary::mock`: Scripted resolver for tests
 * - `api`: HTTP transport layer
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod analysis;
pub mod api;
pub mod app_config;
pub mod dictionary;
pub mod errors;

// Re-export main types for easier usage
pub use analysis::types::{
    AnalyzerStatus, BatchAnalysis, BatchLine, LineAnalysis, StressPattern, Syllable, WordAnalysis,
};
pub use analysis::{AnalysisCache, BatchAnalyzer, StressAnalyzer};
pub use app_config::Config;
pub use dictionary::{CmuDictionary, StressResolver};
pub use errors::{AnalysisError, AppError, DictionaryError, ResolverError};
