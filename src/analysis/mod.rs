/*!
 * Core prosodic stress analysis.
 *
 * The layered pipeline, leaf to root:
 * - `syllabify`: vowel-group syllable segmentation
 * - `lexicon`: function-word classification for monosyllables
 * - `heuristics`: rule-based stress assignment with fixed confidences
 * - `analyzer`: per-word resolution chain and line aggregation
 * - `batch`: concurrent multi-line analysis with status introspection
 * - `cache`: word-level memoization shared across lines
 * - `types`: the value records all of the above produce
 */

pub mod analyzer;
pub mod batch;
pub mod cache;
pub mod heuristics;
pub mod lexicon;
pub mod syllabify;
pub mod types;

pub use analyzer::{StressAnalyzer, Token, tokenize};
pub use batch::BatchAnalyzer;
pub use cache::{AnalysisCache, CacheStats, CachedAnalysis};
