/*!
 * Value records produced by the stress analysis engine.
 *
 * Everything in this module is an immutable snapshot created per analysis
 * call; nothing here persists inside the engine itself. The records are
 * serde-serializable so they can cross the HTTP boundary unchanged.
 */

use serde::{Deserialize, Serialize};

use crate::errors::AnalysisError;

/// A single syllable of a word with its stress assignment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Syllable {
    /// Syllable text, a non-empty substring of the cleaned word
    pub text: String,

    /// Whether this syllable carries stress
    pub stressed: bool,

    /// Confidence of the assignment, in [0, 1]
    pub confidence: f64,

    /// 0-based index of the syllable within the word
    pub position: usize,

    /// True iff a human explicitly set this value
    #[serde(default)]
    pub overridden: bool,
}

impl Syllable {
    /// Create a syllable with an automatic (non-overridden) assignment
    pub fn new(text: impl Into<String>, stressed: bool, confidence: f64, position: usize) -> Self {
        Self {
            text: text.into(),
            stressed,
            confidence,
            position,
            overridden: false,
        }
    }
}

/// The stress assignment for one word: an ordered, non-empty sequence of
/// syllables plus a word-level override marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StressPattern {
    syllables: Vec<Syllable>,
    overridden: bool,
}

impl StressPattern {
    /// Create a pattern from syllables. A pattern with zero syllables is
    /// invalid and is rejected here rather than surfacing later as a
    /// broken invariant.
    pub fn new(syllables: Vec<Syllable>) -> Result<Self, AnalysisError> {
        if syllables.is_empty() {
            return Err(AnalysisError::EmptyPattern);
        }
        Ok(Self {
            syllables,
            overridden: false,
        })
    }

    /// The syllables of this pattern, in position order
    pub fn syllables(&self) -> &[Syllable] {
        &self.syllables
    }

    /// Number of syllables
    pub fn len(&self) -> usize {
        self.syllables.len()
    }

    /// Patterns are never empty; kept for API symmetry
    pub fn is_empty(&self) -> bool {
        self.syllables.is_empty()
    }

    /// True iff the pattern was set wholesale by a caller or any contained
    /// syllable was individually overridden. Consumers must check this
    /// before recomputing a word's stress.
    pub fn is_overridden(&self) -> bool {
        self.overridden || self.syllables.iter().any(|s| s.overridden)
    }

    /// Mark the whole pattern as a manual, word-level override
    pub fn set_overridden(&mut self, overridden: bool) {
        self.overridden = overridden;
    }

    /// Manually set the stress of one syllable. Marks both the syllable and
    /// (via `is_overridden`) the pattern as human-edited.
    pub fn override_syllable(&mut self, position: usize, stressed: bool) -> Result<(), AnalysisError> {
        let len = self.syllables.len();
        let syllable = self
            .syllables
            .get_mut(position)
            .ok_or(AnalysisError::SyllableOutOfRange { position, len })?;
        syllable.stressed = stressed;
        syllable.overridden = true;
        Ok(())
    }

    /// Stress levels as integers: 0 = unstressed, 1 = stressed.
    ///
    /// Level 2 (secondary stress) is reserved for richer dictionary data
    /// and never emitted here.
    pub fn stress_levels(&self) -> Vec<u8> {
        self.syllables
            .iter()
            .map(|s| if s.stressed { 1 } else { 0 })
            .collect()
    }

    /// Syllable texts in position order
    pub fn texts(&self) -> Vec<String> {
        self.syllables.iter().map(|s| s.text.clone()).collect()
    }

    /// Number of stressed syllables
    pub fn stressed_count(&self) -> usize {
        self.syllables.iter().filter(|s| s.stressed).count()
    }

    /// Word-level confidence: the weakest syllable assignment
    pub fn confidence(&self) -> f64 {
        self.syllables
            .iter()
            .map(|s| s.confidence)
            .fold(1.0, f64::min)
    }
}

/// Analysis result for a single word
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordAnalysis {
    /// Original surface form, case and punctuation preserved
    pub word: String,

    /// Part-of-speech tag; empty when unknown
    pub pos: String,

    /// Syllable texts in order
    pub syllables: Vec<String>,

    /// Stress level per syllable: 0 = unstressed, 1 = primary
    pub stress_pattern: Vec<u8>,

    /// Human-readable explanation of the decision path taken
    pub reasoning: String,

    /// Char offset at which each syllable begins, anchored at the word
    /// token's start offset within the analyzed line
    pub char_positions: Vec<usize>,

    /// Confidence of the assignment, in [0, 1]
    pub confidence: f64,
}

impl WordAnalysis {
    /// Result for a token that cleans down to nothing (digits, stray
    /// punctuation): well-formed, zero syllables, zero confidence.
    pub fn empty(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            pos: String::new(),
            syllables: Vec::new(),
            stress_pattern: Vec::new(),
            reasoning: "fallback: empty".to_string(),
            char_positions: Vec::new(),
            confidence: 0.0,
        }
    }

    /// Number of syllables in this word
    pub fn syllable_count(&self) -> usize {
        self.syllables.len()
    }

    /// Number of stressed syllables in this word
    pub fn stressed_count(&self) -> usize {
        self.stress_pattern.iter().filter(|&&s| s > 0).count()
    }
}

/// Complete analysis result for one line of text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineAnalysis {
    /// The analyzed line, verbatim
    pub text: String,

    /// Sum of syllable counts across all words
    pub total_syllables: usize,

    /// Sum of stressed syllable counts across all words
    pub stressed_syllables: usize,

    /// Wall-clock duration of the analysis in milliseconds
    pub processing_time_ms: f64,

    /// Per-word analyses in token order
    pub words: Vec<WordAnalysis>,
}

impl LineAnalysis {
    /// Empty result for a blank or skipped line
    pub fn empty(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            total_syllables: 0,
            stressed_syllables: 0,
            processing_time_ms: 0.0,
            words: Vec::new(),
        }
    }
}

/// One line of a batch result, numbered from 1 in input order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchLine {
    /// 1-based line number matching input order
    pub line_number: usize,

    /// The line's analysis
    #[serde(flatten)]
    pub analysis: LineAnalysis,

    /// True when the line missed the batch deadline and carries only
    /// fallback values
    #[serde(default)]
    pub partial: bool,
}

impl BatchLine {
    /// A completed line
    pub fn complete(line_number: usize, analysis: LineAnalysis) -> Self {
        Self {
            line_number,
            analysis,
            partial: false,
        }
    }

    /// A line that missed the batch deadline
    pub fn deadline_exceeded(line_number: usize, text: impl Into<String>) -> Self {
        Self {
            line_number,
            analysis: LineAnalysis::empty(text),
            partial: true,
        }
    }
}

/// Aggregated result of a batch analysis call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchAnalysis {
    /// Number of input lines
    pub total_lines: usize,

    /// Wall-clock duration of the whole batch call in milliseconds
    pub total_processing_time_ms: f64,

    /// Per-line results in input order
    pub lines: Vec<BatchLine>,
}

/// Readiness and cache introspection for the batch service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzerStatus {
    /// False only when a configuration-level failure (missing/corrupt
    /// dictionary file) degraded the service
    pub ready: bool,

    /// Whether a pronunciation dictionary is loaded
    pub dictionary_loaded: bool,

    /// Number of dictionary entries available for lookup
    pub dictionary_entries: usize,

    /// Current number of memoized words
    pub cache_size: usize,

    /// Cache hit counter
    pub cache_hits: usize,

    /// Cache miss counter
    pub cache_misses: usize,
}
