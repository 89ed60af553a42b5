//! Pipeline output artifacts

use serde::{Deserialize, Serialize};

use crate::collocations::CollocationIndex;
use crate::dictionary::LemmaEntry;
use crate::stats::Statistics;

/// Run-level accounting for one analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunMetadata {
    /// Characters in the input text
    pub char_count: usize,
    /// Tokens excluding punctuation and symbols
    pub word_count: usize,
    /// All tokens
    pub token_count: usize,
    /// Sentences that survived analysis
    pub sentence_count: usize,
    /// Sentences the analyzer dropped internally
    pub skipped_sentences: usize,
    /// Wall-clock analysis time
    pub processing_time_ms: f64,
}

/// The complete result of one analysis run.
///
/// Self-contained and serializable: the dictionary is materialized in
/// its ranked order, and every map inside [`CollocationIndex`] has a
/// stable key order, so identical inputs serialize to identical JSON
/// (`processing_time_ms` excepted).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Lemma dictionary, count descending then lemma ascending
    pub dictionary: Vec<LemmaEntry>,
    pub statistics: Statistics,
    pub collocations: CollocationIndex,
    pub meta: RunMetadata,
}
