//! # ruslex
//!
//! Russian text analysis: lemmatized vocabulary dictionaries, frequency
//! statistics, and noun–adjective collocation extraction.
//!
//! Text goes in, a self-contained [`AnalysisResult`] comes out: a ranked
//! lemma dictionary with surface forms and example contexts, document
//! statistics (POS distribution, top-N frequency lists, vocabulary
//! richness), and a queryable noun→adjective collocation index built by
//! two merged strategies (dependency `amod` relations plus a positional
//! window fallback).
//!
//! ## Features
//!
//! - **Deterministic**: identical input and configuration produce
//!   identical output, down to the serialized JSON
//! - **Unicode-aware**: UAX #29 segmentation, Cyrillic normalization
//!   (ё → е)
//! - **Pluggable morphology**: the pipeline accepts any [`MorphAnalyzer`];
//!   a heuristic Russian engine ships built in
//! - **Parallel**: batch analysis fans out across documents via rayon
//!
//! ## Quick start
//!
//! ```
//! use ruslex::{AnalysisPipeline, QueryOutcome};
//!
//! let pipeline = AnalysisPipeline::default();
//! let result = pipeline.run("Старый дом стоял у реки.").unwrap();
//!
//! match result.collocations.query("дом", 20) {
//!     QueryOutcome::Known(adjectives) => {
//!         assert_eq!(adjectives[0].adjective, "старый");
//!     }
//!     QueryOutcome::UnknownNoun => unreachable!(),
//! }
//! ```

pub mod collocations;
pub mod dictionary;
pub mod errors;
pub mod export;
pub mod nlp;
pub mod pipeline;
pub mod stats;
pub mod types;

// Re-export commonly used types
pub use errors::{AnalysisError, Result};
pub use types::{AnalyzerConfig, Document, PosTag, Sentence, Token};

// Re-export main functionality
pub use collocations::{
    extract_collocations, AdjNounEntry, AdjectiveEntry, CollocationIndex, ExtractionMethods,
    NounAdjPair, QueryOutcome,
};
pub use dictionary::{build_dictionary, LemmaDictionary, LemmaEntry, LemmaKey};
pub use export::{to_json, to_json_pretty, write_json};
pub use nlp::{MorphAnalyzer, RuAnalyzer, Segmenter};
pub use pipeline::{
    AnalysisPipeline, AnalysisResult, NoopObserver, PipelineObserver, RunMetadata,
    StageTimingObserver,
};
pub use stats::{compute_statistics, LemmaCount, PosSlice, Statistics};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
