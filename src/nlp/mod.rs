//! Tokenizer/morphology adapter for Russian text.
//!
//! The pipeline depends on the [`MorphAnalyzer`] trait, not on a concrete
//! engine: anything that can turn raw text into [`crate::types::Sentence`]s
//! with lemmas, POS tags, and (best-effort) dependency relations plugs in
//! here. The built-in [`RuAnalyzer`] is a self-contained heuristic
//! implementation composed of a UAX #29 segmenter, a suffix-based POS
//! tagger, a rule-based lemmatizer, and an adjacency-based adjectival
//! modifier annotator.

pub mod analyzer;
pub mod morph;
pub mod parser;
pub mod segmenter;

pub use analyzer::{MorphAnalyzer, RuAnalyzer};
pub use segmenter::Segmenter;
