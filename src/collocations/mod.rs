//! Noun–adjective collocation extraction and the ranked pair index
//!
//! Two extraction strategies run over every sentence: the dependency
//! strategy reads `amod` annotations, the positional window strategy
//! pairs nouns with nearby adjectives when dependency data is absent or
//! incomplete. Their results are merged per sentence as a set union, so
//! a pair found by both strategies in the same sentence counts once.
//! The merged stream feeds [`CollocationIndex`], the ranked, queryable
//! noun→adjective mapping.

pub mod extractor;
pub mod index;

pub use extractor::{extract_collocations, ExtractionMethods};
pub use index::{AdjNounEntry, AdjectiveEntry, CollocationIndex, NounAdjPair, QueryOutcome};
