//! The ranked noun–adjective index and its query surface

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::extractor::ExtractionMethods;

/// One adjective attested for a noun: frequency, capped examples, and
/// which strategies ever produced the pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjectiveEntry {
    pub adjective: String,
    pub count: usize,
    /// Sentence texts the pair was seen in, first-seen, capped
    pub examples: Vec<String>,
    pub methods: ExtractionMethods,
}

/// One noun attested for an adjective (the reverse index).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjNounEntry {
    pub noun: String,
    pub count: usize,
}

/// A flat (noun, adjective) pair with its frequency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NounAdjPair {
    pub noun: String,
    pub adjective: String,
    pub count: usize,
}

/// Outcome of a collocation query.
///
/// Distinguishes a noun the analysis saw but found no adjectives for
/// (a valid empty answer) from a noun the analysis never saw at all.
/// Neither is an error.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutcome<'a> {
    /// The noun occurred in the document; its adjectives, possibly empty.
    Known(&'a [AdjectiveEntry]),
    /// The noun lemma never occurred in the document.
    UnknownNoun,
}

impl<'a> QueryOutcome<'a> {
    /// Check whether the noun was present in the analyzed document.
    pub fn is_known(&self) -> bool {
        matches!(self, QueryOutcome::Known(_))
    }

    /// The adjective list, or `None` for an unknown noun.
    pub fn adjectives(&self) -> Option<&'a [AdjectiveEntry]> {
        match self {
            QueryOutcome::Known(entries) => Some(entries),
            QueryOutcome::UnknownNoun => None,
        }
    }
}

/// The completed collocation index for one analysis run.
///
/// Every noun lemma seen in the document has a key in `noun_adj`, even
/// when its adjective list is empty. BTreeMap keys give a stable
/// serialization order, so identical inputs produce identical JSON.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CollocationIndex {
    /// noun lemma → adjectives, count descending then adjective ascending
    pub noun_adj: BTreeMap<String, Vec<AdjectiveEntry>>,
    /// adjective lemma → nouns, count descending then noun ascending
    pub adj_noun: BTreeMap<String, Vec<AdjNounEntry>>,
    /// All pairs, count descending then noun/adjective ascending
    pub pairs: Vec<NounAdjPair>,
    /// Sum of pair frequencies
    pub total_pairs: usize,
    /// Number of distinct (noun, adjective) pairs
    pub unique_pairs: usize,
}

impl CollocationIndex {
    /// Look up the adjectives for a noun lemma, capped at `limit`.
    ///
    /// The caller is expected to pass an already-lemmatized, normalized
    /// noun; the index does no morphology of its own.
    pub fn query(&self, noun: &str, limit: usize) -> QueryOutcome<'_> {
        match self.noun_adj.get(noun) {
            Some(entries) => QueryOutcome::Known(&entries[..entries.len().min(limit)]),
            None => QueryOutcome::UnknownNoun,
        }
    }

    /// Nouns starting with `prefix`, ascending, capped at `limit`.
    /// The recovery path when an exact query returns `UnknownNoun`.
    pub fn search(&self, prefix: &str, limit: usize) -> Vec<&str> {
        self.noun_adj
            .range(prefix.to_string()..)
            .take_while(|(noun, _)| noun.starts_with(prefix))
            .take(limit)
            .map(|(noun, _)| noun.as_str())
            .collect()
    }

    /// Number of noun lemmas in the index.
    pub fn noun_count(&self) -> usize {
        self.noun_adj.len()
    }

    /// Check if the index holds no nouns at all.
    pub fn is_empty(&self) -> bool {
        self.noun_adj.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(adj: &str, count: usize) -> AdjectiveEntry {
        AdjectiveEntry {
            adjective: adj.to_string(),
            count,
            examples: Vec::new(),
            methods: ExtractionMethods::default(),
        }
    }

    fn small_index() -> CollocationIndex {
        let mut noun_adj = BTreeMap::new();
        noun_adj.insert(
            "дом".to_string(),
            vec![entry("старый", 3), entry("белый", 1)],
        );
        noun_adj.insert("домик".to_string(), vec![entry("маленький", 1)]);
        noun_adj.insert("река".to_string(), Vec::new());
        CollocationIndex {
            noun_adj,
            ..CollocationIndex::default()
        }
    }

    #[test]
    fn test_query_known_noun() {
        let index = small_index();
        let outcome = index.query("дом", 20);
        assert!(outcome.is_known());
        let adjectives = outcome.adjectives().unwrap();
        assert_eq!(adjectives.len(), 2);
        assert_eq!(adjectives[0].adjective, "старый");
    }

    #[test]
    fn test_query_limit_caps_results() {
        let index = small_index();
        let QueryOutcome::Known(entries) = index.query("дом", 1) else {
            panic!("noun should be known");
        };
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].adjective, "старый");
    }

    #[test]
    fn test_query_known_noun_with_no_adjectives() {
        let index = small_index();
        let outcome = index.query("река", 20);
        assert!(outcome.is_known());
        assert!(outcome.adjectives().unwrap().is_empty());
    }

    #[test]
    fn test_query_unknown_noun() {
        let index = small_index();
        let outcome = index.query("море", 20);
        assert_eq!(outcome, QueryOutcome::UnknownNoun);
        assert!(outcome.adjectives().is_none());
    }

    #[test]
    fn test_search_prefix() {
        let index = small_index();
        assert_eq!(index.search("дом", 10), vec!["дом", "домик"]);
        assert_eq!(index.search("дом", 1), vec!["дом"]);
        assert!(index.search("море", 10).is_empty());
    }

    #[test]
    fn test_empty_index() {
        let index = CollocationIndex::default();
        assert!(index.is_empty());
        assert_eq!(index.query("дом", 20), QueryOutcome::UnknownNoun);
    }
}
