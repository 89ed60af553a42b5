//! Pair extraction: dependency strategy, window fallback, per-sentence merge

use std::collections::BTreeMap;

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use crate::types::{AnalyzerConfig, PosTag, Sentence, Token};

use super::index::{AdjNounEntry, AdjectiveEntry, CollocationIndex, NounAdjPair};

/// Which strategies ever produced a pair, ORed across sentences.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionMethods {
    /// Seen via an `amod` dependency relation
    pub dependency: bool,
    /// Seen via the positional window fallback
    pub window: bool,
}

impl ExtractionMethods {
    fn merge(&mut self, other: ExtractionMethods) {
        self.dependency |= other.dependency;
        self.window |= other.window;
    }
}

/// Running totals for one (noun, adjective) pair across the document.
#[derive(Debug, Default)]
struct PairAccumulator {
    count: usize,
    methods: ExtractionMethods,
    examples: Vec<String>,
}

/// Extract noun–adjective collocations from analyzed sentences and build
/// the ranked index.
///
/// Each sentence is processed independently: both strategies run, their
/// pair sets are unioned, and every pair in the union increments its
/// document-wide count by exactly one. A pair both strategies find in
/// the same sentence is therefore never double-counted, and a pair the
/// window strategy finds in one sentence while the dependency strategy
/// finds it in another accumulates from both.
pub fn extract_collocations(sentences: &[Sentence], cfg: &AnalyzerConfig) -> CollocationIndex {
    let mut accumulators: FxHashMap<(String, String), PairAccumulator> = FxHashMap::default();
    let mut nouns_seen: FxHashSet<String> = FxHashSet::default();

    for sentence in sentences {
        for token in &sentence.tokens {
            if token.pos.is_noun_like() {
                nouns_seen.insert(token.lemma.clone());
            }
        }

        for (pair, methods) in sentence_pairs(sentence, cfg) {
            let acc = accumulators.entry(pair).or_default();
            acc.count += 1;
            acc.methods.merge(methods);
            if acc.examples.len() < cfg.max_examples && !acc.examples.contains(&sentence.text) {
                acc.examples.push(sentence.text.clone());
            }
        }
    }

    build_index(accumulators, nouns_seen)
}

/// The set union of both strategies' pairs for one sentence.
///
/// Keys are (noun lemma, adjective lemma); values record which strategy
/// contributed within this sentence.
fn sentence_pairs(
    sentence: &Sentence,
    cfg: &AnalyzerConfig,
) -> FxHashMap<(String, String), ExtractionMethods> {
    let mut pairs: FxHashMap<(String, String), ExtractionMethods> = FxHashMap::default();
    let tokens = &sentence.tokens;

    // Dependency strategy: amod dependents attached to a noun head.
    for token in tokens {
        if !token.is_amod() || !is_modifier_pos(token, cfg) {
            continue;
        }
        // A dangling head index skips this candidate only.
        let Some(head) = token.head.and_then(|h| tokens.get(h)) else {
            continue;
        };
        if head.pos.is_noun_like() {
            pairs
                .entry((head.lemma.clone(), token.lemma.clone()))
                .or_default()
                .dependency = true;
        }
    }

    // Window fallback: ADJ tokens within ±window_radius of a noun, in
    // the same sentence only.
    for (i, token) in tokens.iter().enumerate() {
        if !token.pos.is_noun_like() {
            continue;
        }
        let start = i.saturating_sub(cfg.window_radius);
        let end = (i + cfg.window_radius + 1).min(tokens.len());
        for neighbor in &tokens[start..end] {
            if neighbor.pos == PosTag::Adjective && neighbor.position != token.position {
                pairs
                    .entry((token.lemma.clone(), neighbor.lemma.clone()))
                    .or_default()
                    .window = true;
            }
        }
    }

    pairs
}

/// Check whether a token's POS qualifies it as an adjectival modifier
/// for the dependency strategy. Participle handling is configurable;
/// the window fallback is always ADJ-only.
fn is_modifier_pos(token: &Token, cfg: &AnalyzerConfig) -> bool {
    token.pos == PosTag::Adjective || (cfg.include_participles && token.pos == PosTag::Verb)
}

/// Materialize the accumulated pairs into the sorted, queryable index.
fn build_index(
    accumulators: FxHashMap<(String, String), PairAccumulator>,
    nouns_seen: FxHashSet<String>,
) -> CollocationIndex {
    let mut noun_adj: BTreeMap<String, Vec<AdjectiveEntry>> = nouns_seen
        .into_iter()
        .map(|noun| (noun, Vec::new()))
        .collect();
    let mut adj_noun: BTreeMap<String, Vec<AdjNounEntry>> = BTreeMap::new();
    let mut pairs: Vec<NounAdjPair> = Vec::with_capacity(accumulators.len());

    let unique_pairs = accumulators.len();
    let mut total_pairs = 0;

    for ((noun, adjective), acc) in accumulators {
        total_pairs += acc.count;

        noun_adj.entry(noun.clone()).or_default().push(AdjectiveEntry {
            adjective: adjective.clone(),
            count: acc.count,
            examples: acc.examples,
            methods: acc.methods,
        });
        adj_noun.entry(adjective.clone()).or_default().push(AdjNounEntry {
            noun: noun.clone(),
            count: acc.count,
        });
        pairs.push(NounAdjPair {
            noun,
            adjective,
            count: acc.count,
        });
    }

    for entries in noun_adj.values_mut() {
        entries.sort_by(|a, b| {
            b.count
                .cmp(&a.count)
                .then_with(|| a.adjective.cmp(&b.adjective))
        });
    }
    for entries in adj_noun.values_mut() {
        entries.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.noun.cmp(&b.noun)));
    }
    pairs.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.noun.cmp(&b.noun))
            .then_with(|| a.adjective.cmp(&b.adjective))
    });

    CollocationIndex {
        noun_adj,
        adj_noun,
        pairs,
        total_pairs,
        unique_pairs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::{MorphAnalyzer, RuAnalyzer};

    fn analyze(text: &str) -> Vec<Sentence> {
        RuAnalyzer::new().analyze(text).unwrap().sentences
    }

    fn adjectives_of<'a>(index: &'a CollocationIndex, noun: &str) -> Vec<&'a str> {
        index.noun_adj[noun]
            .iter()
            .map(|e| e.adjective.as_str())
            .collect()
    }

    #[test]
    fn test_dependency_pair_extraction() {
        let sentences = analyze("Старый дом стоял у реки.");
        let index = extract_collocations(&sentences, &AnalyzerConfig::default());

        assert_eq!(adjectives_of(&index, "дом"), vec!["старый"]);
        let entry = &index.noun_adj["дом"][0];
        assert_eq!(entry.count, 1);
        assert!(entry.methods.dependency);
    }

    #[test]
    fn test_window_fallback_without_dependencies() {
        // Unpunctuated fragment: the amod rules still fire positionally,
        // so strip the annotations to isolate the window strategy.
        let mut sentences = analyze("белый снег холодный ветер");
        for token in sentences[0].tokens.iter_mut() {
            token.rel = None;
            token.head = None;
        }

        let index = extract_collocations(&sentences, &AnalyzerConfig::default());

        assert_eq!(adjectives_of(&index, "снег"), vec!["белый", "холодный"]);
        assert_eq!(adjectives_of(&index, "ветер"), vec!["холодный"]);
        assert!(index.noun_adj["снег"][0].methods.window);
        assert!(!index.noun_adj["снег"][0].methods.dependency);
    }

    #[test]
    fn test_same_sentence_union_counts_once() {
        // «старый дом»: the dependency rule and the window both find the
        // pair; the per-sentence union must count it exactly once.
        let sentences = analyze("Старый дом стоял.");
        let index = extract_collocations(&sentences, &AnalyzerConfig::default());

        assert_eq!(index.noun_adj["дом"][0].count, 1);
        let methods = index.noun_adj["дом"][0].methods;
        assert!(methods.dependency);
        assert!(methods.window);
    }

    #[test]
    fn test_counts_accumulate_across_sentences() {
        let sentences = analyze("Старый дом стоял. Старый дом молчал.");
        let index = extract_collocations(&sentences, &AnalyzerConfig::default());

        assert_eq!(index.noun_adj["дом"][0].count, 2);
        assert_eq!(index.total_pairs, 2);
        assert_eq!(index.unique_pairs, 1);
    }

    #[test]
    fn test_every_noun_gets_an_entry() {
        let sentences = analyze("Дом стоял, и река шумела.");
        let index = extract_collocations(&sentences, &AnalyzerConfig::default());

        assert!(index.noun_adj.contains_key("дом"));
        assert!(index.noun_adj.contains_key("река"));
        assert!(index.noun_adj["река"].is_empty());
    }

    #[test]
    fn test_window_never_crosses_sentences() {
        let sentences = analyze("Стоял дом. Белый снег лежал.");
        let index = extract_collocations(&sentences, &AnalyzerConfig::default());

        // «белый» is adjacent to «дом» in the token stream but in a
        // different sentence.
        assert!(index.noun_adj["дом"].is_empty());
        assert_eq!(adjectives_of(&index, "снег"), vec!["белый"]);
    }

    #[test]
    fn test_dangling_head_is_skipped() {
        let mut sentences = analyze("Старый дом стоял.");
        sentences[0].tokens[0].head = Some(99);
        let index = extract_collocations(&sentences, &AnalyzerConfig::default());

        // The dependency candidate is dropped; the window still finds it.
        let entry = &index.noun_adj["дом"][0];
        assert_eq!(entry.count, 1);
        assert!(entry.methods.window);
        assert!(!entry.methods.dependency);
    }

    #[test]
    fn test_adjective_ranking_order() {
        let sentences = analyze(
            "Белый дом стоял. Белый дом молчал. Старый дом скрипел. Алый дом горел.",
        );
        let index = extract_collocations(&sentences, &AnalyzerConfig::default());

        // Count descending, then adjective ascending on ties.
        assert_eq!(
            adjectives_of(&index, "дом"),
            vec!["белый", "алый", "старый"]
        );
    }

    #[test]
    fn test_example_cap() {
        let cfg = AnalyzerConfig::default().with_max_examples(2);
        let sentences = analyze(
            "Старый дом стоял. Старый дом молчал. Старый дом скрипел. Старый дом горел.",
        );
        let index = extract_collocations(&sentences, &cfg);

        let entry = &index.noun_adj["дом"][0];
        assert_eq!(entry.count, 4);
        assert_eq!(entry.examples.len(), 2);
        assert_eq!(entry.examples[0], "Старый дом стоял.");
        assert_eq!(entry.examples[1], "Старый дом молчал.");
    }

    #[test]
    fn test_reverse_index() {
        let sentences = analyze("Старый дом стоял. Старый сад цвел.");
        let index = extract_collocations(&sentences, &AnalyzerConfig::default());

        let nouns: Vec<&str> = index.adj_noun["старый"]
            .iter()
            .map(|e| e.noun.as_str())
            .collect();
        assert_eq!(nouns, vec!["дом", "сад"]);
    }

    #[test]
    fn test_empty_sentences_yield_empty_index() {
        let index = extract_collocations(&[], &AnalyzerConfig::default());
        assert!(index.is_empty());
        assert_eq!(index.total_pairs, 0);
    }

    #[test]
    fn test_determinism() {
        let sentences = analyze(
            "Белый снег лежал на старой крыше. Холодный ветер гнал белый снег.",
        );
        let cfg = AnalyzerConfig::default();
        let a = serde_json::to_string(&extract_collocations(&sentences, &cfg)).unwrap();
        let b = serde_json::to_string(&extract_collocations(&sentences, &cfg)).unwrap();
        assert_eq!(a, b);
    }
}
