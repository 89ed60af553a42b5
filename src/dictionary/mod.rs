//! Lemma dictionary builder
//!
//! Aggregates every dictionary-worthy token into one entry per
//! (lemma, POS) pair: total frequency, the set of surface-form variants
//! seen, and a capped list of first-seen example contexts. Deterministic:
//! output depends only on token stream order.

use std::collections::BTreeSet;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::types::{AnalyzerConfig, PosTag, Sentence};

/// Dictionary key: a lemma in a specific part of speech.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LemmaKey {
    pub lemma: String,
    pub pos: PosTag,
}

impl LemmaKey {
    pub fn new(lemma: impl Into<String>, pos: PosTag) -> Self {
        Self {
            lemma: lemma.into(),
            pos,
        }
    }
}

/// One dictionary entry, mutated incrementally during the document scan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LemmaEntry {
    /// The lemma (base form)
    pub lemma: String,
    /// Part of speech
    pub pos: PosTag,
    /// Total frequency in the document
    pub count: usize,
    /// Surface-form variants seen, sorted
    pub surface_forms: BTreeSet<String>,
    /// First-seen context snippets, capped at `max_examples`
    pub examples: Vec<String>,
}

impl LemmaEntry {
    fn new(lemma: &str, pos: PosTag) -> Self {
        Self {
            lemma: lemma.to_string(),
            pos,
            count: 0,
            surface_forms: BTreeSet::new(),
            examples: Vec::new(),
        }
    }
}

/// The completed lemma dictionary for one analysis run.
#[derive(Debug, Clone, Default)]
pub struct LemmaDictionary {
    entries: FxHashMap<LemmaKey, LemmaEntry>,
}

impl LemmaDictionary {
    /// Number of unique (lemma, POS) entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the dictionary is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up an entry by lemma and POS.
    pub fn get(&self, lemma: &str, pos: PosTag) -> Option<&LemmaEntry> {
        self.entries.get(&LemmaKey::new(lemma, pos))
    }

    /// Iterate entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &LemmaEntry> {
        self.entries.values()
    }

    /// Entries sorted by count descending, then lemma ascending, then POS
    /// tag ascending — a total, deterministic order.
    pub fn sorted_entries(&self) -> Vec<LemmaEntry> {
        let mut entries: Vec<LemmaEntry> = self.entries.values().cloned().collect();
        entries.sort_by(|a, b| {
            b.count
                .cmp(&a.count)
                .then_with(|| a.lemma.cmp(&b.lemma))
                .then_with(|| a.pos.as_str().cmp(b.pos.as_str()))
        });
        entries
    }

    /// Sum of all entry frequencies.
    pub fn total_count(&self) -> usize {
        self.entries.values().map(|e| e.count).sum()
    }
}

/// Build the lemma dictionary from analyzed sentences.
///
/// Tolerates any token shape: tokens outside the dictionary POS set are
/// skipped, everything else is aggregated.
pub fn build_dictionary(sentences: &[Sentence], cfg: &AnalyzerConfig) -> LemmaDictionary {
    let mut dict = LemmaDictionary::default();

    for sentence in sentences {
        for token in &sentence.tokens {
            if !token.pos.is_dictionary_pos() {
                continue;
            }

            let key = LemmaKey::new(token.lemma.as_str(), token.pos);
            let entry = dict
                .entries
                .entry(key)
                .or_insert_with(|| LemmaEntry::new(&token.lemma, token.pos));

            entry.count += 1;
            entry.surface_forms.insert(token.text.to_lowercase());

            if entry.examples.len() < cfg.max_examples {
                let context = extract_context(sentence, token.position, cfg.context_window);
                if !entry.examples.contains(&context) {
                    entry.examples.push(context);
                }
            }
        }
    }

    dict
}

/// A small snippet of surface forms around the token at `position`.
fn extract_context(sentence: &Sentence, position: usize, window: usize) -> String {
    let start = position.saturating_sub(window);
    let end = (position + window + 1).min(sentence.tokens.len());
    sentence.tokens[start..end]
        .iter()
        .map(|t| t.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
