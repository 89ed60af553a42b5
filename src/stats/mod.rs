//! Statistics engine
//!
//! Pure functions over the analyzed sentence stream: POS distribution,
//! top-N frequency lists per content POS category, vocabulary richness,
//! and average word length. No mutation of inputs, no side effects;
//! ties always break alphabetically for determinism.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::types::{pos_label_ru, PosTag, Sentence};

/// Content POS categories that get their own top-N list.
const CONTENT_POS: [PosTag; 5] = [
    PosTag::Noun,
    PosTag::Adjective,
    PosTag::Verb,
    PosTag::Adverb,
    PosTag::ProperNoun,
];

/// A lemma with its frequency, for top-N lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LemmaCount {
    pub lemma: String,
    pub count: usize,
}

/// One slice of the POS distribution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PosSlice {
    /// UD tag string
    pub pos: String,
    /// Russian display label
    pub label_ru: String,
    /// Token count for this tag
    pub count: usize,
    /// Share of all tokens, as a percentage
    pub percent: f64,
}

/// Derived statistics for one analysis run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Statistics {
    /// All tokens, including closed-class words
    pub total_tokens: usize,
    /// Tokens excluding punctuation and symbols
    pub total_words: usize,
    /// Unique lemmas among words
    pub unique_lemmas: usize,
    /// unique_lemmas / total_words, in [0, 1]
    pub vocabulary_richness: f64,
    /// Mean surface-form length in chars, over words
    pub avg_word_length: f64,
    /// POS distribution, count descending then tag ascending
    pub pos_distribution: Vec<PosSlice>,
    pub top_nouns: Vec<LemmaCount>,
    pub top_adjectives: Vec<LemmaCount>,
    pub top_verbs: Vec<LemmaCount>,
    pub top_adverbs: Vec<LemmaCount>,
    pub top_proper_nouns: Vec<LemmaCount>,
}

/// Compute statistics over the analyzed sentences.
pub fn compute_statistics(sentences: &[Sentence], top_n: usize) -> Statistics {
    let mut pos_counter: FxHashMap<PosTag, usize> = FxHashMap::default();
    let mut lemma_counters: FxHashMap<PosTag, FxHashMap<&str, usize>> = FxHashMap::default();
    let mut all_lemmas: FxHashMap<&str, usize> = FxHashMap::default();
    let mut total_tokens = 0usize;
    let mut word_count = 0usize;
    let mut total_chars = 0usize;

    for sentence in sentences {
        for token in &sentence.tokens {
            total_tokens += 1;
            *pos_counter.entry(token.pos).or_default() += 1;

            if !token.pos.is_word() {
                continue;
            }

            word_count += 1;
            total_chars += token.text.chars().count();
            *all_lemmas.entry(token.lemma.as_str()).or_default() += 1;

            if token.pos.is_content_word() {
                *lemma_counters
                    .entry(token.pos)
                    .or_default()
                    .entry(token.lemma.as_str())
                    .or_default() += 1;
            }
        }
    }

    let unique_lemmas = all_lemmas.len();
    let vocabulary_richness = if word_count > 0 {
        unique_lemmas as f64 / word_count as f64
    } else {
        0.0
    };
    let avg_word_length = if word_count > 0 {
        total_chars as f64 / word_count as f64
    } else {
        0.0
    };

    let mut pos_distribution: Vec<PosSlice> = pos_counter
        .iter()
        .map(|(&pos, &count)| PosSlice {
            pos: pos.as_str().to_string(),
            label_ru: pos_label_ru(pos).to_string(),
            count,
            percent: if total_tokens > 0 {
                count as f64 / total_tokens as f64 * 100.0
            } else {
                0.0
            },
        })
        .collect();
    pos_distribution.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.pos.cmp(&b.pos)));

    let top = |pos: PosTag| top_lemmas(lemma_counters.get(&pos), top_n);

    Statistics {
        total_tokens,
        total_words: word_count,
        unique_lemmas,
        vocabulary_richness,
        avg_word_length,
        pos_distribution,
        top_nouns: top(CONTENT_POS[0]),
        top_adjectives: top(CONTENT_POS[1]),
        top_verbs: top(CONTENT_POS[2]),
        top_adverbs: top(CONTENT_POS[3]),
        top_proper_nouns: top(CONTENT_POS[4]),
    }
}

/// Top-N lemmas for one POS category: count descending, lemma ascending.
fn top_lemmas(counter: Option<&FxHashMap<&str, usize>>, top_n: usize) -> Vec<LemmaCount> {
    let Some(counter) = counter else {
        return Vec::new();
    };

    let mut ranked: Vec<LemmaCount> = counter
        .iter()
        .map(|(&lemma, &count)| LemmaCount {
            lemma: lemma.to_string(),
            count,
        })
        .collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.lemma.cmp(&b.lemma)));
    ranked.truncate(top_n);
    ranked
}
