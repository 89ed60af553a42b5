//! The morphology analyzer seam and the built-in Russian implementation
//!
//! [`MorphAnalyzer`] is the stateless service interface the pipeline
//! depends on but does not own. [`RuAnalyzer`] is the built-in heuristic
//! engine; [`RuAnalyzer::shared`] exposes it as a process-wide read-only
//! singleton so concurrent analysis runs share one instance without
//! per-request reinitialization.

use std::sync::OnceLock;

use crate::errors::{AnalysisError, Result};
use crate::nlp::morph;
use crate::nlp::parser::annotate_amod;
use crate::nlp::segmenter::Segmenter;
use crate::types::{Document, Sentence, Token};

/// A morphological/syntactic analyzer: raw text in, analyzed sentences out.
///
/// Implementations must be safe for concurrent read-only use — one
/// instance serves all analysis runs in a process. Per-sentence failures
/// are handled internally: the sentence is dropped and counted in
/// [`Document::skipped_sentences`], never surfaced as an error. Only
/// whole-document failures (empty input, nothing tokenizable) are fatal.
pub trait MorphAnalyzer: Send + Sync {
    /// Analyze a document into sentences with lemmas, POS tags, and
    /// best-effort dependency annotation.
    fn analyze(&self, text: &str) -> Result<Document>;
}

/// The built-in heuristic Russian analyzer.
///
/// Composes [`Segmenter`] → suffix-based POS tagging → rule-based
/// lemmatization → positional amod annotation. It never fails on
/// individual sentences, so its skipped-sentence count is always zero;
/// the accounting path exists for dictionary-backed implementations of
/// [`MorphAnalyzer`].
#[derive(Debug, Clone, Default)]
pub struct RuAnalyzer {
    segmenter: Segmenter,
}

static SHARED: OnceLock<RuAnalyzer> = OnceLock::new();

impl RuAnalyzer {
    /// Create a fresh analyzer instance.
    pub fn new() -> Self {
        Self {
            segmenter: Segmenter::new(),
        }
    }

    /// The process-wide shared instance, created on first use and
    /// read-only afterwards.
    pub fn shared() -> &'static RuAnalyzer {
        SHARED.get_or_init(RuAnalyzer::new)
    }

    /// Build one analyzed sentence from segmented words.
    fn build_sentence(&self, text: &str, index: usize, words: &[String]) -> Sentence {
        let mut tokens: Vec<Token> = words
            .iter()
            .enumerate()
            .map(|(position, word)| {
                let pos = morph::guess_pos(word);
                let lemma = morph::lemmatize(word, pos);
                Token::new(word.clone(), lemma, pos, position)
            })
            .collect();

        annotate_amod(&mut tokens);
        Sentence::new(text, index, tokens)
    }
}

impl MorphAnalyzer for RuAnalyzer {
    fn analyze(&self, text: &str) -> Result<Document> {
        if text.trim().is_empty() {
            return Err(AnalysisError::empty_input(
                "document is empty or whitespace-only",
            ));
        }

        let raw = self.segmenter.segment(text);
        let sentences: Vec<Sentence> = raw
            .iter()
            .enumerate()
            .map(|(index, rs)| self.build_sentence(&rs.text, index, &rs.words))
            .filter(|s| !s.is_empty())
            .collect();

        if sentences.is_empty() {
            return Err(AnalysisError::no_tokens(
                "no word tokens could be extracted from the document",
            ));
        }

        Ok(Document::new(sentences, 0))
    }
}
