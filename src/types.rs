//! Core types for ruslex
//!
//! This module defines the fundamental data structures used throughout the
//! library: POS tags, tokens, sentences, analyzed documents, and the
//! analyzer configuration.

use crate::errors::{AnalysisError, Result};
use serde::{Deserialize, Serialize};

/// The dependency relation label for adjectival modifiers (UD v2).
pub const REL_AMOD: &str = "amod";

// ============================================================================
// POS tags
// ============================================================================

/// Part-of-speech tags (Universal Dependencies v2 tag set).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PosTag {
    Noun,
    Verb,
    Adjective,
    Adverb,
    ProperNoun,
    Pronoun,
    Determiner,
    Preposition,
    Conjunction,
    Interjection,
    Numeral,
    Particle,
    Punctuation,
    Symbol,
    Other,
}

impl PosTag {
    /// Parse from a UD v2 tag string (the tag set the Natasha-style
    /// Russian analyzers emit).
    pub fn from_ud(tag: &str) -> Self {
        match tag.to_uppercase().as_str() {
            "NOUN" => PosTag::Noun,
            "VERB" => PosTag::Verb,
            "ADJ" => PosTag::Adjective,
            "ADV" => PosTag::Adverb,
            "PROPN" => PosTag::ProperNoun,
            "PRON" => PosTag::Pronoun,
            "DET" => PosTag::Determiner,
            "ADP" => PosTag::Preposition,
            "CCONJ" | "SCONJ" => PosTag::Conjunction,
            "INTJ" => PosTag::Interjection,
            "NUM" => PosTag::Numeral,
            "PART" => PosTag::Particle,
            "PUNCT" => PosTag::Punctuation,
            "SYM" => PosTag::Symbol,
            _ => PosTag::Other,
        }
    }

    /// Get the UD v2 tag string for this enum.
    pub fn as_str(&self) -> &'static str {
        match self {
            PosTag::Noun => "NOUN",
            PosTag::Verb => "VERB",
            PosTag::Adjective => "ADJ",
            PosTag::Adverb => "ADV",
            PosTag::ProperNoun => "PROPN",
            PosTag::Pronoun => "PRON",
            PosTag::Determiner => "DET",
            PosTag::Preposition => "ADP",
            PosTag::Conjunction => "CCONJ",
            PosTag::Interjection => "INTJ",
            PosTag::Numeral => "NUM",
            PosTag::Particle => "PART",
            PosTag::Punctuation => "PUNCT",
            PosTag::Symbol => "SYM",
            PosTag::Other => "X",
        }
    }

    /// Check if this tag represents a noun (common or proper).
    pub fn is_noun_like(&self) -> bool {
        matches!(self, PosTag::Noun | PosTag::ProperNoun)
    }

    /// Check if this tag belongs in the lemma dictionary.
    ///
    /// Punctuation, symbols, and closed-class connectives are excluded;
    /// everything a reader would look up survives.
    pub fn is_dictionary_pos(&self) -> bool {
        matches!(
            self,
            PosTag::Noun
                | PosTag::Adjective
                | PosTag::Verb
                | PosTag::Adverb
                | PosTag::ProperNoun
                | PosTag::Pronoun
                | PosTag::Numeral
                | PosTag::Determiner
                | PosTag::Interjection
        )
    }

    /// Check if this tag is a content-word category with its own
    /// top-N frequency list.
    pub fn is_content_word(&self) -> bool {
        matches!(
            self,
            PosTag::Noun | PosTag::Adjective | PosTag::Verb | PosTag::Adverb | PosTag::ProperNoun
        )
    }

    /// Check if this tag counts as a word (everything except punctuation
    /// and symbols) for word-count and richness metrics.
    pub fn is_word(&self) -> bool {
        !matches!(self, PosTag::Punctuation | PosTag::Symbol)
    }
}

/// Russian display label for a POS tag, for downstream dashboards.
pub fn pos_label_ru(pos: PosTag) -> &'static str {
    match pos {
        PosTag::Noun => "Существительное",
        PosTag::Adjective => "Прилагательное",
        PosTag::Verb => "Глагол",
        PosTag::Adverb => "Наречие",
        PosTag::ProperNoun => "Имя собственное",
        PosTag::Pronoun => "Местоимение",
        PosTag::Determiner => "Определитель",
        PosTag::Preposition => "Предлог",
        PosTag::Conjunction => "Союз",
        PosTag::Particle => "Частица",
        PosTag::Numeral => "Числительное",
        PosTag::Punctuation => "Пунктуация",
        PosTag::Interjection => "Междометие",
        PosTag::Symbol => "Символ",
        PosTag::Other => "Прочее",
    }
}

// ============================================================================
// Token & Sentence
// ============================================================================

/// A single analyzed token.
///
/// Immutable after creation; owned by its [`Sentence`]. The dependency
/// fields are optional: an analyzer that cannot assign a relation leaves
/// them as `None`, which is a normal condition, not an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    /// The surface form (original text)
    pub text: String,
    /// The lemmatized form (lowercase normalized)
    pub lemma: String,
    /// Part-of-speech tag
    pub pos: PosTag,
    /// Token index within its sentence
    pub position: usize,
    /// Dependency relation label (e.g. "amod"), when the parser assigned one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rel: Option<String>,
    /// Index of the syntactic head within the same sentence's token vector
    #[serde(skip_serializing_if = "Option::is_none")]
    pub head: Option<usize>,
}

impl Token {
    /// Create a token without dependency annotation.
    pub fn new(
        text: impl Into<String>,
        lemma: impl Into<String>,
        pos: PosTag,
        position: usize,
    ) -> Self {
        Self {
            text: text.into(),
            lemma: lemma.into(),
            pos,
            position,
            rel: None,
            head: None,
        }
    }

    /// Create a token carrying a dependency relation and head index.
    pub fn with_dependency(
        text: impl Into<String>,
        lemma: impl Into<String>,
        pos: PosTag,
        position: usize,
        rel: impl Into<String>,
        head: usize,
    ) -> Self {
        Self {
            text: text.into(),
            lemma: lemma.into(),
            pos,
            position,
            rel: Some(rel.into()),
            head: Some(head),
        }
    }

    /// Check whether this token is an adjectival modifier by dependency.
    pub fn is_amod(&self) -> bool {
        self.rel.as_deref() == Some(REL_AMOD)
    }
}

/// A sentence: the original text plus its ordered token sequence.
///
/// Dependency heads are indices into `tokens` — a flat tree/forest
/// referencing by index, so there are no ownership cycles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sentence {
    /// The original sentence text (used for collocation examples)
    pub text: String,
    /// Sentence index within the document
    pub index: usize,
    /// Ordered tokens
    pub tokens: Vec<Token>,
}

impl Sentence {
    /// Create a new sentence.
    pub fn new(text: impl Into<String>, index: usize, tokens: Vec<Token>) -> Self {
        Self {
            text: text.into(),
            index,
            tokens,
        }
    }

    /// Check if the sentence has no tokens. Contributes nothing to any
    /// downstream stage; not an error.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// A fully analyzed document: the materialized sentence stream plus the
/// number of sentences the analyzer had to drop.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Sentences in document order
    pub sentences: Vec<Sentence>,
    /// Sentences the analyzer failed on internally and omitted
    pub skipped_sentences: usize,
}

impl Document {
    /// Create a document from analyzed sentences.
    pub fn new(sentences: Vec<Sentence>, skipped_sentences: usize) -> Self {
        Self {
            sentences,
            skipped_sentences,
        }
    }

    /// Total token count across all sentences.
    pub fn token_count(&self) -> usize {
        self.sentences.iter().map(|s| s.tokens.len()).sum()
    }

    /// Iterate over all tokens in document order.
    pub fn tokens(&self) -> impl Iterator<Item = &Token> {
        self.sentences.iter().flat_map(|s| s.tokens.iter())
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for an analysis run.
///
/// Caps and window sizes are configuration, not hardcoded constants, so
/// capping behavior can be verified precisely in tests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Maximum example sentences/contexts stored per dictionary entry
    /// and per collocation pair
    pub max_examples: usize,
    /// Symmetric token window (± positions) for fallback pair extraction
    pub window_radius: usize,
    /// Entries per POS category in the top-frequency lists
    pub top_n: usize,
    /// Treat VERB-tagged participles in amod position as adjectives
    /// (dependency strategy only; the window fallback never does)
    pub include_participles: bool,
    /// Tokens of surrounding context (± positions) captured for
    /// dictionary examples
    pub context_window: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            max_examples: 3,
            window_radius: 2,
            top_n: 100,
            include_participles: true,
            context_window: 6,
        }
    }
}

impl AnalyzerConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.max_examples == 0 {
            return Err(AnalysisError::invalid_config("max_examples must be > 0"));
        }
        if self.window_radius == 0 {
            return Err(AnalysisError::invalid_config("window_radius must be > 0"));
        }
        if self.top_n == 0 {
            return Err(AnalysisError::invalid_config("top_n must be > 0"));
        }
        if self.context_window == 0 {
            return Err(AnalysisError::invalid_config("context_window must be > 0"));
        }
        Ok(())
    }

    /// Builder method: set the per-entry example cap.
    pub fn with_max_examples(mut self, max_examples: usize) -> Self {
        self.max_examples = max_examples;
        self
    }

    /// Builder method: set the fallback window radius.
    pub fn with_window_radius(mut self, window_radius: usize) -> Self {
        self.window_radius = window_radius;
        self
    }

    /// Builder method: set the top-N list length.
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Builder method: include or exclude participles in the dependency
    /// strategy.
    pub fn with_include_participles(mut self, include: bool) -> Self {
        self.include_participles = include;
        self
    }

    /// Builder method: set the dictionary example context window.
    pub fn with_context_window(mut self, context_window: usize) -> Self {
        self.context_window = context_window;
        self
    }
}
