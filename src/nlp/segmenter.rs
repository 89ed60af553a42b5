//! Unicode-aware sentence and word segmentation
//!
//! UAX #29 compliant segmentation via `unicode-segmentation`. Words that
//! contain no alphanumeric character (pure punctuation runs) are dropped
//! at this layer; the morphology layer never sees them.

use unicode_segmentation::UnicodeSegmentation;

/// A segmented but not yet analyzed sentence.
#[derive(Debug, Clone)]
pub struct RawSentence {
    /// The trimmed sentence text
    pub text: String,
    /// Word tokens in order
    pub words: Vec<String>,
}

/// A Unicode-aware segmenter following UAX #29.
#[derive(Debug, Clone, Default)]
pub struct Segmenter {
    /// Minimum word length (in chars) to keep
    min_word_length: usize,
}

impl Segmenter {
    /// Create a segmenter with default settings.
    pub fn new() -> Self {
        Self { min_word_length: 1 }
    }

    /// Set the minimum word length.
    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_word_length = min_length;
        self
    }

    /// Split text into sentences with their word tokens.
    ///
    /// Sentences that contain no word tokens (e.g. a run of punctuation)
    /// are dropped here; they carry no analyzable content.
    pub fn segment(&self, text: &str) -> Vec<RawSentence> {
        let mut sentences = Vec::new();

        for (start, end) in self.sentence_boundaries(text) {
            let sent_text = text[start..end].trim();
            if sent_text.is_empty() {
                continue;
            }

            let words: Vec<String> = sent_text
                .unicode_words()
                .filter(|w| w.chars().count() >= self.min_word_length)
                .filter(|w| w.chars().any(|c| c.is_alphanumeric()))
                .map(|w| w.to_string())
                .collect();

            if words.is_empty() {
                continue;
            }

            sentences.push(RawSentence {
                text: sent_text.to_string(),
                words,
            });
        }

        sentences
    }

    /// Find sentence boundaries in text.
    fn sentence_boundaries(&self, text: &str) -> Vec<(usize, usize)> {
        let mut boundaries = Vec::new();
        let mut start = 0;

        for (idx, _) in text.split_sentence_bound_indices() {
            if idx > start && !text[start..idx].trim().is_empty() {
                boundaries.push((start, idx));
            }
            start = idx;
        }

        if start < text.len() && !text[start..].trim().is_empty() {
            boundaries.push((start, text.len()));
        }

        // Treat an unpunctuated fragment as a single sentence
        if boundaries.is_empty() && !text.trim().is_empty() {
            boundaries.push((0, text.len()));
        }

        boundaries
    }
}
