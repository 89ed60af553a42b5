//! Pipeline runner — orchestrates the analysis stages
//!
//! [`AnalysisPipeline`] threads a document through four stages: morphology
//! (tokenize, lemmatize, tag, parse), lemma dictionary, statistics, and
//! collocation extraction. Stage boundaries notify an optional
//! [`PipelineObserver`]. Fatal analyzer errors (empty input, nothing
//! tokenizable) abort the run; there are no partial results.

use rayon::prelude::*;

use crate::collocations::extract_collocations;
use crate::dictionary::build_dictionary;
use crate::errors::Result;
use crate::nlp::{MorphAnalyzer, RuAnalyzer};
use crate::pipeline::artifacts::{AnalysisResult, RunMetadata};
use crate::pipeline::observer::{
    NoopObserver, PipelineObserver, StageClock, StageReport, STAGE_COLLOCATIONS, STAGE_DICTIONARY,
    STAGE_STATISTICS, STAGE_TOKENIZE,
};
use crate::stats::compute_statistics;
use crate::types::AnalyzerConfig;

/// Enter a tracing span for a pipeline stage (when the `tracing` feature
/// is enabled). When disabled, this is a no-op and the compiler
/// eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("pipeline_stage", stage = $name).entered();
    };
}

/// The analysis pipeline: an analyzer plus a validated configuration.
///
/// Generic over the [`MorphAnalyzer`] so callers can substitute a
/// dictionary-backed engine; [`AnalysisPipeline::new`] wires in the
/// built-in heuristic one.
#[derive(Debug)]
pub struct AnalysisPipeline<A> {
    analyzer: A,
    cfg: AnalyzerConfig,
}

impl AnalysisPipeline<RuAnalyzer> {
    /// Build a pipeline around the built-in Russian analyzer.
    ///
    /// Fails fast on an invalid configuration rather than at run time.
    pub fn new(cfg: AnalyzerConfig) -> Result<Self> {
        Self::with_analyzer(RuAnalyzer::new(), cfg)
    }
}

impl Default for AnalysisPipeline<RuAnalyzer> {
    fn default() -> Self {
        // The default configuration always validates.
        Self::new(AnalyzerConfig::default()).unwrap()
    }
}

impl<A: MorphAnalyzer> AnalysisPipeline<A> {
    /// Build a pipeline around a caller-supplied analyzer.
    pub fn with_analyzer(analyzer: A, cfg: AnalyzerConfig) -> Result<Self> {
        cfg.validate()?;
        Ok(Self { analyzer, cfg })
    }

    /// The active configuration.
    pub fn config(&self) -> &AnalyzerConfig {
        &self.cfg
    }

    /// Analyze one document.
    pub fn run(&self, text: &str) -> Result<AnalysisResult> {
        self.run_with_observer(text, &mut NoopObserver)
    }

    /// Analyze one document, reporting stage boundaries to `observer`.
    pub fn run_with_observer(
        &self,
        text: &str,
        observer: &mut impl PipelineObserver,
    ) -> Result<AnalysisResult> {
        let total_clock = StageClock::start();

        // Stage 0: Morphological analysis
        trace_stage!(STAGE_TOKENIZE);
        observer.on_stage_start(STAGE_TOKENIZE);
        let clock = StageClock::start();
        let document = self.analyzer.analyze(text)?;
        let report = StageReport::with_items(clock.elapsed(), document.token_count());
        observer.on_stage_end(STAGE_TOKENIZE, &report);

        // Stage 1: Lemma dictionary
        trace_stage!(STAGE_DICTIONARY);
        observer.on_stage_start(STAGE_DICTIONARY);
        let clock = StageClock::start();
        let dictionary = build_dictionary(&document.sentences, &self.cfg);
        let report = StageReport::with_items(clock.elapsed(), dictionary.len());
        observer.on_stage_end(STAGE_DICTIONARY, &report);

        // Stage 2: Statistics
        trace_stage!(STAGE_STATISTICS);
        observer.on_stage_start(STAGE_STATISTICS);
        let clock = StageClock::start();
        let statistics = compute_statistics(&document.sentences, self.cfg.top_n);
        let report = StageReport::new(clock.elapsed());
        observer.on_stage_end(STAGE_STATISTICS, &report);

        // Stage 3: Collocations
        trace_stage!(STAGE_COLLOCATIONS);
        observer.on_stage_start(STAGE_COLLOCATIONS);
        let clock = StageClock::start();
        let collocations = extract_collocations(&document.sentences, &self.cfg);
        let report = StageReport::with_items(clock.elapsed(), collocations.unique_pairs);
        observer.on_stage_end(STAGE_COLLOCATIONS, &report);

        let meta = RunMetadata {
            char_count: text.chars().count(),
            word_count: statistics.total_words,
            token_count: statistics.total_tokens,
            sentence_count: document.sentences.len(),
            skipped_sentences: document.skipped_sentences,
            processing_time_ms: total_clock.elapsed().as_secs_f64() * 1000.0,
        };

        Ok(AnalysisResult {
            dictionary: dictionary.sorted_entries(),
            statistics,
            collocations,
            meta,
        })
    }

    /// Analyze several documents in parallel.
    ///
    /// Results keep the input order; each document succeeds or fails on
    /// its own.
    pub fn analyze_batch(&self, texts: &[&str]) -> Vec<Result<AnalysisResult>> {
        texts.par_iter().map(|text| self.run(text)).collect()
    }
}
