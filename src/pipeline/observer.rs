//! Pipeline observation hooks
//!
//! [`PipelineObserver`] lets callers watch stage boundaries without the
//! pipeline knowing who is listening. The default [`NoopObserver`] is
//! zero-cost; [`StageTimingObserver`] collects per-stage wall-clock
//! reports for profiling.

use std::time::{Duration, Instant};

/// Stage name constants, used for observer callbacks and tracing spans.
pub const STAGE_TOKENIZE: &str = "tokenize";
pub const STAGE_DICTIONARY: &str = "dictionary";
pub const STAGE_STATISTICS: &str = "statistics";
pub const STAGE_COLLOCATIONS: &str = "collocations";

/// Wall-clock timer for one stage.
#[derive(Debug)]
pub struct StageClock {
    started: Instant,
}

impl StageClock {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

/// What happened in one stage: elapsed time plus an optional item count
/// (tokens analyzed, entries built, pairs extracted).
#[derive(Debug, Clone)]
pub struct StageReport {
    pub elapsed: Duration,
    pub items: Option<usize>,
}

impl StageReport {
    pub fn new(elapsed: Duration) -> Self {
        Self {
            elapsed,
            items: None,
        }
    }

    pub fn with_items(elapsed: Duration, items: usize) -> Self {
        Self {
            elapsed,
            items: Some(items),
        }
    }
}

/// Observer of pipeline stage boundaries.
///
/// All methods have empty default bodies, so implementors override only
/// what they care about.
pub trait PipelineObserver {
    fn on_stage_start(&mut self, _stage: &'static str) {}
    fn on_stage_end(&mut self, _stage: &'static str, _report: &StageReport) {}
}

/// The do-nothing observer. Zero-sized; the compiler removes the calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl PipelineObserver for NoopObserver {}

/// Collects one [`StageReport`] per completed stage, in execution order.
#[derive(Debug, Default)]
pub struct StageTimingObserver {
    reports: Vec<(&'static str, StageReport)>,
}

impl StageTimingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Completed stages in execution order.
    pub fn reports(&self) -> &[(&'static str, StageReport)] {
        &self.reports
    }

    /// Total wall-clock time across all observed stages.
    pub fn total_elapsed(&self) -> Duration {
        self.reports.iter().map(|(_, r)| r.elapsed).sum()
    }
}

impl PipelineObserver for StageTimingObserver {
    fn on_stage_end(&mut self, stage: &'static str, report: &StageReport) {
        self.reports.push((stage, report.clone()));
    }
}
