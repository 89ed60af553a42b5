//! Analysis pipeline: orchestration, observation, and output artifacts

pub mod artifacts;
pub mod observer;
pub mod runner;

pub use artifacts::{AnalysisResult, RunMetadata};
pub use observer::{
    NoopObserver, PipelineObserver, StageClock, StageReport, StageTimingObserver,
    STAGE_COLLOCATIONS, STAGE_DICTIONARY, STAGE_STATISTICS, STAGE_TOKENIZE,
};
pub use runner::AnalysisPipeline;
