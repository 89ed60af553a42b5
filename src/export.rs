//! JSON export for analysis results
//!
//! Thin serde_json wrappers that map serialization failures into the
//! crate error type. Output is deterministic for identical inputs
//! because every serialized structure carries a total order
//! (`processing_time_ms` excepted).

use std::io::Write;

use crate::errors::Result;
use crate::pipeline::AnalysisResult;

/// Serialize a result to a compact JSON string.
pub fn to_json(result: &AnalysisResult) -> Result<String> {
    Ok(serde_json::to_string(result)?)
}

/// Serialize a result to human-readable, indented JSON.
pub fn to_json_pretty(result: &AnalysisResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

/// Serialize a result directly into a writer.
pub fn write_json<W: Write>(result: &AnalysisResult, writer: W) -> Result<()> {
    Ok(serde_json::to_writer(writer, result)?)
}
