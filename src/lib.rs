pub mod analyzers;
pub mod decode;
pub mod error;
pub mod output;
pub mod parser;

use std::path::Path;

use crate::analyzers::aggregate::aggregate_courses;
use crate::analyzers::types::GpaReport;
use crate::error::TranscriptError;

/// Reads, decodes, parses and aggregates a transcript file in one pass.
pub fn compute_gpa<P: AsRef<Path>>(path: P) -> Result<GpaReport, TranscriptError> {
    let decoded = decode::read_transcript(path)?;
    let records = parser::parse_transcript(&decoded.text)?;
    Ok(aggregate_courses(records))
}
