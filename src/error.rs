//! File-level failures surfaced to the user.
//!
//! Row-level problems never become errors; they are counted and skipped by
//! the aggregator instead.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TranscriptError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// None of the candidate encodings decoded the file.
    #[error("file is neither UTF-8 nor GBK encoded")]
    UnknownEncoding,

    #[error("missing required column `{0}`")]
    MissingColumn(&'static str),

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),
}
