use std::path::PathBuf;

use thiserror::Error;

/// Failure taxonomy for the whole pipeline.
///
/// `Configuration` aborts the affected term's aggregation, `Encoding` is
/// fatal for one source file only, and `UndefinedScore` is recoverable by the
/// caller (the run driver drops the row and keeps a count).
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Unsupported term or a column-label mapping that does not line up with
    /// the file actually on disk.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The eligible (scored-party) vote share of a riding is zero, so the
    /// weighted score has no denominator.
    #[error("undefined score for '{name}' (term {term}): eligible vote share is zero")]
    UndefinedScore { name: String, term: u16 },

    /// The file is neither valid UTF-8 nor Latin-1.
    #[error("cannot decode {}: exhausted fallback encodings", path.display())]
    Encoding { path: PathBuf },

    #[error("parse error: {0}")]
    Parse(String),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PipelineError>;
