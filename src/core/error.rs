//! Error type shared by the store, the strict mutation path and export.

use thiserror::Error;

use super::step::StepId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("no step with id {0}")]
    StepNotFound(StepId),

    #[error("step index {index} out of range for timeline of length {len}")]
    StepIndexOutOfRange { index: usize, len: usize },

    #[error("unknown zone: {0}")]
    UnknownZone(String),

    #[error("invalid timeline: {0}")]
    InvalidTimeline(String),

    #[error("export failed: {0}")]
    Export(String),
}

pub type BoardResult<T> = Result<T, BoardError>;
