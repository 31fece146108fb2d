use std::str::Utf8Error;
use thiserror::Error;

/// Errors produced by the diff engine.
///
/// Diffing itself never fails on well-formed sequences; these cover the
/// explicit conversions and hunk application.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiffError {
    #[error("view is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] Utf8Error),
    #[error("context mismatch at position {position}")]
    ContextMismatch { position: usize },
    #[error("hunk starting at {pos_x} overlaps or precedes position {cursor}")]
    HunkOutOfOrder { pos_x: usize, cursor: usize },
    #[error("hunk reaches position {end} past the end of a sequence of length {len}")]
    HunkOutOfRange { end: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, DiffError>;
