use std::io;
use thiserror::Error;

use crate::{assembly::AssembleError, records::RecordError};

/// Unified error covering I/O, assembly, record codec and validation.
/// - `#[from]` conversions enable `?` across the crate.
/// - Silent truncation is not represented here: a decode that stops early is
///   a successful decode with a `StopReason`.
#[derive(Debug, Error)]
pub enum StreamError {
    /// I/O error while streaming records from a reader.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A byte source could not be fully read.
    #[error("assembly error: {0}")]
    Assemble(#[from] AssembleError),

    /// Strict single-record codec error.
    #[error("record error: {0}")]
    Record(#[from] RecordError),

    /// Worker pool failure in batch decoding.
    #[error("pipeline error: {0}")]
    Pipeline(&'static str),

    /// Invalid configuration with a descriptive message.
    #[error("validation error: {0}")]
    Validation(String),
}
