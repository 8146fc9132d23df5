//! Stream assembly.
//!
//! Responsibilities:
//! - Normalize files, buffers and readers into one input abstraction
//! - Join sources in order into a single immutable byte stream
//!
//! Non-responsibilities:
//! - Interpreting bytes (see `decoder`)

pub mod source;
pub mod concat;

pub use source::{
    InputSource,
    open_input,
};
pub use concat::{
    AssembleError,
    assemble,
    concat_chunks,
};
