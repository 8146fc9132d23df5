//! assembly/concat.rs
//!
//! All-or-nothing concatenation of byte sources.

use std::io::{self, Read};

use bytes::{Bytes, BytesMut};
use thiserror::Error;
use tracing::debug;

use crate::assembly::source::{open_input, InputSource};

#[derive(Debug, Error)]
pub enum AssembleError {
    /// Source `index` (0-based, in input order) could not be fully read.
    #[error("source #{index} ({origin}) unavailable: {source}")]
    SourceUnavailable {
        index: usize,
        origin: String,
        #[source]
        source: io::Error,
    },
}

impl AssembleError {
    pub fn index(&self) -> usize {
        match self {
            AssembleError::SourceUnavailable { index, .. } => *index,
        }
    }
}

fn read_source(src: InputSource, out: &mut Vec<u8>) -> io::Result<usize> {
    let mut reader = open_input(src)?;
    reader.read_to_end(out)
}

/// Concatenate `sources` in order into one immutable buffer.
///
/// - No delimiter between sources, no byte transformation.
/// - Zero sources (or only empty ones) yields an empty buffer.
/// - Any failure discards everything read so far.
pub fn assemble<I>(sources: I) -> Result<Bytes, AssembleError>
where
    I: IntoIterator<Item = InputSource>,
{
    let mut sources: Vec<InputSource> = sources.into_iter().collect();

    // Single in-memory source: hand the buffer back without copying.
    if let [InputSource::Memory(_)] = sources.as_slice() {
        if let Some(InputSource::Memory(b)) = sources.pop() {
            debug!(index = 0, len = b.len(), "assembled memory source");
            return Ok(b);
        }
    }

    let capacity: usize = sources.iter().filter_map(InputSource::size_hint).sum();
    let mut out = Vec::with_capacity(capacity);

    for (index, src) in sources.into_iter().enumerate() {
        let origin = src.origin();
        let read = read_source(src, &mut out)
            .map_err(|source| AssembleError::SourceUnavailable { index, origin: origin.clone(), source })?;
        debug!(index, origin = %origin, len = read, "assembled source");
    }

    Ok(Bytes::from(out))
}

/// Concatenate already-materialized chunks (no I/O, cannot fail).
pub fn concat_chunks(chunks: &[impl AsRef<[u8]>]) -> Bytes {
    let total = chunks.iter().map(|c| c.as_ref().len()).sum();
    let mut out = BytesMut::with_capacity(total);
    for chunk in chunks {
        out.extend_from_slice(chunk.as_ref());
    }
    out.freeze()
}
