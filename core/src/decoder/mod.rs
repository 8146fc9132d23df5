//! Record decoding for recorded sample streams.
//!
//! Responsibilities:
//! - Walk a tag-prefixed stream with an explicit cursor
//! - Partition records by kind, preserving arrival order per kind
//! - Report where and why decoding stopped
//!
//! Non-responsibilities:
//! - Field validation or unit scaling
//! - Resynchronizing after unknown tags
//! - Source I/O (see `assembly`)

pub mod types;
pub mod iter;
pub mod reader;
pub(crate) mod scan;

use bytes::Bytes;
use tracing::{info, warn};

use crate::constants::TRAILING_PREVIEW_LEN;
use crate::records::SampleRecord;
use crate::utils::hex_preview;

pub use types::{
    DecodedStream,
    KindCounts,
    StopReason,
};
pub use iter::RecordDecoder;
pub use reader::{
    ReaderConfig,
    RecordReader,
};

/// Decode a fully materialized stream.
///
/// Never fails: an unknown tag or a truncated trailing record ends decoding
/// and is reported through `DecodedStream::stop`.
pub fn decode_stream(buf: &[u8]) -> DecodedStream {
    decode_stream_with(buf, |_| {})
}

/// [`decode_stream`] that also hands each record to `visit` in arrival
/// order, so callers needing the interleaved sequence decode only once.
pub fn decode_stream_with<F>(buf: &[u8], mut visit: F) -> DecodedStream
where
    F: FnMut(&SampleRecord),
{
    let mut decoder = RecordDecoder::new(buf);
    let mut out = DecodedStream::default();
    for record in decoder.by_ref() {
        visit(&record);
        out.push(record);
    }

    out.consumed = decoder.offset();
    out.total_len = buf.len();
    out.stop = decoder.stop_reason().unwrap_or(StopReason::EndOfStream);

    let counts = out.counts();
    info!(
        inertial = counts.inertial,
        orientation = counts.orientation,
        magnetic = counts.magnetic,
        consumed = out.consumed,
        "decoded stream"
    );
    if out.trailing_len() > 0 {
        warn!(
            trailing = out.trailing_len(),
            reason = %out.stop,
            head = %hex_preview(decoder.remaining(), TRAILING_PREVIEW_LEN),
            "trailing bytes not interpretable"
        );
    }

    out
}

/// Same as [`decode_stream`], for an owned assembled buffer.
pub fn decode_bytes(bytes: Bytes) -> DecodedStream {
    decode_stream(&bytes)
}
