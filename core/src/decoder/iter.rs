//! decoder/iter.rs
//!
//! Lazy record iterator over an immutable byte slice.

use std::iter::FusedIterator;

use crate::decoder::scan::{scan, Scan};
use crate::decoder::types::StopReason;
use crate::records::SampleRecord;

/// Lazy, finite, non-restartable record sequence.
///
/// Holds only a cursor into `buf`; records are decoded on demand. Once
/// `next()` returns `None`, `stop_reason()` explains why and `offset()` is
/// the number of bytes interpreted.
#[derive(Debug, Clone)]
pub struct RecordDecoder<'a> {
    buf: &'a [u8],
    offset: usize,
    stop: Option<StopReason>,
}

impl<'a> RecordDecoder<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, offset: 0, stop: None }
    }

    /// Bytes consumed so far (start of the next record).
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Input length.
    pub fn total_len(&self) -> usize {
        self.buf.len()
    }

    /// Bytes not yet interpreted.
    pub fn remaining(&self) -> &'a [u8] {
        &self.buf[self.offset..]
    }

    /// `Some` once the decoder has finished.
    pub fn stop_reason(&self) -> Option<StopReason> {
        self.stop
    }

    pub fn is_finished(&self) -> bool {
        self.stop.is_some()
    }
}

impl<'a> Iterator for RecordDecoder<'a> {
    type Item = SampleRecord;

    fn next(&mut self) -> Option<SampleRecord> {
        if self.stop.is_some() {
            return None;
        }

        let offset = self.offset;
        let reason = match scan(&self.buf[offset..]) {
            Scan::Record { record, len } => {
                self.offset += len;
                return Some(record);
            }
            Scan::Empty => StopReason::EndOfStream,
            // Unknown tag ends the stream; no resynchronization.
            Scan::Unknown(tag) => StopReason::UnknownTag { offset, tag },
            Scan::Incomplete { tag, available } => StopReason::TruncatedPayload {
                offset,
                tag,
                available,
                needed: tag.payload_len(),
            },
        };

        self.stop = Some(reason);
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.stop.is_some() {
            return (0, Some(0));
        }
        // Smallest record is a magnetic sample.
        let min_record = crate::records::SampleTag::Magnetic.record_len();
        (0, Some(self.remaining().len() / min_record))
    }
}

impl FusedIterator for RecordDecoder<'_> {}
