//! decoder/reader.rs
//!
//! Incremental decoder over any `io::Read`.
//!
//! The only suspension point is waiting for more bytes to complete the
//! current payload. End of source with a partial payload is the same silent
//! stop as the in-memory decoder, at the same offset.

use std::io::{self, Read};

use tracing::debug;

use crate::constants::DEFAULT_READ_CHUNK;
use crate::decoder::scan::{scan, Scan};
use crate::decoder::types::{DecodedStream, StopReason};
use crate::records::SampleRecord;
use crate::types::StreamError;

/// Streaming reader settings.
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Bytes requested per refill.
    pub chunk_size: usize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self { chunk_size: DEFAULT_READ_CHUNK }
    }
}

impl ReaderConfig {
    pub fn validate(&self) -> Result<(), StreamError> {
        if self.chunk_size == 0 {
            return Err(StreamError::Validation("reader chunk_size must be > 0".into()));
        }
        Ok(())
    }
}

#[derive(Debug)]
pub struct RecordReader<R: Read> {
    inner: R,
    buf: Vec<u8>,
    pos: usize,
    offset: usize,
    bytes_read: usize,
    chunk_size: usize,
    eof: bool,
    failed: bool,
    stop: Option<StopReason>,
}

impl<R: Read> RecordReader<R> {
    pub fn new(reader: R) -> Self {
        Self::from_parts(reader, DEFAULT_READ_CHUNK)
    }

    pub fn with_config(reader: R, config: &ReaderConfig) -> Result<Self, StreamError> {
        config.validate()?;
        Ok(Self::from_parts(reader, config.chunk_size))
    }

    fn from_parts(inner: R, chunk_size: usize) -> Self {
        Self {
            inner,
            buf: Vec::new(),
            pos: 0,
            offset: 0,
            bytes_read: 0,
            chunk_size,
            eof: false,
            failed: false,
            stop: None,
        }
    }

    /// Bytes consumed so far.
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn stop_reason(&self) -> Option<StopReason> {
        self.stop
    }

    // Append up to `chunk_size` bytes after dropping consumed ones.
    fn fill(&mut self) -> io::Result<usize> {
        if self.pos > 0 {
            self.buf.drain(..self.pos);
            self.pos = 0;
        }

        let start = self.buf.len();
        self.buf.resize(start + self.chunk_size, 0);
        loop {
            match self.inner.read(&mut self.buf[start..]) {
                Ok(n) => {
                    self.buf.truncate(start + n);
                    self.bytes_read += n;
                    if n == 0 {
                        self.eof = true;
                    }
                    return Ok(n);
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    self.buf.truncate(start);
                    return Err(e);
                }
            }
        }
    }

    fn finish(&mut self, reason: StopReason) {
        debug!(offset = self.offset, reason = %reason, "stream reader stopped");
        self.stop = Some(reason);
    }

    /// Next record, `Ok(None)` once the stream has stopped.
    pub fn next_record(&mut self) -> Result<Option<SampleRecord>, StreamError> {
        if self.stop.is_some() || self.failed {
            return Ok(None);
        }

        loop {
            let offset = self.offset;
            match scan(&self.buf[self.pos..]) {
                Scan::Record { record, len } => {
                    self.pos += len;
                    self.offset += len;
                    return Ok(Some(record));
                }
                Scan::Unknown(tag) => {
                    self.finish(StopReason::UnknownTag { offset, tag });
                    return Ok(None);
                }
                Scan::Empty if self.eof => {
                    self.finish(StopReason::EndOfStream);
                    return Ok(None);
                }
                Scan::Incomplete { tag, available } if self.eof => {
                    self.finish(StopReason::TruncatedPayload {
                        offset,
                        tag,
                        available,
                        needed: tag.payload_len(),
                    });
                    return Ok(None);
                }
                Scan::Empty | Scan::Incomplete { .. } => {
                    if let Err(e) = self.fill() {
                        self.failed = true;
                        return Err(StreamError::Io(e));
                    }
                }
            }
        }
    }

    /// Drain the reader into a partitioned stream.
    ///
    /// After a silent stop the rest of the source is read and counted so
    /// `trailing_len()` reflects the whole input.
    pub fn decode_all(mut self) -> Result<DecodedStream, StreamError> {
        let mut out = DecodedStream::default();
        while let Some(record) = self.next_record()? {
            out.push(record);
        }

        if !self.eof {
            let rest = io::copy(&mut self.inner, &mut io::sink())?;
            self.bytes_read += rest as usize;
        }

        out.consumed = self.offset;
        out.total_len = self.bytes_read;
        out.stop = self.stop.unwrap_or(StopReason::EndOfStream);
        Ok(out)
    }
}

impl<R: Read> Iterator for RecordReader<R> {
    type Item = Result<SampleRecord, StreamError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_record().transpose()
    }
}
