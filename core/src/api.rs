//! Stable public API: assemble sources and decode them in one call.

use std::io::Read;

use tracing::debug;

use crate::assembly::{assemble, InputSource};
use crate::decoder::{decode_stream, DecodedStream, ReaderConfig, RecordReader};
use crate::telemetry::{DecodeCounters, DecodeSnapshot, Stage, TelemetryTimer};
use crate::types::StreamError;

/// Assemble `sources` in order, then decode the concatenation.
///
/// Fails only when a source is unavailable; a malformed tail is a
/// successful, early-stopped decode.
pub fn decode_sources<I>(sources: I) -> Result<DecodedStream, StreamError>
where
    I: IntoIterator<Item = InputSource>,
{
    let bytes = assemble(sources)?;
    Ok(decode_stream(&bytes))
}

/// [`decode_sources`] plus a telemetry snapshot of the run.
pub fn decode_with_telemetry<I>(sources: I) -> Result<(DecodedStream, DecodeSnapshot), StreamError>
where
    I: IntoIterator<Item = InputSource>,
{
    let mut timer = TelemetryTimer::new();
    let mut counters = DecodeCounters::default();

    let sources: Vec<InputSource> = sources.into_iter().collect();
    let source_count = sources.len();
    let bytes = timer.time(Stage::Assemble, || assemble(sources))?;

    // Per-source lengths are not kept after concatenation; count the total once.
    counters.sources = source_count as u64;
    counters.bytes_assembled = bytes.len() as u64;

    let stream = timer.time(Stage::Decode, || decode_stream(&bytes));
    counters.add_stream(&stream);
    timer.finish();

    let snapshot = DecodeSnapshot::from(&counters, &timer);
    debug!(records = snapshot.records_total, elapsed_us = snapshot.elapsed.as_micros() as u64, "decode telemetry");
    Ok((stream, snapshot))
}

/// Decode directly from a reader without materializing the whole input.
pub fn decode_reader<R: Read>(reader: R, config: &ReaderConfig) -> Result<DecodedStream, StreamError> {
    RecordReader::with_config(reader, config)?.decode_all()
}
