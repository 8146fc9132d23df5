//! Batch decoding of independent recordings.
//!
//! Each recording is decoded on its own (never concatenated with the
//! others). Workers own their input and output, so nothing is shared
//! beyond the job and result channels.

use std::thread;

use bytes::Bytes;
use crossbeam::channel::bounded;
use tracing::debug;

use crate::constants::DEFAULT_INFLIGHT_PER_WORKER;
use crate::decoder::{decode_stream, DecodedStream};
use crate::telemetry::{DecodeCounters, DecodeSnapshot, Stage, TelemetryTimer};
use crate::types::StreamError;

/// Parallelism configuration
#[derive(Debug, Clone)]
pub struct ParallelismProfile {
    pub worker_count: usize,
    /// Bounded channel capacity for jobs and results.
    pub inflight: usize,
}

impl ParallelismProfile {
    pub fn single_threaded() -> Self {
        Self {
            worker_count: 1,
            inflight: 1,
        }
    }

    /// One worker per core, leaving one core free (at least one worker).
    pub fn dynamic() -> Self {
        let worker_count = num_cpus::get().saturating_sub(1).max(1);
        Self {
            worker_count,
            inflight: worker_count * DEFAULT_INFLIGHT_PER_WORKER,
        }
    }

    pub fn validate(&self) -> Result<(), StreamError> {
        if self.worker_count == 0 {
            return Err(StreamError::Validation("worker_count must be > 0".into()));
        }
        if self.inflight == 0 {
            return Err(StreamError::Validation("inflight must be > 0".into()));
        }
        Ok(())
    }
}

impl Default for ParallelismProfile {
    fn default() -> Self {
        Self::dynamic()
    }
}

/// Decode each recording independently; results keep input order.
pub fn decode_recordings(
    recordings: Vec<Bytes>,
    profile: &ParallelismProfile,
) -> Result<Vec<DecodedStream>, StreamError> {
    decode_recordings_with(recordings, profile, |_, bytes| decode_stream(bytes))
}

/// Run `job` over every recording on the worker pool.
///
/// `job` receives the recording's input index and bytes; outputs come back
/// in input order.
pub fn decode_recordings_with<T, F>(
    recordings: Vec<Bytes>,
    profile: &ParallelismProfile,
    job: F,
) -> Result<Vec<T>, StreamError>
where
    T: Send,
    F: Fn(usize, &[u8]) -> T + Sync,
{
    profile.validate()?;

    let total = recordings.len();
    if total == 0 {
        return Ok(Vec::new());
    }
    let workers = profile.worker_count.min(total);

    let (job_tx, job_rx) = bounded::<(usize, Bytes)>(profile.inflight);
    let (out_tx, out_rx) = bounded::<(usize, T)>(profile.inflight);

    let mut slots: Vec<Option<T>> = std::iter::repeat_with(|| None).take(total).collect();
    let job = &job;

    thread::scope(|scope| {
        // ---- Feeder ----
        scope.spawn(move || {
            for item in recordings.into_iter().enumerate() {
                if job_tx.send(item).is_err() {
                    break;
                }
            }
            // job_tx dropped here: closes the job channel
        });

        // ---- Workers ----
        for i in 0..workers {
            let rx = job_rx.clone();
            let tx = out_tx.clone();
            scope.spawn(move || {
                debug!(worker = i, "batch decode worker starting");
                for (index, bytes) in rx.iter() {
                    if tx.send((index, job(index, &bytes[..]))).is_err() {
                        break;
                    }
                }
                debug!(worker = i, "batch decode worker finished");
            });
        }
        drop(job_rx);
        drop(out_tx);

        // ---- Ordered collector ----
        for (index, out) in out_rx.iter() {
            slots[index] = Some(out);
        }
    });

    slots
        .into_iter()
        .map(|slot| slot.ok_or(StreamError::Pipeline("batch decode worker dropped a recording")))
        .collect()
}

/// [`decode_recordings`] plus merged telemetry over all recordings.
pub fn decode_recordings_with_telemetry(
    recordings: Vec<Bytes>,
    profile: &ParallelismProfile,
) -> Result<(Vec<DecodedStream>, DecodeSnapshot), StreamError> {
    let mut timer = TelemetryTimer::new();
    let mut counters = DecodeCounters::default();
    for r in &recordings {
        counters.add_source(r.len());
    }

    let streams = timer.time(Stage::Decode, || decode_recordings(recordings, profile))?;
    for s in &streams {
        counters.add_stream(s);
    }
    timer.finish();

    Ok((streams, DecodeSnapshot::from(&counters, &timer)))
}
