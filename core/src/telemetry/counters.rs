//! telemetry/counters.rs
//! Mutable counters collected while assembling and decoding.
//!
//! Converted into an immutable `DecodeSnapshot` at the end of a run.
use std::ops::AddAssign;
use serde::{Serialize, Deserialize};

use crate::decoder::DecodedStream;

#[derive(Default, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodeCounters {
    pub sources: u64,
    pub bytes_assembled: u64,
    pub streams: u64,
    /// Streams that ended on an unknown tag or truncated payload.
    pub streams_stopped_early: u64,
    pub records_inertial: u64,
    pub records_orientation: u64,
    pub records_magnetic: u64,
    pub bytes_consumed: u64,
    pub bytes_trailing: u64,
}

impl DecodeCounters {
    /// Record one assembled source of `len` bytes.
    pub fn add_source(&mut self, len: usize) {
        self.sources += 1;
        self.bytes_assembled += len as u64;
    }

    /// Record one decoded stream.
    pub fn add_stream(&mut self, stream: &DecodedStream) {
        let counts = stream.counts();
        self.streams += 1;
        if !stream.is_clean() {
            self.streams_stopped_early += 1;
        }
        self.records_inertial += counts.inertial as u64;
        self.records_orientation += counts.orientation as u64;
        self.records_magnetic += counts.magnetic as u64;
        self.bytes_consumed += stream.consumed as u64;
        self.bytes_trailing += stream.trailing_len() as u64;
    }

    pub fn records_total(&self) -> u64 {
        self.records_inertial + self.records_orientation + self.records_magnetic
    }

    // Workers keep their own counters; merged once at the end.
    pub fn merge(&mut self, other: &DecodeCounters) {
        self.sources += other.sources;
        self.bytes_assembled += other.bytes_assembled;
        self.streams += other.streams;
        self.streams_stopped_early += other.streams_stopped_early;
        self.records_inertial += other.records_inertial;
        self.records_orientation += other.records_orientation;
        self.records_magnetic += other.records_magnetic;
        self.bytes_consumed += other.bytes_consumed;
        self.bytes_trailing += other.bytes_trailing;
    }
}

impl AddAssign for DecodeCounters {
    fn add_assign(&mut self, rhs: Self) {
        self.merge(&rhs);
    }
}
