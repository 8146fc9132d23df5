//! decoder/types.rs
//! Decode outcome types.

use std::fmt;
use serde::{Serialize, Deserialize};

use crate::records::{InertialSample, MagneticSample, OrientationSample, SampleRecord, SampleTag};

/// Why decoding ended. None of these is an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum StopReason {
    /// Every byte was consumed.
    EndOfStream,
    /// Tag byte at `offset` is not a known layout.
    UnknownTag { offset: usize, tag: u8 },
    /// Known tag at `offset` with fewer payload bytes than its layout needs.
    TruncatedPayload {
        offset: usize,
        tag: SampleTag,
        available: usize,
        needed: usize,
    },
}

impl StopReason {
    /// Offset of the first uninterpreted byte, if decoding stopped early.
    pub fn offset(&self) -> Option<usize> {
        match self {
            StopReason::EndOfStream => None,
            StopReason::UnknownTag { offset, .. } => Some(*offset),
            StopReason::TruncatedPayload { offset, .. } => Some(*offset),
        }
    }

    pub fn is_clean(&self) -> bool {
        matches!(self, StopReason::EndOfStream)
    }
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopReason::EndOfStream =>
                write!(f, "end of stream"),
            StopReason::UnknownTag { offset, tag } =>
                write!(f, "unknown tag 0x{:02x} at offset {}", tag, offset),
            StopReason::TruncatedPayload { offset, tag, available, needed } =>
                write!(f, "truncated {} record at offset {}: {} of {} payload bytes", tag, offset, available, needed),
        }
    }
}

/// Per-kind record counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KindCounts {
    pub inertial: usize,
    pub orientation: usize,
    pub magnetic: usize,
}

impl KindCounts {
    pub fn total(&self) -> usize {
        self.inertial + self.orientation + self.magnetic
    }

    pub fn get(&self, tag: SampleTag) -> usize {
        match tag {
            SampleTag::Inertial    => self.inertial,
            SampleTag::Orientation => self.orientation,
            SampleTag::Magnetic    => self.magnetic,
        }
    }

    /// Bytes occupied by these records on the wire (tags included).
    pub fn wire_len(&self) -> usize {
        SampleTag::ALL.iter().map(|t| self.get(*t) * t.record_len()).sum()
    }
}

/// Decoded recording, partitioned by sample kind.
///
/// Each sequence keeps arrival order within its kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecodedStream {
    pub inertial: Vec<InertialSample>,
    pub orientation: Vec<OrientationSample>,
    pub magnetic: Vec<MagneticSample>,
    /// Bytes of the input that were interpreted.
    pub consumed: usize,
    /// Bytes of input observed.
    pub total_len: usize,
    pub stop: StopReason,
}

impl Default for DecodedStream {
    fn default() -> Self {
        Self {
            inertial: Vec::new(),
            orientation: Vec::new(),
            magnetic: Vec::new(),
            consumed: 0,
            total_len: 0,
            stop: StopReason::EndOfStream,
        }
    }
}

impl DecodedStream {
    /// Partition one record into its kind's sequence.
    pub fn push(&mut self, record: SampleRecord) {
        match record {
            SampleRecord::Inertial(s)    => self.inertial.push(s),
            SampleRecord::Orientation(s) => self.orientation.push(s),
            SampleRecord::Magnetic(s)    => self.magnetic.push(s),
        }
    }

    pub fn counts(&self) -> KindCounts {
        KindCounts {
            inertial: self.inertial.len(),
            orientation: self.orientation.len(),
            magnetic: self.magnetic.len(),
        }
    }

    /// Total records across kinds.
    pub fn len(&self) -> usize {
        self.counts().total()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Bytes left uninterpreted after the stop point.
    pub fn trailing_len(&self) -> usize {
        self.total_len.saturating_sub(self.consumed)
    }

    pub fn is_clean(&self) -> bool {
        self.stop.is_clean()
    }

    pub fn inertial_timestamps(&self) -> Vec<u32> {
        self.inertial.iter().map(|s| s.timestamp).collect()
    }

    pub fn orientation_timestamps(&self) -> Vec<u32> {
        self.orientation.iter().map(|s| s.timestamp).collect()
    }

    pub fn magnetic_timestamps(&self) -> Vec<u32> {
        self.magnetic.iter().map(|s| s.timestamp).collect()
    }
}
