//! records/types.rs
//! Sample tags, typed sample records and codec errors.
//!
//! Notes:
//! - Values are raw device units; no scaling or range checks happen here.
//! - Quaternion components keep the device order (not necessarily w-first).

use std::fmt;
use num_enum::TryFromPrimitive;
use serde::{Serialize, Deserialize};
use thiserror::Error;

use crate::constants::{
    tag_ids, INERTIAL_PAYLOAD_LEN, MAGNETIC_PAYLOAD_LEN, ORIENTATION_PAYLOAD_LEN, TAG_LEN,
};

/// Record layout identifiers (the leading tag byte).
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, Serialize, Deserialize)]
pub enum SampleTag {
    Inertial    = tag_ids::INERTIAL,
    Orientation = tag_ids::ORIENTATION,
    Magnetic    = tag_ids::MAGNETIC,
}

/// Result of classifying a tag byte.
///
/// `Unknown` is the end-of-stream sentinel for the decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagByte {
    Known(SampleTag),
    Unknown(u8),
}

impl SampleTag {
    pub const ALL: [SampleTag; 3] = [SampleTag::Inertial, SampleTag::Orientation, SampleTag::Magnetic];

    #[inline(always)]
    pub fn from_byte(b: u8) -> TagByte {
        match SampleTag::try_from_primitive(b) {
            Ok(tag) => TagByte::Known(tag),
            Err(_) => TagByte::Unknown(b),
        }
    }

    #[inline(always)]
    pub const fn to_u8(self) -> u8 {
        self as u8
    }

    /// Fixed payload size following the tag byte.
    #[inline(always)]
    pub const fn payload_len(self) -> usize {
        match self {
            SampleTag::Inertial    => INERTIAL_PAYLOAD_LEN,
            SampleTag::Orientation => ORIENTATION_PAYLOAD_LEN,
            SampleTag::Magnetic    => MAGNETIC_PAYLOAD_LEN,
        }
    }

    /// Tag byte + payload.
    #[inline(always)]
    pub const fn record_len(self) -> usize {
        TAG_LEN + self.payload_len()
    }

    pub const fn name(self) -> &'static str {
        match self {
            SampleTag::Inertial    => "inertial",
            SampleTag::Orientation => "orientation",
            SampleTag::Magnetic    => "magnetic",
        }
    }
}

impl fmt::Display for SampleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Gyroscope + accelerometer sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InertialSample {
    /// Device clock, milliseconds.
    pub timestamp: u32,
    pub gyro_raw: [i16; 3],
    pub acc_raw: [i16; 3],
}

/// Magnetometer sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MagneticSample {
    pub timestamp: u32,
    pub raw: [i16; 3],
}

/// Orientation quaternion sample.
///
/// `PartialEq` compares floats numerically; use [`OrientationSample::bits`]
/// when bit-exact comparison is required.
///
/// Serialized as `{ timestamp, raw, bits }`. JSON has no NaN or infinity,
/// so non-finite components appear as `null` in `raw`; `bits` always holds
/// the exact IEEE-754 words and is what deserialization reads back.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(into = "OrientationRepr", from = "OrientationRepr")]
pub struct OrientationSample {
    pub timestamp: u32,
    pub raw: [f32; 4],
}

impl OrientationSample {
    pub fn bits(&self) -> [u32; 4] {
        self.raw.map(f32::to_bits)
    }
}

#[derive(Serialize, Deserialize)]
struct OrientationRepr {
    timestamp: u32,
    #[serde(default)]
    raw: [Option<f32>; 4],
    bits: [u32; 4],
}

impl From<OrientationSample> for OrientationRepr {
    fn from(s: OrientationSample) -> Self {
        Self {
            timestamp: s.timestamp,
            raw: s.raw.map(|v| v.is_finite().then_some(v)),
            bits: s.bits(),
        }
    }
}

impl From<OrientationRepr> for OrientationSample {
    fn from(r: OrientationRepr) -> Self {
        Self {
            timestamp: r.timestamp,
            raw: r.bits.map(f32::from_bits),
        }
    }
}

/// One decoded record, closed over the known layouts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SampleRecord {
    Inertial(InertialSample),
    Orientation(OrientationSample),
    Magnetic(MagneticSample),
}

impl SampleRecord {
    pub fn tag(&self) -> SampleTag {
        match self {
            SampleRecord::Inertial(_)    => SampleTag::Inertial,
            SampleRecord::Orientation(_) => SampleTag::Orientation,
            SampleRecord::Magnetic(_)    => SampleTag::Magnetic,
        }
    }

    pub fn timestamp(&self) -> u32 {
        match self {
            SampleRecord::Inertial(s)    => s.timestamp,
            SampleRecord::Orientation(s) => s.timestamp,
            SampleRecord::Magnetic(s)    => s.timestamp,
        }
    }

    /// Encoded size including the tag byte.
    pub fn record_len(&self) -> usize {
        self.tag().record_len()
    }
}

impl From<InertialSample> for SampleRecord {
    fn from(s: InertialSample) -> Self {
        SampleRecord::Inertial(s)
    }
}

impl From<OrientationSample> for SampleRecord {
    fn from(s: OrientationSample) -> Self {
        SampleRecord::Orientation(s)
    }
}

impl From<MagneticSample> for SampleRecord {
    fn from(s: MagneticSample) -> Self {
        SampleRecord::Magnetic(s)
    }
}

/// Strict single-record codec errors.
///
/// The stream decoder never returns these: it stops silently instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    #[error("buffer too short: have {have}, need {need}")]
    BufferTooShort { have: usize, need: usize },

    #[error("unknown sample tag: 0x{0:02x}")]
    UnknownTag(u8),
}
