//! records/decode.rs
//!
//! Payload decoding.
//!
//! Design notes:
//! - Field order must match `encode.rs` exactly.
//! - Reads exactly `tag.payload_len()` bytes, never more.
//! - No range validation: saturated or all-zero values pass through.

use byteorder::{ByteOrder, LittleEndian};

use crate::constants::TAG_LEN;
use crate::records::types::{
    InertialSample, MagneticSample, OrientationSample, RecordError, SampleRecord, SampleTag, TagByte,
};

#[inline]
fn read_i16x3(buf: &[u8]) -> [i16; 3] {
    [
        LittleEndian::read_i16(&buf[0..2]),
        LittleEndian::read_i16(&buf[2..4]),
        LittleEndian::read_i16(&buf[4..6]),
    ]
}

#[inline]
fn read_f32x4(buf: &[u8]) -> [f32; 4] {
    [
        LittleEndian::read_f32(&buf[0..4]),
        LittleEndian::read_f32(&buf[4..8]),
        LittleEndian::read_f32(&buf[8..12]),
        LittleEndian::read_f32(&buf[12..16]),
    ]
}

/// Decode a payload whose tag has already been read.
///
/// Caller guarantees `payload.len() >= tag.payload_len()`; extra bytes are ignored.
#[inline]
pub fn decode_payload(tag: SampleTag, payload: &[u8]) -> SampleRecord {
    debug_assert!(payload.len() >= tag.payload_len());

    // Layout: [ timestamp (4) ] [ fields ... ]
    let timestamp = LittleEndian::read_u32(&payload[0..4]);

    match tag {
        SampleTag::Inertial => SampleRecord::Inertial(InertialSample {
            timestamp,
            gyro_raw: read_i16x3(&payload[4..10]),
            acc_raw: read_i16x3(&payload[10..16]),
        }),
        SampleTag::Orientation => SampleRecord::Orientation(OrientationSample {
            timestamp,
            raw: read_f32x4(&payload[4..20]),
        }),
        SampleTag::Magnetic => SampleRecord::Magnetic(MagneticSample {
            timestamp,
            raw: read_i16x3(&payload[4..10]),
        }),
    }
}

/// Strictly decode one record (tag + payload) from the front of `wire`.
///
/// # Returns
/// - `Ok((record, consumed))` where `consumed` is `tag.record_len()`.
/// - `Err(RecordError)` on empty input, unknown tag or short payload.
pub fn decode_record(wire: &[u8]) -> Result<(SampleRecord, usize), RecordError> {
    let Some(&tag_byte) = wire.first() else {
        return Err(RecordError::BufferTooShort { have: 0, need: TAG_LEN });
    };

    let tag = match SampleTag::from_byte(tag_byte) {
        TagByte::Known(tag) => tag,
        TagByte::Unknown(raw) => return Err(RecordError::UnknownTag(raw)),
    };

    let need = tag.record_len();
    if wire.len() < need {
        return Err(RecordError::BufferTooShort { have: wire.len(), need });
    }

    Ok((decode_payload(tag, &wire[TAG_LEN..need]), need))
}
