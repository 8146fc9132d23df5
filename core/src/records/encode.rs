//! records/encode.rs
//!
//! Record encoding in the device layout.
//!
//! Used to build synthetic recordings and to check the decoder against a
//! known byte image.

use crate::records::types::SampleRecord;

/// Append one record to `out`.
///
/// Layout:
///
/// ```text
/// [ tag (1) ]
/// [ timestamp (4) ]
/// [ fields (N) ]   inertial: gyro i16 x3, acc i16 x3
///                  orientation: f32 x4
///                  magnetic: i16 x3
/// ```
pub fn encode_record_into(record: &SampleRecord, out: &mut Vec<u8>) {
    out.reserve(record.record_len());
    out.push(record.tag().to_u8());
    out.extend_from_slice(&record.timestamp().to_le_bytes());

    match record {
        SampleRecord::Inertial(s) => {
            for v in s.gyro_raw.iter().chain(s.acc_raw.iter()) {
                out.extend_from_slice(&v.to_le_bytes());
            }
        }
        SampleRecord::Orientation(s) => {
            for v in s.raw {
                out.extend_from_slice(&v.to_le_bytes());
            }
        }
        SampleRecord::Magnetic(s) => {
            for v in s.raw {
                out.extend_from_slice(&v.to_le_bytes());
            }
        }
    }
}

/// Encode one record into a fresh buffer.
pub fn encode_record(record: &SampleRecord) -> Vec<u8> {
    let mut out = Vec::with_capacity(record.record_len());
    encode_record_into(record, &mut out);
    out
}

/// Encode a sequence of records back to back (no delimiters).
pub fn encode_records<'a, I>(records: I) -> Vec<u8>
where
    I: IntoIterator<Item = &'a SampleRecord>,
{
    let mut out = Vec::new();
    for record in records {
        encode_record_into(record, &mut out);
    }
    out
}
