//! decoder/scan.rs
//!
//! Single decode step shared by the in-memory and streaming decoders.

use crate::constants::TAG_LEN;
use crate::records::{decode_payload, SampleRecord, SampleTag, TagByte};

/// Outcome of looking at the front of a window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Scan {
    /// Full record decoded; `len` bytes (tag + payload) to advance.
    Record { record: SampleRecord, len: usize },
    /// No byte in the window.
    Empty,
    /// Tag byte is not a known layout.
    Unknown(u8),
    /// Known tag, but only `available` payload bytes follow it.
    Incomplete { tag: SampleTag, available: usize },
}

#[inline]
pub(crate) fn scan(window: &[u8]) -> Scan {
    let Some(&tag_byte) = window.first() else {
        return Scan::Empty;
    };

    let tag = match SampleTag::from_byte(tag_byte) {
        TagByte::Known(tag) => tag,
        TagByte::Unknown(raw) => return Scan::Unknown(raw),
    };

    let payload = &window[TAG_LEN..];
    if payload.len() < tag.payload_len() {
        return Scan::Incomplete { tag, available: payload.len() };
    }

    Scan::Record {
        record: decode_payload(tag, &payload[..tag.payload_len()]),
        len: tag.record_len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_window() {
        assert_eq!(scan(&[]), Scan::Empty);
    }

    #[test]
    fn unknown_tag_is_reported_raw() {
        assert_eq!(scan(&[0x7f, 0, 0]), Scan::Unknown(0x7f));
    }

    #[test]
    fn tag_only_is_incomplete() {
        assert_eq!(
            scan(&[0x02]),
            Scan::Incomplete { tag: SampleTag::Magnetic, available: 0 }
        );
    }

    #[test]
    fn magnetic_record_advances_eleven_bytes() {
        let wire = [0x02, 5, 0, 0, 0, 1, 0, 2, 0, 3, 0, 0xAA];
        match scan(&wire) {
            Scan::Record { record, len } => {
                assert_eq!(len, 11);
                assert_eq!(record.timestamp(), 5);
                assert_eq!(record.tag(), SampleTag::Magnetic);
            }
            other => panic!("unexpected scan: {:?}", other),
        }
    }
}
