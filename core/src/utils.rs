/// Hex rendering of at most `max` leading bytes, with `..` when cut.
pub fn hex_preview(bytes: &[u8], max: usize) -> String {
    if bytes.len() <= max {
        hex::encode(bytes)
    } else {
        format!("{}..", hex::encode(&bytes[..max]))
    }
}

/// Consecutive differences of device-clock timestamps.
///
/// Signed so that a non-monotonic clock (or a u32 wrap) shows up as a
/// negative delta instead of being hidden. The decoder never calls this.
pub fn timestamp_deltas(timestamps: &[u32]) -> Vec<i64> {
    timestamps
        .windows(2)
        .map(|w| w[1] as i64 - w[0] as i64)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_truncates() {
        assert_eq!(hex_preview(&[0xde, 0xad], 4), "dead");
        assert_eq!(hex_preview(&[1, 2, 3, 4, 5], 2), "0102..");
        assert_eq!(hex_preview(&[], 2), "");
    }

    #[test]
    fn deltas_keep_sign() {
        assert_eq!(timestamp_deltas(&[10, 15, 12]), vec![5, -3]);
        assert!(timestamp_deltas(&[7]).is_empty());
        assert!(timestamp_deltas(&[]).is_empty());
    }
}
