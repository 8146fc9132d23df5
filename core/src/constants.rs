//! Wire constants for recorded sample streams.
//!
//! Every record is `[tag (1)] [payload (N)]` where `N` is fixed per tag.
//! All multi-byte fields are little-endian, matching the producing device.

/// Tag identifiers (first byte of every record).
pub mod tag_ids {
    pub const INERTIAL: u8    = 0x00;
    pub const ORIENTATION: u8 = 0x01;
    pub const MAGNETIC: u8    = 0x02;
}

/// Tag byte length.
pub const TAG_LEN: usize = 1;

/// Device clock field (u32 milliseconds).
pub const TIMESTAMP_LEN: usize = 4;

/// Inertial payload: timestamp + gyro[3] + acc[3] as i16.
pub const INERTIAL_PAYLOAD_LEN: usize = TIMESTAMP_LEN + 6 * 2; // 16
/// Orientation payload: timestamp + quaternion[4] as f32.
pub const ORIENTATION_PAYLOAD_LEN: usize = TIMESTAMP_LEN + 4 * 4; // 20
/// Magnetometer payload: timestamp + raw[3] as i16.
pub const MAGNETIC_PAYLOAD_LEN: usize = TIMESTAMP_LEN + 3 * 2; // 10

/// Default refill size for the streaming reader.
pub const DEFAULT_READ_CHUNK: usize = 64 * 1024; // 64 KiB

/// Bounded queue depth per worker for batch decoding.
pub const DEFAULT_INFLIGHT_PER_WORKER: usize = 2;

/// Number of trailing bytes shown in diagnostics.
pub const TRAILING_PREVIEW_LEN: usize = 16;
