//! sensor-core
//!
//! Decoder for device-recorded motion-sensor sample streams.
//! Pure Rust, no FFI, no async runtime.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;
pub mod utils;

// Wire model
pub mod records;

// Stream layers
pub mod assembly;
pub mod decoder;

pub mod telemetry;
pub mod parallelism;

pub mod api;

pub use api::{decode_reader, decode_sources, decode_with_telemetry};

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::assembly::{assemble, InputSource};
    pub use crate::decoder::{decode_stream, DecodedStream, RecordDecoder, RecordReader, StopReason};
    pub use crate::records::{
        InertialSample, MagneticSample, OrientationSample, SampleRecord, SampleTag,
    };
    pub use crate::types::StreamError;
    pub use crate::{decode_reader, decode_sources, decode_with_telemetry};
}
