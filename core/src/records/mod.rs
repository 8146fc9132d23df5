//! Sample records and their wire codec.
//!
//! Responsibilities:
//! - Define sample tags and typed records
//! - Encode records into the device byte layout
//! - Decode single payloads / records
//!
//! Non-responsibilities:
//! - Stream iteration and stop policy (see `decoder`)
//! - IO
//! - Parallelism

pub mod types;
pub mod encode;
pub mod decode;

pub use types::{
    InertialSample,
    MagneticSample,
    OrientationSample,
    RecordError,
    SampleRecord,
    SampleTag,
    TagByte,
};
pub use encode::{
    encode_record,
    encode_record_into,
    encode_records,
};
pub use decode::{
    decode_payload,
    decode_record,
};
