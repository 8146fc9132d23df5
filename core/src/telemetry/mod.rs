//! telemetry/mod.rs
//! Decode telemetry: counters, stage timers and immutable snapshots.
//!
//! Notes:
//! - Counters are plain values owned by one decode; batch decodes merge them.
//! - Snapshots are immutable and serializable for reports.

pub mod counters;
pub mod timers;
pub mod snapshot;

pub use counters::*;
pub use timers::*;
pub use snapshot::*;
