//! telemetry/snapshot.rs
//! Immutable decode report built from counters + timer.

use std::time::Duration;
use serde::{Serialize, Deserialize};

use crate::telemetry::counters::DecodeCounters;
use crate::telemetry::timers::{StageTimes, TelemetryTimer};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecodeSnapshot {
    pub counters: DecodeCounters,
    pub records_total: u64,
    /// Consumed bytes per second of wall time (0 when elapsed is 0).
    pub throughput_bytes_per_sec: f64,
    pub elapsed: Duration,
    pub stage_times: StageTimes,
}

impl DecodeSnapshot {
    pub fn from(counters: &DecodeCounters, timer: &TelemetryTimer) -> Self {
        let elapsed = timer.elapsed();

        let throughput = if elapsed.as_secs_f64() > 0.0 {
            counters.bytes_consumed as f64 / elapsed.as_secs_f64()
        } else {
            0.0
        };

        Self {
            counters: counters.clone(),
            records_total: counters.records_total(),
            throughput_bytes_per_sec: throughput,
            elapsed,
            stage_times: timer.stage_times.clone(),
        }
    }

    /// Internal consistency:
    /// - consumed + trailing never exceeds what was assembled (when sources were counted)
    /// - stage times fit inside elapsed
    pub fn sanity_check(&self) -> bool {
        let c = &self.counters;
        let bytes_ok = c.sources == 0 || c.bytes_consumed + c.bytes_trailing <= c.bytes_assembled;
        bytes_ok && self.stage_times.total() <= self.elapsed
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
