//! telemetry/snapshot.rs
//!
//! Design notes:
//! - `TelemetrySnapshot` is a plain, serde-serializable view of the counters.
//! - Elapsed time is stored as a `Duration` and reported as throughput.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::compression::CompressionCodec;
use crate::telemetry::counters::StreamCounters;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetrySnapshot {
    pub codec: CompressionCodec,
    pub records: u64,
    pub bytes_payload: u64,
    pub bytes_stored: u64,
    pub bytes_overhead: u64,
    pub bytes_wire: u64,
    /// `bytes_stored / bytes_payload`; above 1.0 when compression expands the data.
    pub compression_ratio: f64,
    pub throughput_payload_bytes_per_sec: f64,
    pub elapsed: Duration,
}

impl TelemetrySnapshot {
    pub fn from(counters: &StreamCounters, codec: CompressionCodec, elapsed: Duration) -> Self {
        let compression_ratio = if counters.bytes_payload > 0 {
            counters.bytes_stored as f64 / counters.bytes_payload as f64
        } else {
            0.0
        };

        let throughput = if elapsed.as_secs_f64() > 0.0 {
            counters.bytes_payload as f64 / elapsed.as_secs_f64()
        } else {
            0.0
        };

        Self {
            codec,
            records: counters.records,
            bytes_payload: counters.bytes_payload,
            bytes_stored: counters.bytes_stored,
            bytes_overhead: counters.bytes_overhead,
            bytes_wire: counters.wire_bytes(),
            compression_ratio,
            throughput_payload_bytes_per_sec: throughput,
            elapsed,
        }
    }

    /// Mean logical payload size, 0 for an empty stream.
    pub fn mean_payload_len(&self) -> f64 {
        if self.records == 0 {
            0.0
        } else {
            self.bytes_payload as f64 / self.records as f64
        }
    }

    pub fn sanity_check(&self) -> bool {
        self.bytes_wire == self.bytes_stored + self.bytes_overhead
            && self.bytes_overhead == self.records * crate::constants::FRAME_PREFIX_LEN as u64
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
