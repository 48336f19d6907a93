//! telemetry/counters.rs
//! Mutable counters used while a stream is written or read.
//!
//! Summary: record counts and byte counts per stream.
//! Converted into an immutable `TelemetrySnapshot` when reporting.
use std::ops::AddAssign;

use serde::{Deserialize, Serialize};

use crate::constants::FRAME_PREFIX_LEN;

#[derive(Default, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamCounters {
    pub records: u64,
    /// Logical payload bytes before compression.
    pub bytes_payload: u64,
    /// Compressed payload bytes as stored inside frames.
    pub bytes_stored: u64,
    /// Length prefixes.
    pub bytes_overhead: u64,
}

impl StreamCounters {
    /// Record one frame.
    ///
    /// - `payload_len`: logical payload length
    /// - `stored_len`: compressed length written after the prefix
    pub fn add_record(&mut self, payload_len: usize, stored_len: usize) {
        self.records += 1;
        self.bytes_payload += payload_len as u64;
        self.bytes_stored += stored_len as u64;
        self.bytes_overhead += FRAME_PREFIX_LEN as u64;
    }

    /// Total bytes the counted records occupy on disk.
    pub fn wire_bytes(&self) -> u64 {
        self.bytes_stored + self.bytes_overhead
    }

    pub fn merge(&mut self, other: &StreamCounters) {
        self.records += other.records;
        self.bytes_payload += other.bytes_payload;
        self.bytes_stored += other.bytes_stored;
        self.bytes_overhead += other.bytes_overhead;
    }
}

impl AddAssign for StreamCounters {
    fn add_assign(&mut self, rhs: Self) {
        self.merge(&rhs);
    }
}
