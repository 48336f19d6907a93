//! telemetry/mod.rs
//! Counters collected while writing or scanning a stream, and the immutable
//! snapshots built from them.

pub mod counters;
pub mod snapshot;

pub use counters::*;
pub use snapshot::*;
