//! recorder-core
//!
//! Append-only record streams: each payload compressed on its own and
//! stored behind a big-endian u64 length. Writers, lazy readers, a
//! polling follower, plus the capture and replay roles built on them.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;
pub mod config;

// Record layers
pub mod compression;
pub mod framing;
pub mod stream;
pub mod telemetry;

// Roles
pub mod capture;
pub mod sink;
pub mod sinks;
pub mod replay;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::capture::{CaptureSession, ChannelEndpoint, ChannelMessage, FramedMessageSource, MessageSource};
    pub use crate::compression::CompressionCodec;
    pub use crate::config::{CompressionConfig, StreamConfig};
    pub use crate::replay::{follow, replay, replay_path, ReplaySummary};
    pub use crate::sink::{MessageSink, SinkError};
    pub use crate::stream::{read_records, read_records_from_path, RecordReader, RecordWriter, StreamFollower};
    pub use crate::telemetry::{StreamCounters, TelemetrySnapshot};
    pub use crate::types::StreamError;
}
