//! constants.rs
//! Wire-level and default constants shared by every layer.

/// Width of the big-endian length prefix that precedes every frame.
pub const FRAME_PREFIX_LEN: usize = 8;

/// Upper bound on the buffer pre-allocated for a single frame payload.
/// Larger payloads still decode; the buffer just grows as bytes arrive.
pub const MAX_PREALLOC: usize = 1024 * 1024; // 1 MiB

/// Default storage file extension used by the capture role.
pub const DEFAULT_FILE_EXTENSION: &str = "rec";

/// Storage name fragment used when an endpoint records every channel.
pub const NO_TOPIC: &str = "NO_TOPIC";

/// URL scheme prefixed to captured endpoints.
pub const ENDPOINT_SCHEME: &str = "tcp";

/// Default follower poll interval in milliseconds.
pub const DEFAULT_POLL_MS: u64 = 500;

/// Default interval between capture progress reports, in seconds.
pub const DEFAULT_REPORT_SECS: u64 = 30;
