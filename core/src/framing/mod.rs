//! Wire framing for the record stream.
//!
//! Responsibilities:
//! - Prefix a payload with its big-endian u64 length
//! - Pull one frame at a time off a byte source
//! - Treat a short prefix or short payload as end-of-stream
//!
//! Non-responsibilities:
//! - Compression
//! - File handling
//! - Interpreting payloads

pub mod types;
pub mod encode;
pub mod decode;

pub use types::{Frame, FrameError, FrameSplit};
pub use encode::{encode_frame, write_frame};
pub use decode::{decode_frame, decode_frame_with_len, read_exact_or_eof, split_frame};
