use std::io;

use bytes::Bytes;

/// Outcome of parsing one frame out of an in-memory buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameSplit<'a> {
    /// A whole frame was present.
    /// `consumed` counts prefix and payload bytes.
    Complete { payload: &'a [u8], consumed: usize },
    /// The buffer ends inside the prefix or the payload.
    Incomplete,
}

/// A decoded frame together with the number of bytes it occupied on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub payload: Bytes,
    pub wire_len: u64,
}

/// Framing only fails when the source itself fails. Running out of bytes is
/// not an error at this layer.
#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    #[error("I/O error while reading frame: {0}")]
    Io(#[from] io::Error),

    #[error("declared frame length {0} does not fit in memory on this platform")]
    LengthOverflow(u64),
}
