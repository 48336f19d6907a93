use std::io;

use crate::{
    compression::CompressionError,
    framing::FrameError,
};

/// Unified stream error covering I/O, compression, decoding and configuration.
/// - `From<T>` impls enable `?` across the layers.
/// - End-of-stream is never an error; it surfaces as `None` from readers.
#[derive(Debug, thiserror::Error)]
pub enum StreamError {
    /// The backing storage could not be opened, read, written or flushed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Compressing a record failed. Payload content cannot cause this.
    #[error("compression error: {0}")]
    Compression(#[from] CompressionError),

    /// A structurally complete frame held bytes the codec could not decode.
    #[error("record {record_index} at offset {offset} could not be decoded: {source}")]
    Decode {
        record_index: u64,
        offset: u64,
        #[source]
        source: CompressionError,
    },

    /// Invalid configuration (codec/level combination, endpoint, paths).
    #[error("config error: {0}")]
    Config(String),

    /// A downstream message sink rejected a payload.
    #[error("sink error: {0}")]
    Sink(String),
}

impl StreamError {
    /// True for failures of the storage itself, as opposed to bad data.
    pub fn is_io(&self) -> bool {
        matches!(self, StreamError::Io(_))
    }

    /// True when a record was present but its payload was corrupt.
    pub fn is_decode(&self) -> bool {
        matches!(self, StreamError::Decode { .. })
    }
}

impl From<FrameError> for StreamError {
    fn from(e: FrameError) -> Self {
        match e {
            FrameError::Io(e) => StreamError::Io(e),
            FrameError::LengthOverflow(len) => StreamError::Io(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("declared frame length {len} exceeds addressable memory"),
            )),
        }
    }
}
