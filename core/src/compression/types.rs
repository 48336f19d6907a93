//! compression/types.rs
//! Codec identifiers, errors and the compressor traits.
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Compression algorithm applied to each record payload.
///
/// The codec is a configuration choice shared out of band by the writer and
/// every reader of a stream. It is not recorded on disk.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompressionCodec {
    /// Payload bytes stored verbatim.
    None,
    /// RFC 1952 gzip member per record.
    #[default]
    Gzip,
    /// RFC 1950 zlib stream per record.
    Deflate,
    /// One zstd frame per record.
    Zstd,
    /// LZ4 block with a little-endian u32 size prefix.
    Lz4,
}

impl CompressionCodec {
    pub const ALL: [CompressionCodec; 5] = [
        CompressionCodec::None,
        CompressionCodec::Gzip,
        CompressionCodec::Deflate,
        CompressionCodec::Zstd,
        CompressionCodec::Lz4,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CompressionCodec::None    => "none",
            CompressionCodec::Gzip    => "gzip",
            CompressionCodec::Deflate => "deflate",
            CompressionCodec::Zstd    => "zstd",
            CompressionCodec::Lz4     => "lz4",
        }
    }
}

impl fmt::Display for CompressionCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CompressionCodec {
    type Err = CompressionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" | "raw"   => Ok(CompressionCodec::None),
            "gzip" | "gz"    => Ok(CompressionCodec::Gzip),
            "deflate" | "zlib" => Ok(CompressionCodec::Deflate),
            "zstd"           => Ok(CompressionCodec::Zstd),
            "lz4"            => Ok(CompressionCodec::Lz4),
            other => Err(CompressionError::UnknownCodec(other.to_string())),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CompressionError {
    #[error("unknown compression codec: {0:?}")]
    UnknownCodec(String),

    #[error("codec {codec} does not accept level {level}")]
    UnsupportedLevel { codec: CompressionCodec, level: i32 },

    #[error("codec {codec} failed: {msg}")]
    CodecProcessFailed { codec: CompressionCodec, msg: String },
}

impl CompressionError {
    pub(crate) fn process(codec: CompressionCodec, msg: impl fmt::Display) -> Self {
        CompressionError::CodecProcessFailed { codec, msg: msg.to_string() }
    }
}

// Require Send so boxed codecs can move into per-connection threads.
pub trait Compressor: Send {
    /// Compress one record payload, appending the encoded bytes to `out`.
    fn compress(&mut self, input: &[u8], out: &mut Vec<u8>) -> Result<(), CompressionError>;
}

pub trait Decompressor: Send {
    /// Decompress one record payload, appending the decoded bytes to `out`.
    fn decompress(&mut self, input: &[u8], out: &mut Vec<u8>) -> Result<(), CompressionError>;
}
