//! src/compression/codecs/zstd.rs
//!
//! Zstd compressor/decompressor.
//!
//! Design notes:
//! - Uses the bulk API for compression: one standalone frame per record.
//! - Decoding goes through `decode_all`, which reads the content size from the
//!   frame itself, so no length needs to be stored alongside the record.

use crate::compression::types::{CompressionCodec, CompressionError, Compressor, Decompressor};

const CODEC: CompressionCodec = CompressionCodec::Zstd;

pub struct ZstdCompressor {
    level: i32,
}

impl ZstdCompressor {
    pub fn new(level: i32) -> Self {
        Self { level }
    }
}

impl Compressor for ZstdCompressor {
    fn compress(&mut self, input: &[u8], out: &mut Vec<u8>) -> Result<(), CompressionError> {
        let compressed = ::zstd::bulk::compress(input, self.level)
            .map_err(|e| CompressionError::process(CODEC, e))?;
        out.extend_from_slice(&compressed);
        Ok(())
    }
}

pub struct ZstdDecompressor;

impl Decompressor for ZstdDecompressor {
    fn decompress(&mut self, input: &[u8], out: &mut Vec<u8>) -> Result<(), CompressionError> {
        if input.is_empty() {
            return Err(CompressionError::process(CODEC, "empty input is not a zstd frame"));
        }
        let decompressed = ::zstd::stream::decode_all(input)
            .map_err(|e| CompressionError::process(CODEC, e))?;
        out.extend_from_slice(&decompressed);
        Ok(())
    }
}
