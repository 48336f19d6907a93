//! codecs/gzip.rs
//! Gzip via flate2. Each record is a complete gzip member, so a stored
//! payload can be handed straight to any gzip decoder.

use std::io::{Read, Write};

use flate2::{read::MultiGzDecoder, write::GzEncoder, Compression};

use crate::compression::constants::MIN_GZIP_LEN;
use crate::compression::types::{CompressionCodec, CompressionError, Compressor, Decompressor};

const CODEC: CompressionCodec = CompressionCodec::Gzip;

pub struct GzipCompressor {
    level: Compression,
}

impl GzipCompressor {
    /// `level` has already been range-checked by the registry.
    pub fn new(level: i32) -> Self {
        Self { level: Compression::new(level as u32) }
    }
}

impl Compressor for GzipCompressor {
    fn compress(&mut self, input: &[u8], out: &mut Vec<u8>) -> Result<(), CompressionError> {
        let mut enc = GzEncoder::new(out, self.level);
        enc.write_all(input)
            .map_err(|e| CompressionError::process(CODEC, e))?;
        enc.finish()
            .map_err(|e| CompressionError::process(CODEC, e))?;
        Ok(())
    }
}

pub struct GzipDecompressor;

impl Decompressor for GzipDecompressor {
    fn decompress(&mut self, input: &[u8], out: &mut Vec<u8>) -> Result<(), CompressionError> {
        if input.len() < MIN_GZIP_LEN {
            return Err(CompressionError::process(
                CODEC,
                format!("input of {} bytes is shorter than a gzip member", input.len()),
            ));
        }
        // Every byte of the frame must belong to a gzip member; trailing junk
        // fails the header check of the next member.
        let mut dec = MultiGzDecoder::new(input);
        dec.read_to_end(out)
            .map_err(|e| CompressionError::process(CODEC, e))?;
        Ok(())
    }
}
