//! Deflate (zlib wrapper) via flate2.

use std::io::{Read, Write};

use flate2::{read::ZlibDecoder, write::ZlibEncoder, Compression};

use crate::compression::constants::MIN_ZLIB_LEN;
use crate::compression::types::{CompressionCodec, CompressionError, Compressor, Decompressor};

const CODEC: CompressionCodec = CompressionCodec::Deflate;

pub struct DeflateCompressor {
    level: Compression,
}

impl DeflateCompressor {
    pub fn new(level: i32) -> Self {
        Self { level: Compression::new(level as u32) }
    }
}

impl Compressor for DeflateCompressor {
    fn compress(&mut self, input: &[u8], out: &mut Vec<u8>) -> Result<(), CompressionError> {
        // Encode this record as its own zlib stream
        let mut enc = ZlibEncoder::new(out, self.level);
        enc.write_all(input)
            .map_err(|e| CompressionError::process(CODEC, e))?;
        enc.finish()
            .map_err(|e| CompressionError::process(CODEC, e))?;
        Ok(())
    }
}

pub struct DeflateDecompressor;

impl Decompressor for DeflateDecompressor {
    fn decompress(&mut self, input: &[u8], out: &mut Vec<u8>) -> Result<(), CompressionError> {
        if input.len() < MIN_ZLIB_LEN {
            return Err(CompressionError::process(
                CODEC,
                format!("input of {} bytes is shorter than a zlib stream", input.len()),
            ));
        }
        let mut dec = ZlibDecoder::new(input);
        dec.read_to_end(out)
            .map_err(|e| CompressionError::process(CODEC, e))?;
        Ok(())
    }
}
