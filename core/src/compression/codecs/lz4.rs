//! codecs/lz4.rs
//! LZ4 block codec. lz4_flex prepends the decoded size, so each record is
//! self-describing without an outer header.
use lz4_flex::block::{compress_prepend_size, decompress_size_prepended};

use crate::compression::constants::{LZ4_MAX_RATIO, MIN_LZ4_LEN};
use crate::compression::types::{CompressionCodec, CompressionError, Compressor, Decompressor};

const CODEC: CompressionCodec = CompressionCodec::Lz4;

/// Block mode has no levels.
pub struct Lz4Compressor;

pub struct Lz4Decompressor;

impl Compressor for Lz4Compressor {
    fn compress(&mut self, input: &[u8], out: &mut Vec<u8>) -> Result<(), CompressionError> {
        out.extend_from_slice(&compress_prepend_size(input));
        Ok(())
    }
}

impl Decompressor for Lz4Decompressor {
    fn decompress(&mut self, input: &[u8], out: &mut Vec<u8>) -> Result<(), CompressionError> {
        if input.len() < MIN_LZ4_LEN {
            return Err(CompressionError::process(CODEC, "missing size prefix"));
        }
        // Reject impossible size prefixes before lz4_flex allocates for them.
        let declared = u32::from_le_bytes([input[0], input[1], input[2], input[3]]) as usize;
        let body = input.len() - MIN_LZ4_LEN;
        if declared > body.saturating_mul(LZ4_MAX_RATIO) {
            return Err(CompressionError::process(
                CODEC,
                format!("declared size {declared} cannot come from {body} compressed bytes"),
            ));
        }
        let decompressed = decompress_size_prepended(input)
            .map_err(|e| CompressionError::process(CODEC, e))?;
        out.extend_from_slice(&decompressed);
        Ok(())
    }
}
