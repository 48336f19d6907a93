//! codecs/none.rs
//! Pass-through codec. Records are stored verbatim.

use crate::compression::types::{CompressionError, Compressor, Decompressor};

pub struct NoneCompressor;
pub struct NoneDecompressor;

impl Compressor for NoneCompressor {
    fn compress(&mut self, input: &[u8], out: &mut Vec<u8>) -> Result<(), CompressionError> {
        out.extend_from_slice(input);
        Ok(())
    }
}

impl Decompressor for NoneDecompressor {
    fn decompress(&mut self, input: &[u8], out: &mut Vec<u8>) -> Result<(), CompressionError> {
        out.extend_from_slice(input);
        Ok(())
    }
}
