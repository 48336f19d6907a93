//! compression/registry.rs
//! Codec registry and factory functions.

use std::ops::RangeInclusive;

use crate::compression::codecs::{deflate, gzip, lz4, none, zstd};
use crate::compression::constants::*;
use crate::compression::types::{CompressionCodec, CompressionError, Compressor, Decompressor};

pub struct CodecInfo {
    pub default_level: Option<i32>,
    pub levels: Option<RangeInclusive<i32>>,
}

pub fn resolve(codec: CompressionCodec) -> CodecInfo {
    match codec {
        CompressionCodec::None =>
            CodecInfo { default_level: None, levels: None },
        CompressionCodec::Gzip =>
            CodecInfo { default_level: Some(DEFAULT_LEVEL_GZIP), levels: Some(FLATE_LEVELS) },
        CompressionCodec::Deflate =>
            CodecInfo { default_level: Some(DEFAULT_LEVEL_DEFLATE), levels: Some(FLATE_LEVELS) },
        CompressionCodec::Zstd =>
            CodecInfo { default_level: Some(DEFAULT_LEVEL_ZSTD), levels: Some(ZSTD_LEVELS) },
        CompressionCodec::Lz4 =>
            CodecInfo { default_level: None, levels: None },
    }
}

/// Resolve the effective level for `codec`, rejecting levels outside its range.
/// Codecs without levels ignore whatever was requested.
pub fn effective_level(codec: CompressionCodec, level: Option<i32>) -> Result<Option<i32>, CompressionError> {
    let info = resolve(codec);
    match (info.levels, level) {
        (None, _) => Ok(None),
        (Some(_), None) => Ok(info.default_level),
        (Some(range), Some(l)) if range.contains(&l) => Ok(Some(l)),
        (Some(_), Some(l)) => Err(CompressionError::UnsupportedLevel { codec, level: l }),
    }
}

pub fn create_compressor(codec: CompressionCodec, level: Option<i32>)
    -> Result<Box<dyn Compressor>, CompressionError>
{
    let level = effective_level(codec, level)?;
    match codec {
        CompressionCodec::None => Ok(Box::new(none::NoneCompressor)),
        CompressionCodec::Gzip => Ok(Box::new(gzip::GzipCompressor::new(level.unwrap_or(DEFAULT_LEVEL_GZIP)))),
        CompressionCodec::Deflate => Ok(Box::new(deflate::DeflateCompressor::new(level.unwrap_or(DEFAULT_LEVEL_DEFLATE)))),
        CompressionCodec::Zstd => Ok(Box::new(zstd::ZstdCompressor::new(level.unwrap_or(DEFAULT_LEVEL_ZSTD)))),
        CompressionCodec::Lz4 => Ok(Box::new(lz4::Lz4Compressor)),
    }
}

pub fn create_decompressor(codec: CompressionCodec) -> Box<dyn Decompressor> {
    match codec {
        CompressionCodec::None => Box::new(none::NoneDecompressor),
        CompressionCodec::Gzip => Box::new(gzip::GzipDecompressor),
        CompressionCodec::Deflate => Box::new(deflate::DeflateDecompressor),
        CompressionCodec::Zstd => Box::new(zstd::ZstdDecompressor),
        CompressionCodec::Lz4 => Box::new(lz4::Lz4Decompressor),
    }
}
