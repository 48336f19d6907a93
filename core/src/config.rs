//! config.rs
//! Stream configuration shared by writers and readers.
//!
//! Both ends of a stream must agree on the codec; nothing on disk says which
//! one was used.

use serde::{Deserialize, Serialize};

use crate::compression::{
    create_compressor, create_decompressor, effective_level, CompressionCodec, Compressor,
    Decompressor,
};
use crate::types::StreamError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompressionConfig {
    pub codec: CompressionCodec,
    /// `None` picks the codec default. Ignored by codecs without levels.
    pub level: Option<i32>,
}

impl CompressionConfig {
    pub fn new(codec: CompressionCodec, level: Option<i32>) -> Self {
        Self { codec, level }
    }

    pub fn none() -> Self {
        Self::new(CompressionCodec::None, None)
    }

    pub fn validate(&self) -> Result<(), StreamError> {
        effective_level(self.codec, self.level)
            .map(|_| ())
            .map_err(|e| StreamError::Config(e.to_string()))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StreamConfig {
    pub compression: CompressionConfig,
}

impl StreamConfig {
    pub fn new(compression: CompressionConfig) -> Self {
        Self { compression }
    }

    pub fn with_codec(codec: CompressionCodec) -> Self {
        Self::new(CompressionConfig::new(codec, None))
    }

    pub fn codec(&self) -> CompressionCodec {
        self.compression.codec
    }

    pub fn validate(&self) -> Result<(), StreamError> {
        self.compression.validate()
    }

    pub fn compressor(&self) -> Result<Box<dyn Compressor>, StreamError> {
        create_compressor(self.compression.codec, self.compression.level)
            .map_err(|e| StreamError::Config(e.to_string()))
    }

    pub fn decompressor(&self) -> Box<dyn Decompressor> {
        create_decompressor(self.compression.codec)
    }
}
