//! compression/codecs/mod.rs
//! One module per codec. Each compresses a whole record at once and keeps
//! no state between calls.

pub mod deflate;
pub mod gzip;
pub mod lz4;
pub mod none;
pub mod zstd;
