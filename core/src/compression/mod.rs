//! compression/mod.rs
//! Per-record compression and decompression.
//!
//! Notes:
//! - Every record is compressed as its own self-contained unit; no dictionary
//!   or codec state is carried from one record to the next.
//! - The codec is never written to the stream. Reader and writer must be
//!   configured with the same `CompressionCodec` out of band.
//! - The registry resolves a codec to its implementation.

pub mod constants;
pub mod types;
pub mod registry;
pub mod codecs;

pub use constants::*;
pub use types::*;
pub use registry::*;
