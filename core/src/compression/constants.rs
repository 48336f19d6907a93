use std::ops::RangeInclusive;

/// Default compression levels.
/// Gzip level 1 matches the recorder's historical `compression_level` default.
pub const DEFAULT_LEVEL_GZIP: i32 = 1;
pub const DEFAULT_LEVEL_DEFLATE: i32 = 6;
pub const DEFAULT_LEVEL_ZSTD: i32 = 3;

/// Accepted level ranges per codec family.
pub const FLATE_LEVELS: RangeInclusive<i32> = 0..=9;
pub const ZSTD_LEVELS: RangeInclusive<i32> = 1..=22;

/// Smallest well-formed encodings. Anything shorter cannot be a valid
/// compressed record and is reported as corrupt instead of silently
/// decoding to an empty payload.
pub const MIN_GZIP_LEN: usize = 18;  // 10 byte header + 8 byte trailer
pub const MIN_ZLIB_LEN: usize = 6;   // 2 byte header + 4 byte adler32
pub const MIN_LZ4_LEN: usize = 4;    // u32 size prefix

/// An LZ4 sequence expands to at most 255 output bytes per input byte.
pub const LZ4_MAX_RATIO: usize = 255;
