use std::io::{self, Write};

use byteorder::{BigEndian, ByteOrder};

use crate::constants::FRAME_PREFIX_LEN;

/// Encode a payload into canonical wire format.
///
/// Layout:
///
/// ```text
/// [ length (8, big-endian) ]
/// [ payload (length) ]
/// ```
pub fn encode_frame(payload: &[u8]) -> Vec<u8> {
    let mut out = vec![0u8; FRAME_PREFIX_LEN];
    out.reserve(payload.len());
    BigEndian::write_u64(&mut out[..FRAME_PREFIX_LEN], payload.len() as u64);
    out.extend_from_slice(payload);
    out
}

/// Append one frame to `w` with a single `write_all`, so the prefix and the
/// payload are handed to the sink together.
pub fn write_frame<W: Write + ?Sized>(w: &mut W, payload: &[u8]) -> io::Result<usize> {
    let wire = encode_frame(payload);
    w.write_all(&wire)?;
    Ok(wire.len())
}
