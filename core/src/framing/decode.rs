use std::io::{self, Read};

use byteorder::{BigEndian, ByteOrder};
use bytes::Bytes;

use crate::constants::{FRAME_PREFIX_LEN, MAX_PREALLOC};
use crate::framing::types::{Frame, FrameError, FrameSplit};

/// Fill `buf` from `r` until it is full or the source reports EOF.
/// Returns the number of bytes read. `Interrupted` reads are retried.
pub fn read_exact_or_eof<R: Read + ?Sized>(r: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut off = 0;

    while off < buf.len() {
        match r.read(&mut buf[off..]) {
            Ok(0) => break,
            Ok(n) => off += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }

    Ok(off)
}

/// Pull the next frame off `r`.
///
/// Returns `Ok(None)` when fewer than 8 prefix bytes or fewer than the
/// declared payload bytes remain. Bytes read before the shortfall was
/// noticed stay consumed.
pub fn decode_frame<R: Read + ?Sized>(r: &mut R) -> Result<Option<Bytes>, FrameError> {
    Ok(decode_frame_with_len(r)?.map(|f| f.payload))
}

/// Same as [`decode_frame`] but also reports the frame's size on the wire.
pub fn decode_frame_with_len<R: Read + ?Sized>(r: &mut R) -> Result<Option<Frame>, FrameError> {
    let mut prefix = [0u8; FRAME_PREFIX_LEN];
    if read_exact_or_eof(r, &mut prefix)? < FRAME_PREFIX_LEN {
        return Ok(None);
    }

    let declared = BigEndian::read_u64(&prefix);
    let len = usize::try_from(declared).map_err(|_| FrameError::LengthOverflow(declared))?;

    // Grow toward `len` as bytes arrive instead of trusting the prefix up front.
    let mut payload = Vec::with_capacity(len.min(MAX_PREALLOC));
    let got = Read::take(&mut *r, declared).read_to_end(&mut payload);
    match got {
        Ok(n) if n == len => {}
        Ok(_) => return Ok(None),
        Err(e) => return Err(FrameError::Io(e)),
    }

    Ok(Some(Frame {
        payload: Bytes::from(payload),
        wire_len: FRAME_PREFIX_LEN as u64 + declared,
    }))
}

/// Zero-copy frame parse over a buffer that is already in memory.
pub fn split_frame(buf: &[u8]) -> FrameSplit<'_> {
    if buf.len() < FRAME_PREFIX_LEN {
        return FrameSplit::Incomplete;
    }

    let declared = BigEndian::read_u64(&buf[..FRAME_PREFIX_LEN]);
    let available = (buf.len() - FRAME_PREFIX_LEN) as u64;
    if declared > available {
        return FrameSplit::Incomplete;
    }

    let end = FRAME_PREFIX_LEN + declared as usize;
    FrameSplit::Complete {
        payload: &buf[FRAME_PREFIX_LEN..end],
        consumed: end,
    }
}
