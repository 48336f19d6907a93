// Frame codec tests covering:
// * `encode_frame` / `write_frame`
// * `decode_frame` / `decode_frame_with_len`
// * `split_frame`
// * end-of-stream on short prefix or short payload

#[cfg(test)]
mod tests {
    use std::io::{self, Cursor, Read};

    use recorder_core::framing::{
        decode_frame, decode_frame_with_len, encode_frame, read_exact_or_eof, split_frame, write_frame,
        FrameError, FrameSplit,
    };

// # ✅ 1. Wire layout

    #[test]
    fn encode_prefixes_big_endian_length() {
        let wire = encode_frame(b"abc");
        assert_eq!(wire, [0, 0, 0, 0, 0, 0, 0, 3, b'a', b'b', b'c']);
    }

    #[test]
    fn empty_payload_is_prefix_only() {
        assert_eq!(encode_frame(b""), [0u8; 8]);

        let mut src = Cursor::new(encode_frame(b""));
        let payload = decode_frame(&mut src).unwrap().unwrap();
        assert!(payload.is_empty());
        assert_eq!(decode_frame(&mut src).unwrap(), None);
    }

    #[test]
    fn write_frame_reports_wire_length() {
        let mut out = Vec::new();
        let n = write_frame(&mut out, b"hello").unwrap();
        assert_eq!(n, 13);
        assert_eq!(out, encode_frame(b"hello"));
    }

// # ✅ 2. Sequential decode

    #[test]
    fn decodes_frames_in_order() {
        let mut wire = encode_frame(b"one");
        wire.extend(encode_frame(b""));
        wire.extend(encode_frame(&[7u8; 70_000]));

        let mut src = wire.as_slice();
        let a = decode_frame_with_len(&mut src).unwrap().unwrap();
        assert_eq!(&a.payload[..], b"one");
        assert_eq!(a.wire_len, 11);

        let b = decode_frame_with_len(&mut src).unwrap().unwrap();
        assert!(b.payload.is_empty());
        assert_eq!(b.wire_len, 8);

        let c = decode_frame_with_len(&mut src).unwrap().unwrap();
        assert_eq!(c.payload.len(), 70_000);
        assert_eq!(c.wire_len, 70_008);

        assert!(decode_frame_with_len(&mut src).unwrap().is_none());
    }

// # ❌ 3. Truncation is end-of-stream, never an error

    #[test]
    fn short_prefix_is_end_of_stream() {
        let wire = encode_frame(b"payload");
        for cut in 0..8 {
            let mut src = &wire[..cut];
            assert!(decode_frame(&mut src).unwrap().is_none(), "cut at {cut}");
        }
    }

    #[test]
    fn short_payload_is_end_of_stream() {
        let wire = encode_frame(b"payload");
        for cut in 8..wire.len() {
            let mut src = &wire[..cut];
            assert!(decode_frame(&mut src).unwrap().is_none(), "cut at {cut}");
        }
    }

    #[test]
    fn huge_declared_length_does_not_preallocate() {
        // Claims ~1 EiB but carries four bytes.
        let mut wire = (1u64 << 60).to_be_bytes().to_vec();
        wire.extend_from_slice(b"tiny");
        let mut src = wire.as_slice();
        assert!(decode_frame(&mut src).unwrap().is_none());
    }

// # ❌ 4. Source failures surface as I/O errors

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"))
        }
    }

    #[test]
    fn reader_failure_is_io_error() {
        let err = decode_frame(&mut FailingReader).unwrap_err();
        assert!(matches!(err, FrameError::Io(e) if e.kind() == io::ErrorKind::PermissionDenied));
    }

    /// Yields one byte per call and interrupts every other call.
    struct Trickle {
        data: Vec<u8>,
        pos: usize,
        interrupt: bool,
    }

    impl Read for Trickle {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            self.interrupt = !self.interrupt;
            if self.interrupt {
                return Err(io::Error::new(io::ErrorKind::Interrupted, "again"));
            }
            if self.pos >= self.data.len() || buf.is_empty() {
                return Ok(0);
            }
            buf[0] = self.data[self.pos];
            self.pos += 1;
            Ok(1)
        }
    }

    #[test]
    fn interrupted_and_partial_reads_are_retried() {
        let mut src = Trickle { data: encode_frame(b"slow"), pos: 0, interrupt: false };
        let payload = decode_frame(&mut src).unwrap().unwrap();
        assert_eq!(&payload[..], b"slow");

        let mut buf = [0u8; 4];
        let mut empty = Trickle { data: vec![1, 2], pos: 0, interrupt: false };
        assert_eq!(read_exact_or_eof(&mut empty, &mut buf).unwrap(), 2);
    }

// # ✅ 5. In-memory split

    #[test]
    fn split_frame_over_buffer() {
        let mut wire = encode_frame(b"first");
        wire.extend(encode_frame(b"second"));

        let FrameSplit::Complete { payload, consumed } = split_frame(&wire) else {
            panic!("expected a complete frame");
        };
        assert_eq!(payload, b"first");
        assert_eq!(consumed, 13);

        match split_frame(&wire[consumed..]) {
            FrameSplit::Complete { payload, .. } => assert_eq!(payload, b"second"),
            FrameSplit::Incomplete => panic!("expected second frame"),
        }

        assert_eq!(split_frame(&wire[..12]), FrameSplit::Incomplete);
        assert_eq!(split_frame(&wire[..3]), FrameSplit::Incomplete);
    }
}
