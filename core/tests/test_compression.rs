#[cfg(test)]
mod tests {
    use std::io::Read;

    use flate2::read::GzDecoder;
    use recorder_core::compression::{
        create_compressor, create_decompressor, effective_level, CompressionCodec, CompressionError,
        DEFAULT_LEVEL_GZIP,
    };

    fn roundtrip(codec: CompressionCodec, level: Option<i32>, input: &[u8]) -> Vec<u8> {
        let mut c = create_compressor(codec, level).expect("compressor");
        let mut packed = Vec::new();
        c.compress(input, &mut packed).expect("compress");

        let mut d = create_decompressor(codec);
        let mut out = Vec::new();
        d.decompress(&packed, &mut out).expect("decompress");
        out
    }

    #[test]
    fn every_codec_roundtrips_small_empty_and_large() {
        let large: Vec<u8> = (0..200_000u32).map(|i| (i % 251) as u8).collect();
        for codec in CompressionCodec::ALL {
            assert_eq!(roundtrip(codec, None, b"hello"), b"hello", "{codec}");
            assert!(roundtrip(codec, None, b"").is_empty(), "{codec}");
            assert_eq!(roundtrip(codec, None, &large), large, "{codec}");
        }
    }

    #[test]
    fn records_are_independent() {
        // Same compressor reused: each output must decode on its own.
        for codec in CompressionCodec::ALL {
            let mut c = create_compressor(codec, None).unwrap();
            let mut first = Vec::new();
            let mut second = Vec::new();
            c.compress(b"alpha alpha alpha", &mut first).unwrap();
            c.compress(b"beta", &mut second).unwrap();

            let mut out = Vec::new();
            create_decompressor(codec).decompress(&second, &mut out).unwrap();
            assert_eq!(out, b"beta", "{codec}");
        }
    }

    #[test]
    fn gzip_output_is_a_plain_gzip_member() {
        let mut c = create_compressor(CompressionCodec::Gzip, None).unwrap();
        let mut packed = Vec::new();
        c.compress(b"readable by any gzip tool", &mut packed).unwrap();

        assert_eq!(&packed[..2], &[0x1f, 0x8b]);
        let mut out = String::new();
        GzDecoder::new(packed.as_slice()).read_to_string(&mut out).unwrap();
        assert_eq!(out, "readable by any gzip tool");
    }

    #[test]
    fn none_codec_is_identity() {
        let mut c = create_compressor(CompressionCodec::None, None).unwrap();
        let mut packed = Vec::new();
        c.compress(b"verbatim", &mut packed).unwrap();
        assert_eq!(packed, b"verbatim");
    }

    #[test]
    fn corrupt_input_fails_for_compressing_codecs() {
        for codec in [CompressionCodec::Gzip, CompressionCodec::Deflate, CompressionCodec::Zstd, CompressionCodec::Lz4] {
            let mut d = create_decompressor(codec);
            let mut out = Vec::new();
            let err = d.decompress(b"definitely not compressed data!!", &mut out).unwrap_err();
            assert!(matches!(err, CompressionError::CodecProcessFailed { codec: c, .. } if c == codec));

            // Too short to be any valid encoding.
            assert!(d.decompress(b"", &mut Vec::new()).is_err(), "{codec}");
        }
    }

    #[test]
    fn levels_are_validated_per_codec() {
        assert_eq!(effective_level(CompressionCodec::Gzip, None).unwrap(), Some(DEFAULT_LEVEL_GZIP));
        assert_eq!(effective_level(CompressionCodec::Gzip, Some(9)).unwrap(), Some(9));
        assert_eq!(effective_level(CompressionCodec::Zstd, Some(19)).unwrap(), Some(19));
        assert_eq!(effective_level(CompressionCodec::Lz4, Some(99)).unwrap(), None);
        assert_eq!(effective_level(CompressionCodec::None, Some(-4)).unwrap(), None);

        assert!(matches!(
            effective_level(CompressionCodec::Deflate, Some(10)),
            Err(CompressionError::UnsupportedLevel { level: 10, .. })
        ));
        assert!(create_compressor(CompressionCodec::Zstd, Some(0)).is_err());
    }

    #[test]
    fn codec_names_parse_back() {
        for codec in CompressionCodec::ALL {
            assert_eq!(codec.to_string().parse::<CompressionCodec>().unwrap(), codec);
        }
        assert_eq!("GZ".parse::<CompressionCodec>().unwrap(), CompressionCodec::Gzip);
        assert_eq!("zlib".parse::<CompressionCodec>().unwrap(), CompressionCodec::Deflate);
        assert!(matches!("brotli".parse::<CompressionCodec>(), Err(CompressionError::UnknownCodec(_))));
        assert_eq!(CompressionCodec::default(), CompressionCodec::Gzip);
    }

    #[test]
    fn gzip_rejects_trailing_junk() {
        let mut c = create_compressor(CompressionCodec::Gzip, None).unwrap();
        let mut packed = Vec::new();
        c.compress(b"member", &mut packed).unwrap();
        packed.extend_from_slice(b"junk after the member");

        let mut out = Vec::new();
        assert!(create_decompressor(CompressionCodec::Gzip).decompress(&packed, &mut out).is_err());
    }

    #[test]
    fn gzip_accepts_concatenated_members() {
        let mut c = create_compressor(CompressionCodec::Gzip, None).unwrap();
        let mut packed = Vec::new();
        c.compress(b"abc", &mut packed).unwrap();
        c.compress(b"def", &mut packed).unwrap();

        let mut out = Vec::new();
        create_decompressor(CompressionCodec::Gzip).decompress(&packed, &mut out).unwrap();
        assert_eq!(out, b"abcdef");
    }
}
