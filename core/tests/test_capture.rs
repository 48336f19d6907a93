// Capture role: endpoint naming, channel filtering and per-channel streams.

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use recorder_core::capture::{
        encode_channel_message, CaptureSession, ChannelEndpoint, ChannelMessage, FramedMessageSource,
        MemorySource, MessageSource,
    };
    use recorder_core::compression::CompressionCodec;
    use recorder_core::config::StreamConfig;
    use recorder_core::sink::{MessageSink, SinkError};
    use recorder_core::stream::read_records_from_path;
    use recorder_core::types::StreamError;
    use tempfile::tempdir;

// # ✅ 1. Storage naming

    #[test]
    fn storage_name_with_channel() {
        let ep = ChannelEndpoint::new("127.0.0.1", 5555, Some("test_topic"), "txt");
        assert_eq!(ep.host(), "tcp://127.0.0.1:5555");
        assert_eq!(ep.storage_name(), "tcp___127.0.0.1_5555_test_topic.txt");
    }

    #[test]
    fn storage_name_without_channel() {
        let ep = ChannelEndpoint::new("127.0.0.1", 5555, None, "log");
        assert_eq!(ep.storage_name(), "tcp___127.0.0.1_5555_NO_TOPIC.log");

        // Empty channel name means "no channel".
        let ep = ChannelEndpoint::new("127.0.0.1", 5555, Some(""), "log");
        assert_eq!(ep.storage_name(), "tcp___127.0.0.1_5555_NO_TOPIC.log");
    }

    #[test]
    fn storage_name_replaces_path_separators() {
        let ep = ChannelEndpoint::new("localhost", 7000, Some("md/eu\\fx:spot"), "rec");
        assert_eq!(ep.storage_name(), "tcp___localhost_7000_md_eu_fx_spot.rec");
    }

// # ✅ 2. Wire source

    #[test]
    fn framed_source_reads_channel_and_payload() {
        let mut wire = encode_channel_message("quotes", b"EURUSD 1.08");
        wire.extend(encode_channel_message("", b""));
        // Channel frame without its payload: peer went away.
        wire.extend(&encode_channel_message("trades", b"x")[..14]);

        let mut src = FramedMessageSource::new(Cursor::new(wire));
        assert_eq!(src.next_message().unwrap(), Some(ChannelMessage::new("quotes", &b"EURUSD 1.08"[..])));
        assert_eq!(src.next_message().unwrap(), Some(ChannelMessage::new("", &b""[..])));
        assert_eq!(src.next_message().unwrap(), None);
        assert_eq!(src.received(), 2);
    }

// # ✅ 3. Sessions

    #[test]
    fn records_each_channel_into_its_own_stream() {
        let dir = tempdir().unwrap();
        let config = StreamConfig::default();
        let ep = ChannelEndpoint::new("127.0.0.1", 5555, None, "rec");
        let mut session = CaptureSession::new(ep, Vec::new(), Some(dir.path().to_path_buf()), config).unwrap();

        let mut source = MemorySource::new([
            ChannelMessage::new("a", &b"a1"[..]),
            ChannelMessage::new("b", &b"b1"[..]),
            ChannelMessage::new("a", &b"a2"[..]),
            ChannelMessage::new("", &b"untagged"[..]),
        ]);
        let summary = session.run(&mut source).unwrap();
        assert_eq!(summary.recorded, 4);
        assert_eq!(summary.skipped, 0);
        assert_eq!(summary.streams.len(), 3);
        assert_eq!(summary.streams["tcp___127.0.0.1_5555_a.rec"].records, 2);

        let a: Vec<_> = read_records_from_path(dir.path().join("tcp___127.0.0.1_5555_a.rec"), &config)
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(a, vec![&b"a1"[..], &b"a2"[..]]);

        let untagged: Vec<_> = read_records_from_path(dir.path().join("tcp___127.0.0.1_5555_NO_TOPIC.rec"), &config)
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(untagged, vec![&b"untagged"[..]]);
        assert_eq!(session.open_streams().len(), 3);
    }

    #[test]
    fn unsubscribed_channels_are_skipped() {
        let dir = tempdir().unwrap();
        let config = StreamConfig::with_codec(CompressionCodec::Zstd);
        let ep = ChannelEndpoint::new("10.1.1.1", 9000, None, "rec");
        let mut session =
            CaptureSession::new(ep, vec!["keep".to_string()], Some(dir.path().to_path_buf()), config).unwrap();

        assert!(session.is_subscribed("keep"));
        assert!(!session.is_subscribed("drop"));

        assert!(session.record(&ChannelMessage::new("keep", &b"1"[..])).unwrap());
        assert!(!session.record(&ChannelMessage::new("drop", &b"2"[..])).unwrap());

        let summary = session.summary();
        assert_eq!((summary.recorded, summary.skipped), (1, 1));
        assert!(!dir.path().join("tcp___10.1.1.1_9000_drop.rec").exists());
        assert!(dir.path().join("tcp___10.1.1.1_9000_keep.rec").exists());
    }

    #[test]
    fn capture_appends_to_existing_stream() {
        let dir = tempdir().unwrap();
        let config = StreamConfig::default();
        let ep = ChannelEndpoint::new("127.0.0.1", 5555, None, "rec");

        for payload in [&b"run one"[..], &b"run two"[..]] {
            let mut session =
                CaptureSession::new(ep.clone(), Vec::new(), Some(dir.path().to_path_buf()), config).unwrap();
            session.record(&ChannelMessage::new("t", payload)).unwrap();
        }

        let got: Vec<_> = read_records_from_path(session_path(&ep, dir.path(), "t"), &config)
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(got, vec![&b"run one"[..], &b"run two"[..]]);
    }

    fn session_path(ep: &ChannelEndpoint, dir: &std::path::Path, channel: &str) -> std::path::PathBuf {
        dir.join(ep.for_channel(channel).storage_name())
    }

    #[test]
    fn missing_out_dir_is_config_error() {
        let dir = tempdir().unwrap();
        let ep = ChannelEndpoint::new("127.0.0.1", 5555, None, "rec");
        let res = CaptureSession::new(ep, Vec::new(), Some(dir.path().join("nope")), StreamConfig::default());
        assert!(matches!(res, Err(StreamError::Config(_))));
    }

// # ✅ 4. Extra sinks

    #[derive(Clone, Default)]
    struct Tap(Arc<Mutex<Vec<Vec<u8>>>>);

    impl MessageSink for Tap {
        fn deliver(&mut self, payload: &[u8]) -> Result<(), SinkError> {
            self.0.lock().unwrap().push(payload.to_vec());
            Ok(())
        }
    }

    struct Refuse;

    impl MessageSink for Refuse {
        fn deliver(&mut self, _: &[u8]) -> Result<(), SinkError> {
            Err(SinkError::Rejected("closed".into()))
        }
    }

    #[test]
    fn kept_messages_fan_out_to_extra_sinks() {
        let dir = tempdir().unwrap();
        let config = StreamConfig::default();
        let ep = ChannelEndpoint::new("127.0.0.1", 5555, None, "rec");
        let mut session =
            CaptureSession::new(ep, vec!["keep".to_string()], Some(dir.path().to_path_buf()), config).unwrap();

        let tap = Tap::default();
        session.add_sink(Box::new(tap.clone()));
        session.add_sink(Box::new(Refuse));
        session.set_report_interval(Duration::ZERO);

        let mut source = MemorySource::new([
            ChannelMessage::new("keep", &b"first"[..]),
            ChannelMessage::new("drop", &b"ignored"[..]),
            ChannelMessage::new("keep", &b"second"[..]),
        ]);
        let summary = session.run(&mut source).unwrap();

        assert_eq!(*tap.0.lock().unwrap(), vec![b"first".to_vec(), b"second".to_vec()]);
        // The refusing sink neither stops the capture nor loses records.
        assert_eq!(summary.recorded, 2);
        assert_eq!(summary.sink_errors, 2);
        assert_eq!(summary.streams["tcp___127.0.0.1_5555_keep.rec"].records, 2);
    }
}
