use std::io::Write;

use crate::capture::write_channel_message;
use crate::sink::{MessageSink, SinkError};

/// Republishes payloads under a fixed channel, using the same
/// channel frame + payload frame layout a capture session consumes.
pub struct FramedPublisher<W: Write> {
    out: W,
    channel: String,
    published: u64,
}

impl<W: Write> FramedPublisher<W> {
    pub fn new(out: W, channel: impl Into<String>) -> Self {
        Self { out, channel: channel.into(), published: 0 }
    }

    pub fn channel(&self) -> &str {
        &self.channel
    }

    pub fn published(&self) -> u64 {
        self.published
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> MessageSink for FramedPublisher<W> {
    fn deliver(&mut self, payload: &[u8]) -> Result<(), SinkError> {
        write_channel_message(&mut self.out, &self.channel, payload)?;
        self.published += 1;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), SinkError> {
        self.out.flush()?;
        Ok(())
    }
}
