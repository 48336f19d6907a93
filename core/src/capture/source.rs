//! Message sources feeding a capture session.
//!
//! On the wire a channel-tagged message is two frames back to back: the
//! channel name, then the payload. Both use the record framing but are
//! never compressed.

use std::collections::VecDeque;
use std::io::{self, Read, Write};

use bytes::Bytes;

use crate::framing::{decode_frame, encode_frame};
use crate::types::StreamError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelMessage {
    pub channel: String,
    pub payload: Bytes,
}

impl ChannelMessage {
    pub fn new(channel: impl Into<String>, payload: impl Into<Bytes>) -> Self {
        Self { channel: channel.into(), payload: payload.into() }
    }
}

/// Anything that hands out channel-tagged messages until it runs dry.
pub trait MessageSource {
    /// Next message, or `None` when the source is exhausted.
    fn next_message(&mut self) -> Result<Option<ChannelMessage>, StreamError>;
}

/// Reads channel frame + payload frame pairs from a byte stream, typically
/// a TCP connection to a publisher.
pub struct FramedMessageSource<R: Read> {
    reader: R,
    received: u64,
}

impl<R: Read> FramedMessageSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader, received: 0 }
    }

    pub fn received(&self) -> u64 {
        self.received
    }

    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: Read> MessageSource for FramedMessageSource<R> {
    fn next_message(&mut self) -> Result<Option<ChannelMessage>, StreamError> {
        let Some(channel) = decode_frame(&mut self.reader)? else {
            return Ok(None);
        };
        // A channel frame without its payload frame means the peer went away.
        let Some(payload) = decode_frame(&mut self.reader)? else {
            return Ok(None);
        };

        self.received += 1;
        Ok(Some(ChannelMessage {
            channel: String::from_utf8_lossy(&channel).into_owned(),
            payload,
        }))
    }
}

/// In-memory source, drained front to back.
#[derive(Debug, Default, Clone)]
pub struct MemorySource {
    messages: VecDeque<ChannelMessage>,
}

impl MemorySource {
    pub fn new(messages: impl IntoIterator<Item = ChannelMessage>) -> Self {
        Self { messages: messages.into_iter().collect() }
    }

    pub fn push(&mut self, message: ChannelMessage) {
        self.messages.push_back(message);
    }

    pub fn remaining(&self) -> usize {
        self.messages.len()
    }
}

impl MessageSource for MemorySource {
    fn next_message(&mut self) -> Result<Option<ChannelMessage>, StreamError> {
        Ok(self.messages.pop_front())
    }
}

/// Wire form of one channel-tagged message.
pub fn encode_channel_message(channel: &str, payload: &[u8]) -> Vec<u8> {
    let mut out = encode_frame(channel.as_bytes());
    out.extend_from_slice(&encode_frame(payload));
    out
}

/// Write one channel-tagged message with a single `write_all`.
pub fn write_channel_message<W: Write + ?Sized>(w: &mut W, channel: &str, payload: &[u8]) -> io::Result<()> {
    w.write_all(&encode_channel_message(channel, payload))
}
