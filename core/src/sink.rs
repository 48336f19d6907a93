//! Downstream consumers of replayed payloads.

use std::io;

use crate::types::StreamError;

#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("payload rejected: {0}")]
    Rejected(String),
}

impl From<SinkError> for StreamError {
    fn from(e: SinkError) -> Self {
        StreamError::Sink(e.to_string())
    }
}

/// Receives decoded payloads in stream order.
///
/// A sink that fails leaves delivery to the caller: replay stops at the
/// failing record and a follower will hand the same record out again on
/// its next poll.
pub trait MessageSink {
    fn deliver(&mut self, payload: &[u8]) -> Result<(), SinkError>;

    fn flush(&mut self) -> Result<(), SinkError> {
        Ok(())
    }

    /// One-line progress summary for periodic reports, if the sink keeps any.
    fn status(&self) -> Option<String> {
        None
    }
}

impl<S: MessageSink + ?Sized> MessageSink for &mut S {
    fn deliver(&mut self, payload: &[u8]) -> Result<(), SinkError> {
        (**self).deliver(payload)
    }

    fn flush(&mut self) -> Result<(), SinkError> {
        (**self).flush()
    }

    fn status(&self) -> Option<String> {
        (**self).status()
    }
}

impl<S: MessageSink + ?Sized> MessageSink for Box<S> {
    fn deliver(&mut self, payload: &[u8]) -> Result<(), SinkError> {
        (**self).deliver(payload)
    }

    fn flush(&mut self) -> Result<(), SinkError> {
        (**self).flush()
    }

    fn status(&self) -> Option<String> {
        (**self).status()
    }
}
