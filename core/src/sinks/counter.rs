use crate::sink::{MessageSink, SinkError};

/// Counts payloads and their bytes without keeping them.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CounterSink {
    pub messages: u64,
    pub bytes: u64,
    pub empty: u64,
}

impl MessageSink for CounterSink {
    fn deliver(&mut self, payload: &[u8]) -> Result<(), SinkError> {
        self.messages += 1;
        self.bytes += payload.len() as u64;
        if payload.is_empty() {
            self.empty += 1;
        }
        Ok(())
    }

    fn status(&self) -> Option<String> {
        Some(format!("{} messages ({} bytes, {} empty)", self.messages, self.bytes, self.empty))
    }
}
