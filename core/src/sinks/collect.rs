use bytes::Bytes;

use crate::sink::{MessageSink, SinkError};

/// Keeps every payload in memory, optionally refusing past a limit.
#[derive(Debug, Default, Clone)]
pub struct CollectSink {
    payloads: Vec<Bytes>,
    limit: Option<usize>,
}

impl CollectSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rejects deliveries once `limit` payloads are held.
    pub fn with_limit(limit: usize) -> Self {
        Self { payloads: Vec::new(), limit: Some(limit) }
    }

    pub fn payloads(&self) -> &[Bytes] {
        &self.payloads
    }

    pub fn len(&self) -> usize {
        self.payloads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.payloads.is_empty()
    }

    pub fn into_payloads(self) -> Vec<Bytes> {
        self.payloads
    }
}

impl MessageSink for CollectSink {
    fn deliver(&mut self, payload: &[u8]) -> Result<(), SinkError> {
        if let Some(limit) = self.limit {
            if self.payloads.len() >= limit {
                return Err(SinkError::Rejected(format!("collector full ({limit} payloads)")));
            }
        }
        self.payloads.push(Bytes::copy_from_slice(payload));
        Ok(())
    }
}
