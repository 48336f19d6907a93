//! A record writer is itself a sink, so a replay can re-encode a stream
//! under a different codec.

use std::io::Write;

use crate::sink::{MessageSink, SinkError};
use crate::stream::RecordWriter;
use crate::types::StreamError;

impl<W: Write> MessageSink for RecordWriter<W> {
    fn deliver(&mut self, payload: &[u8]) -> Result<(), SinkError> {
        self.write_record(payload).map(|_| ()).map_err(into_sink_error)
    }

    fn flush(&mut self) -> Result<(), SinkError> {
        RecordWriter::flush(self).map_err(into_sink_error)
    }
}

fn into_sink_error(e: StreamError) -> SinkError {
    match e {
        StreamError::Io(e) => SinkError::Io(e),
        other => SinkError::Rejected(other.to_string()),
    }
}
