//! Record stream writer.
//!
//! [`RecordWriter`] appends one framed, compressed record per call and
//! flushes immediately, so a concurrent reader that reopens the storage sees
//! every record whose `write_record` has returned.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::compression::{CompressionCodec, Compressor};
use crate::config::StreamConfig;
use crate::framing::write_frame;
use crate::stream::io::open_append;
use crate::telemetry::StreamCounters;
use crate::types::StreamError;

/// Writes records to a byte sink.
///
/// Generic over `W: Write` so tests can use `Vec<u8>` and production code
/// can use a `File`.
///
/// # Examples
///
/// ```
/// use recorder_core::config::StreamConfig;
/// use recorder_core::stream::{read_records, RecordWriter};
///
/// let config = StreamConfig::default();
/// let mut writer = RecordWriter::new(Vec::new(), &config).unwrap();
/// writer.write_record(b"hello").unwrap();
/// writer.write_record(b"").unwrap();
/// let buf = writer.into_inner();
///
/// let payloads: Vec<_> = read_records(buf.as_slice(), &config)
///     .unwrap()
///     .collect::<Result<Vec<_>, _>>()
///     .unwrap();
/// assert_eq!(payloads, vec![&b"hello"[..], &b""[..]]);
/// ```
pub struct RecordWriter<W: Write> {
    sink: W,
    codec: CompressionCodec,
    compressor: Box<dyn Compressor>,
    scratch: Vec<u8>,
    counters: StreamCounters,
    /// Set once a frame may have been partly written. Nothing more is
    /// appended after it, since the next frame would land inside the torn one.
    poisoned: bool,
}

impl<W: Write> RecordWriter<W> {
    pub fn new(sink: W, config: &StreamConfig) -> Result<Self, StreamError> {
        config.validate()?;
        Ok(Self::with_compressor(sink, config.codec(), config.compressor()?))
    }

    /// Use an already constructed compressor. `codec` is only reported back
    /// through telemetry.
    pub fn with_compressor(sink: W, codec: CompressionCodec, compressor: Box<dyn Compressor>) -> Self {
        Self {
            sink,
            codec,
            compressor,
            scratch: Vec::new(),
            counters: StreamCounters::default(),
            poisoned: false,
        }
    }

    /// Compress `payload`, append it as one frame, and flush.
    /// Returns the number of bytes appended to the sink.
    ///
    /// A failed write or flush poisons the writer: every later call returns
    /// `StreamError::Io` until the storage is reopened with a new writer.
    pub fn write_record(&mut self, payload: &[u8]) -> Result<u64, StreamError> {
        if self.poisoned {
            return Err(StreamError::Io(io::Error::new(
                io::ErrorKind::BrokenPipe,
                "writer poisoned by an earlier failed write; reopen the stream",
            )));
        }

        self.scratch.clear();
        self.compressor.compress(payload, &mut self.scratch)?;

        let written = write_frame(&mut self.sink, &self.scratch).and_then(|n| self.sink.flush().map(|_| n));
        let written = match written {
            Ok(n) => n,
            Err(e) => {
                self.poisoned = true;
                return Err(e.into());
            }
        };

        self.counters.add_record(payload.len(), self.scratch.len());
        Ok(written as u64)
    }

    pub fn flush(&mut self) -> Result<(), StreamError> {
        self.sink.flush()?;
        Ok(())
    }

    pub fn is_poisoned(&self) -> bool {
        self.poisoned
    }

    pub fn records_written(&self) -> u64 {
        self.counters.records
    }

    pub fn counters(&self) -> &StreamCounters {
        &self.counters
    }

    pub fn codec(&self) -> CompressionCodec {
        self.codec
    }

    pub fn get_ref(&self) -> &W {
        &self.sink
    }

    pub fn get_mut(&mut self) -> &mut W {
        &mut self.sink
    }

    pub fn into_inner(self) -> W {
        self.sink
    }
}

impl RecordWriter<File> {
    /// Open `path` for appending (created if missing) and wrap it.
    pub fn append_to_path(path: impl AsRef<Path>, config: &StreamConfig) -> Result<Self, StreamError> {
        config.validate()?;
        let file = open_append(path.as_ref())?;
        Self::new(file, config)
    }

    /// Ask the OS to persist everything written so far to the device.
    pub fn sync(&self) -> Result<(), StreamError> {
        self.sink.sync_data()?;
        Ok(())
    }
}
