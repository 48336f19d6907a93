//! Record stream reader.
//!
//! [`RecordReader`] pulls one frame at a time from any `Read` source and
//! decompresses it. It is also an `Iterator`, so a scan is lazy and can be
//! abandoned at any point without touching the storage.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use bytes::Bytes;

use crate::compression::{CompressionCodec, Decompressor};
use crate::config::StreamConfig;
use crate::framing::decode::decode_frame_with_len;
use crate::telemetry::StreamCounters;
use crate::types::StreamError;

/// The lazy sequence returned by [`read_records`].
pub type Records<R> = RecordReader<R>;

/// Start a scan over `source`, which must be positioned at a record boundary.
pub fn read_records<R: Read>(source: R, config: &StreamConfig) -> Result<Records<R>, StreamError> {
    config.validate()?;
    Ok(RecordReader::new(source, config))
}

/// Open the file at `path` and scan it from the beginning.
pub fn read_records_from_path(
    path: impl AsRef<Path>,
    config: &StreamConfig,
) -> Result<Records<BufReader<File>>, StreamError> {
    let file = File::open(path)?;
    read_records(BufReader::new(file), config)
}

/// Reads records from a byte stream.
///
/// Generic over `R: Read` so tests can use `&[u8]` and production code can
/// use `BufReader<File>`.
///
/// A payload that fails to decompress ends the scan: the error is returned
/// once and every later call reports end-of-stream. Nothing in the format
/// tells a corrupt record apart from one that was cut short on an unlucky
/// boundary, so skipping ahead is not attempted.
pub struct RecordReader<R: Read> {
    source: R,
    codec: CompressionCodec,
    decompressor: Box<dyn Decompressor>,
    position: u64,
    /// Records consumed before this scan started, see [`RecordReader::resume`].
    records_before: u64,
    counters: StreamCounters,
    done: bool,
}

impl<R: Read> std::fmt::Debug for RecordReader<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordReader")
            .field("codec", &self.codec)
            .field("position", &self.position)
            .field("records_before", &self.records_before)
            .field("counters", &self.counters)
            .field("done", &self.done)
            .finish_non_exhaustive()
    }
}

impl<R: Read> RecordReader<R> {
    pub fn new(source: R, config: &StreamConfig) -> Self {
        Self::resume(source, config, 0, 0)
    }

    /// Continue a scan whose source has already been moved to `offset`, the
    /// end of record number `records_before`.
    pub fn resume(source: R, config: &StreamConfig, offset: u64, records_before: u64) -> Self {
        Self {
            source,
            codec: config.codec(),
            decompressor: config.decompressor(),
            position: offset,
            records_before,
            counters: StreamCounters::default(),
            done: false,
        }
    }

    /// Read the next record, or `None` once the stream is exhausted.
    pub fn next_record(&mut self) -> Result<Option<Bytes>, StreamError> {
        if self.done {
            return Ok(None);
        }

        let frame = match decode_frame_with_len(&mut self.source) {
            Ok(Some(frame)) => frame,
            Ok(None) => {
                self.done = true;
                return Ok(None);
            }
            Err(e) => {
                self.done = true;
                return Err(e.into());
            }
        };

        let mut out = Vec::new();
        if let Err(source) = self.decompressor.decompress(&frame.payload, &mut out) {
            self.done = true;
            return Err(StreamError::Decode {
                record_index: self.records_read(),
                offset: self.position,
                source,
            });
        }

        self.position += frame.wire_len;
        self.counters.add_record(out.len(), frame.payload.len());
        Ok(Some(Bytes::from(out)))
    }

    /// Number of records decoded, including any counted before a resume.
    pub fn records_read(&self) -> u64 {
        self.records_before + self.counters.records
    }

    /// Byte offset just past the last complete record returned.
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Counters for this scan only; records before a resume are not included.
    pub fn counters(&self) -> &StreamCounters {
        &self.counters
    }

    pub fn codec(&self) -> CompressionCodec {
        self.codec
    }

    pub fn is_finished(&self) -> bool {
        self.done
    }

    pub fn into_inner(self) -> R {
        self.source
    }
}

impl<R: Read> Iterator for RecordReader<R> {
    type Item = Result<Bytes, StreamError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_record().transpose()
    }
}

impl<R: Read> std::iter::FusedIterator for RecordReader<R> {}
