//! Polling reader for a stream that is still being appended to.
//!
//! Each poll reopens the file, seeks to the end of the last complete record
//! seen so far and decodes whatever has been completed since. A record whose
//! bytes are only partly on disk is left for a later poll.

use std::fs::File;
use std::io::{self, BufReader, Seek, SeekFrom};
use std::path::{Path, PathBuf};

use bytes::Bytes;

use crate::config::StreamConfig;
use crate::stream::reader::RecordReader;
use crate::types::StreamError;

#[derive(Debug, Clone)]
pub struct StreamFollower {
    path: PathBuf,
    config: StreamConfig,
    offset: u64,
    records: u64,
}

impl StreamFollower {
    pub fn new(path: impl Into<PathBuf>, config: &StreamConfig) -> Result<Self, StreamError> {
        config.validate()?;
        Ok(Self {
            path: path.into(),
            config: *config,
            offset: 0,
            records: 0,
        })
    }

    /// Deliver every record completed since the previous poll to `on_record`.
    ///
    /// A missing file counts as an empty stream. The committed offset only
    /// moves past a record once `on_record` accepted it, so a record whose
    /// delivery failed is offered again on the next poll.
    pub fn poll<F>(&mut self, mut on_record: F) -> Result<usize, StreamError>
    where
        F: FnMut(Bytes) -> Result<(), StreamError>,
    {
        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(0),
            Err(e) => return Err(e.into()),
        };

        let len = file.metadata()?.len();
        if len < self.offset {
            return Err(StreamError::Io(io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "{} shrank to {} bytes, below the committed offset {}",
                    self.path.display(),
                    len,
                    self.offset
                ),
            )));
        }

        let mut source = BufReader::new(file);
        source.seek(SeekFrom::Start(self.offset))?;
        let mut reader = RecordReader::resume(source, &self.config, self.offset, self.records);

        let mut delivered = 0;
        while let Some(payload) = reader.next_record()? {
            on_record(payload)?;
            delivered += 1;
            self.offset = reader.position();
            self.records = reader.records_read();
        }

        Ok(delivered)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// End of the last complete record delivered.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    pub fn records_seen(&self) -> u64 {
        self.records
    }
}
