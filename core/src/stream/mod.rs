//! stream: framed compressed record streams.
//!
//! Write path: payload -> compress -> frame -> append -> flush.
//! Read path: de-frame -> decompress -> payload, one record per `next()`.
//!
//! The stream has no header, footer or version marker. It ends where the
//! storage ends, and a partially written final record is simply not there yet.

pub mod io;
pub mod writer;
pub mod reader;
pub mod follow;

pub use io::open_append;
pub use writer::RecordWriter;
pub use reader::{read_records, read_records_from_path, RecordReader, Records};
pub use follow::StreamFollower;
