//! File handling shared by writers and capture sessions.

use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;

/// Open `path` for appending, creating it when absent. Existing records are
/// never truncated.
pub fn open_append(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}
