//! replay: feed a recorded stream into a [`MessageSink`].
//!
//! [`replay`] drains a stream once. [`follow`] keeps polling a growing file
//! until asked to stop.

use std::io::Read;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::StreamConfig;
use crate::sink::MessageSink;
use crate::stream::{read_records, read_records_from_path, Records, StreamFollower};
use crate::types::StreamError;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReplaySummary {
    pub delivered: u64,
    pub bytes: u64,
    /// Stream offset just past the last delivered record.
    pub end_offset: u64,
}

/// Deliver every record of `source` to `sink`, in order.
///
/// Stops at the first decode failure or sink error; everything delivered
/// before it stays delivered.
pub fn replay<R: Read>(
    source: R,
    config: &StreamConfig,
    sink: &mut dyn MessageSink,
) -> Result<ReplaySummary, StreamError> {
    drain(read_records(source, config)?, sink)
}

pub fn replay_path(
    path: impl AsRef<Path>,
    config: &StreamConfig,
    sink: &mut dyn MessageSink,
) -> Result<ReplaySummary, StreamError> {
    let path = path.as_ref();
    info!("Replaying {} ({})", path.display(), config.codec());
    drain(read_records_from_path(path, config)?, sink)
}

fn drain<R: Read>(mut records: Records<R>, sink: &mut dyn MessageSink) -> Result<ReplaySummary, StreamError> {
    let mut summary = ReplaySummary::default();

    while let Some(payload) = records.next_record()? {
        sink.deliver(&payload)?;
        summary.delivered += 1;
        summary.bytes += payload.len() as u64;
        summary.end_offset = records.position();
    }
    sink.flush()?;

    debug!(
        "Replay delivered {} records ({} bytes), stopped at offset {}",
        summary.delivered, summary.bytes, summary.end_offset
    );
    Ok(summary)
}

/// Poll `follower` every `interval`, delivering new records to `sink`,
/// until `stop` is set. A final poll runs after the stop request so
/// records committed just before it are not lost.
pub fn follow(
    follower: &mut StreamFollower,
    sink: &mut dyn MessageSink,
    interval: Duration,
    stop: &AtomicBool,
) -> Result<ReplaySummary, StreamError> {
    let mut summary = ReplaySummary::default();
    info!("Following {} from offset {}", follower.path().display(), follower.offset());

    loop {
        let stopping = stop.load(Ordering::Relaxed);

        let mut bytes = 0u64;
        let delivered = follower.poll(|payload| {
            sink.deliver(&payload)?;
            bytes += payload.len() as u64;
            Ok(())
        });
        // Count what made it out even when the poll stopped early.
        summary.bytes += bytes;
        summary.end_offset = follower.offset();
        match delivered {
            Ok(n) => {
                summary.delivered += n as u64;
                if n > 0 {
                    sink.flush()?;
                    debug!("Delivered {} new records, offset now {}", n, follower.offset());
                }
            }
            Err(e) => {
                warn!("Follow of {} stopped: {}", follower.path().display(), e);
                return Err(e);
            }
        }

        if stopping {
            break;
        }
        thread::sleep(interval);
    }

    info!(
        "Stopped following {} after {} records",
        follower.path().display(),
        summary.delivered
    );
    Ok(summary)
}
