//! Capture session: one record stream per (endpoint, channel).
//!
//! Besides its record stream, every kept message is also handed to the
//! session's extra sinks (console, counters, ...). A failing extra sink is
//! logged and counted; it never stops the recording.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::capture::endpoint::ChannelEndpoint;
use crate::capture::source::{ChannelMessage, MessageSource};
use crate::config::StreamConfig;
use crate::sink::MessageSink;
use crate::stream::RecordWriter;
use crate::telemetry::StreamCounters;
use crate::types::StreamError;

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct CaptureSummary {
    pub recorded: u64,
    pub skipped: u64,
    /// Deliveries refused by extra sinks.
    pub sink_errors: u64,
    /// Keyed by storage file name.
    pub streams: BTreeMap<String, StreamCounters>,
}

pub struct CaptureSession {
    endpoint: ChannelEndpoint,
    channels: BTreeSet<String>,
    out_dir: Option<PathBuf>,
    config: StreamConfig,
    writers: HashMap<String, RecordWriter<File>>,
    sinks: Vec<Box<dyn MessageSink + Send>>,
    report_interval: Option<Duration>,
    last_report: Instant,
    recorded: u64,
    skipped: u64,
    sink_errors: u64,
}

impl CaptureSession {
    /// `channels` lists the channels to keep; an empty list keeps every channel.
    /// Streams are created lazily in `out_dir` (or the working directory).
    pub fn new(
        endpoint: ChannelEndpoint,
        channels: impl IntoIterator<Item = String>,
        out_dir: Option<PathBuf>,
        config: StreamConfig,
    ) -> Result<Self, StreamError> {
        config.validate()?;
        if let Some(dir) = &out_dir {
            if !dir.is_dir() {
                return Err(StreamError::Config(format!(
                    "output directory {} does not exist",
                    dir.display()
                )));
            }
        }

        Ok(Self {
            endpoint,
            channels: channels.into_iter().collect(),
            out_dir,
            config,
            writers: HashMap::new(),
            sinks: Vec::new(),
            report_interval: None,
            last_report: Instant::now(),
            recorded: 0,
            skipped: 0,
            sink_errors: 0,
        })
    }

    /// Also deliver every kept payload to `sink`.
    pub fn add_sink(&mut self, sink: Box<dyn MessageSink + Send>) {
        self.sinks.push(sink);
    }

    /// Log per-stream progress at most once per `interval`, checked as
    /// messages arrive.
    pub fn set_report_interval(&mut self, interval: Duration) {
        self.report_interval = Some(interval);
    }

    pub fn endpoint(&self) -> &ChannelEndpoint {
        &self.endpoint
    }

    pub fn is_subscribed(&self, channel: &str) -> bool {
        self.channels.is_empty() || self.channels.contains(channel)
    }

    /// Where the stream for `channel` lives.
    pub fn storage_path(&self, channel: &str) -> PathBuf {
        let name = self.endpoint.for_channel(channel).storage_name();
        match &self.out_dir {
            Some(dir) => dir.join(name),
            None => PathBuf::from(name),
        }
    }

    /// Append `message` to its channel's stream and fan it out to the extra
    /// sinks. Returns `false` when the channel is not subscribed.
    pub fn record(&mut self, message: &ChannelMessage) -> Result<bool, StreamError> {
        if !self.is_subscribed(&message.channel) {
            debug!(
                "Received unexpected channel {:?} on {}, skipping",
                message.channel, self.endpoint
            );
            self.skipped += 1;
            return Ok(false);
        }

        let writer = match self.writers.get_mut(&message.channel) {
            Some(w) => w,
            None => {
                let path = self.storage_path(&message.channel);
                info!("Recording {} to {}", self.endpoint.for_channel(&message.channel), path.display());
                let w = RecordWriter::append_to_path(&path, &self.config)?;
                self.writers.entry(message.channel.clone()).or_insert(w)
            }
        };

        let appended = writer.write_record(&message.payload)?;
        debug!(
            "Recorded {} bytes on channel {:?} ({} bytes on disk)",
            message.payload.len(),
            message.channel,
            appended
        );
        self.recorded += 1;

        for sink in &mut self.sinks {
            if let Err(e) = sink.deliver(&message.payload) {
                warn!("Sink on {} rejected a payload: {}", self.endpoint, e);
                self.sink_errors += 1;
            }
        }

        if let Some(interval) = self.report_interval {
            if self.last_report.elapsed() >= interval {
                self.report();
            }
        }
        Ok(true)
    }

    /// Log the counters of every open stream and the status of the extra sinks.
    pub fn report(&mut self) {
        self.last_report = Instant::now();
        for (name, counters) in &self.summary().streams {
            info!(
                "{}: {} records, {} payload bytes, {} bytes on disk",
                name,
                counters.records,
                counters.bytes_payload,
                counters.wire_bytes()
            );
        }
        for status in self.sinks.iter().filter_map(|s| s.status()) {
            info!("{}: {}", self.endpoint, status);
        }
    }

    /// Pump `source` until it runs dry.
    pub fn run<S: MessageSource + ?Sized>(&mut self, source: &mut S) -> Result<CaptureSummary, StreamError> {
        while let Some(message) = source.next_message()? {
            self.record(&message)?;
        }
        info!("Source for {} exhausted after {} messages", self.endpoint, self.recorded + self.skipped);

        for sink in &mut self.sinks {
            if let Err(e) = sink.flush() {
                warn!("Sink on {} failed to flush: {}", self.endpoint, e);
                self.sink_errors += 1;
            }
        }
        self.report();
        Ok(self.summary())
    }

    pub fn summary(&self) -> CaptureSummary {
        let streams = self
            .writers
            .iter()
            .map(|(channel, w)| (self.endpoint.for_channel(channel).storage_name(), w.counters().clone()))
            .collect();

        CaptureSummary {
            recorded: self.recorded,
            skipped: self.skipped,
            sink_errors: self.sink_errors,
            streams,
        }
    }

    /// Paths of every stream opened so far.
    pub fn open_streams(&self) -> Vec<PathBuf> {
        let mut paths: Vec<_> = self.writers.keys().map(|c| self.storage_path(c)).collect();
        paths.sort();
        paths
    }

    pub fn out_dir(&self) -> Option<&Path> {
        self.out_dir.as_deref()
    }
}
