use std::net::TcpStream;
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::time::Duration;

use anyhow::Context;
use clap::{Args, ValueEnum};
use tracing::info;

use recorder_core::compression::CompressionCodec;
use recorder_core::config::{CompressionConfig, StreamConfig};
use recorder_core::constants::DEFAULT_POLL_MS;
use recorder_core::replay::{follow, replay_path, ReplaySummary};
use recorder_core::sink::MessageSink;
use recorder_core::sinks::{ConsoleFormat, ConsoleSink, CounterSink, FramedPublisher};
use recorder_core::stream::{RecordWriter, StreamFollower};

use super::error::CliError;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum SinkKind {
    /// Print each payload as text
    Console,
    /// Print each payload as hex
    Hex,
    /// Count payloads, print the totals at the end
    Count,
    /// Republish over TCP as channel-tagged frames
    Publish,
    /// Append to another stream, optionally with a different codec
    Record,
}

#[derive(Args, Clone, Debug)]
pub struct ReplayArgs {
    /// Stream to replay
    pub file: PathBuf,

    /// Codec the stream was written with
    #[arg(long, default_value = "gzip")]
    pub codec: String,

    #[arg(long, value_enum, default_value = "console")]
    pub sink: SinkKind,

    /// `addr:port` to publish to (publish sink)
    #[arg(long, required_if_eq("sink", "publish"))]
    pub publish: Option<String>,

    /// Channel name attached to republished payloads
    #[arg(long, default_value = "")]
    pub channel: String,

    /// Target stream (record sink)
    #[arg(long, required_if_eq("sink", "record"))]
    pub out: Option<PathBuf>,

    /// Codec for the target stream (record sink)
    #[arg(long, default_value = "gzip")]
    pub out_codec: String,

    /// Level for the target codec (record sink)
    #[arg(long)]
    pub out_level: Option<i32>,

    /// Keep polling the file for new records
    #[arg(long)]
    pub follow: bool,

    #[arg(long, default_value_t = DEFAULT_POLL_MS)]
    pub poll_ms: u64,
}

pub fn run(args: &ReplayArgs) -> anyhow::Result<()> {
    let codec: CompressionCodec = args.codec.parse().map_err(CliError::from)?;
    let config = StreamConfig::with_codec(codec);

    let mut counter = CounterSink::default();
    let mut sink: Box<dyn MessageSink + '_> = match args.sink {
        SinkKind::Console => Box::new(ConsoleSink::stdout(ConsoleFormat::Text)),
        SinkKind::Hex => Box::new(ConsoleSink::stdout(ConsoleFormat::Hex)),
        SinkKind::Count => Box::new(&mut counter),
        SinkKind::Publish => {
            let addr = args.publish.as_deref().context("--publish is required")?;
            let stream = TcpStream::connect(addr).with_context(|| format!("connecting to {addr}"))?;
            info!("Publishing {} to {} on channel {:?}", args.file.display(), addr, args.channel);
            Box::new(FramedPublisher::new(stream, args.channel.clone()))
        }
        SinkKind::Record => {
            let out = args.out.as_ref().context("--out is required")?;
            let out_codec: CompressionCodec = args.out_codec.parse().map_err(CliError::from)?;
            let out_config = StreamConfig::new(CompressionConfig::new(out_codec, args.out_level));
            let writer = RecordWriter::append_to_path(out, &out_config).map_err(CliError::from)?;
            info!("Re-encoding {} into {} ({})", args.file.display(), out.display(), out_codec);
            Box::new(writer)
        }
    };

    let summary = if args.follow {
        let mut follower = StreamFollower::new(&args.file, &config).map_err(CliError::from)?;
        // Runs until the process is interrupted or the stream becomes unreadable.
        let stop = AtomicBool::new(false);
        follow(&mut follower, sink.as_mut(), Duration::from_millis(args.poll_ms), &stop)
            .map_err(CliError::from)?
    } else {
        replay_path(&args.file, &config, sink.as_mut()).map_err(CliError::from)?
    };
    drop(sink);

    report(args.sink, &summary, &counter)
}

fn report(kind: SinkKind, summary: &ReplaySummary, counter: &CounterSink) -> anyhow::Result<()> {
    if kind == SinkKind::Count {
        println!(
            "{}",
            serde_json::json!({
                "messages": counter.messages,
                "bytes": counter.bytes,
                "empty": counter.empty,
                "end_offset": summary.end_offset,
            })
        );
    }
    info!("Replayed {} records ({} bytes)", summary.delivered, summary.bytes);
    Ok(())
}
