use std::path::PathBuf;
use std::time::Instant;

use clap::Args;

use recorder_core::compression::CompressionCodec;
use recorder_core::config::StreamConfig;
use recorder_core::stream::read_records_from_path;
use recorder_core::telemetry::TelemetrySnapshot;

use super::error::CliError;

#[derive(Args, Clone, Debug)]
pub struct StatsArgs {
    /// Stream to scan
    pub file: PathBuf,

    /// Codec the stream was written with
    #[arg(long, default_value = "gzip")]
    pub codec: String,
}

pub fn run(args: &StatsArgs) -> anyhow::Result<()> {
    let codec: CompressionCodec = args.codec.parse().map_err(CliError::from)?;
    let config = StreamConfig::with_codec(codec);

    let started = Instant::now();
    let mut records = read_records_from_path(&args.file, &config).map_err(CliError::from)?;
    while records.next_record().map_err(CliError::from)?.is_some() {}

    let snapshot = TelemetrySnapshot::from(records.counters(), codec, started.elapsed());
    println!("{}", snapshot.to_json()?);
    Ok(())
}
