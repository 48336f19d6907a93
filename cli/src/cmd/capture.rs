use std::io::BufReader;
use std::net::TcpStream;
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use anyhow::{bail, Context};
use clap::Args;
use tracing::{error, info};

use recorder_core::capture::{CaptureSession, CaptureSummary, FramedMessageSource};

use super::config::{load_config, ConnectionConfig};

#[derive(Args, Clone, Debug)]
pub struct CaptureArgs {
    /// Path to the recorder config
    #[arg(long, default_value = "recorder.toml", env = "MSGREC_CONFIG")]
    pub config: PathBuf,

    /// Directory for recorded streams; overrides `out_dir` from the config
    #[arg(long)]
    pub out_dir: Option<PathBuf>,
}

pub fn run(args: &CaptureArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args.config)?;
    let out_dir = args.out_dir.clone().or(cfg.out_dir);

    let handles: Vec<_> = cfg
        .connections
        .into_iter()
        .map(|conn| {
            let out_dir = out_dir.clone();
            let name = conn.endpoint().host();
            let handle = thread::Builder::new()
                .name(name.clone())
                .spawn(move || capture_connection(&conn, out_dir));
            (name, handle)
        })
        .collect();

    let mut failed = 0;
    for (name, handle) in handles {
        let result = handle
            .with_context(|| format!("spawning capture thread for {name}"))?
            .join();
        match result {
            Ok(Ok(summary)) => info!(
                "{}: recorded {} messages into {} streams, skipped {}, {} sink errors",
                name,
                summary.recorded,
                summary.streams.len(),
                summary.skipped,
                summary.sink_errors
            ),
            Ok(Err(e)) => {
                error!("{}: {:#}", name, e);
                failed += 1;
            }
            Err(_) => {
                error!("{}: capture thread panicked", name);
                failed += 1;
            }
        }
    }

    if failed > 0 {
        bail!("{failed} connection(s) failed");
    }
    Ok(())
}

fn capture_connection(conn: &ConnectionConfig, out_dir: Option<PathBuf>) -> anyhow::Result<CaptureSummary> {
    let endpoint = conn.endpoint();
    let mut session = CaptureSession::new(endpoint.clone(), conn.channels.clone(), out_dir, conn.stream_config())?;
    for sink in &conn.sinks {
        session.add_sink(sink.build());
    }
    if conn.report_secs > 0 {
        session.set_report_interval(Duration::from_secs(conn.report_secs));
    }

    let stream = TcpStream::connect(endpoint.socket_addr())
        .with_context(|| format!("connecting to {}", endpoint.host()))?;
    info!("Connected to {}", endpoint);

    let mut source = FramedMessageSource::new(BufReader::new(stream));
    let summary = session.run(&mut source)?;
    Ok(summary)
}
