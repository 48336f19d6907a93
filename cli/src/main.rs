mod cmd;

use clap::{Parser, Subcommand};
use cmd::{capture::CaptureArgs, replay::ReplayArgs, stats::StatsArgs};

#[derive(Parser)]
#[command(name = "msgrec", version, about = "Record, replay and inspect framed compressed message streams")]
struct Cli {
    /// Log filter used when RUST_LOG is not set (e.g. "info", "recorder_core=debug")
    #[arg(long, global = true, default_value = "info", env = "MSGREC_LOG")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Record every configured connection until its publisher goes away
    Capture(CaptureArgs),
    /// Feed a recorded stream to a sink
    Replay(ReplayArgs),
    /// Scan a stream and print its telemetry as JSON
    Stats(StatsArgs),
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cli.log_level.as_str().into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let result = match &cli.command {
        Command::Capture(args) => cmd::capture::run(args),
        Command::Replay(args) => cmd::replay::run(args),
        Command::Stats(args) => cmd::stats::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
