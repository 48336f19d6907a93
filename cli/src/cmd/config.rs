use std::path::{Path, PathBuf};

use serde::Deserialize;

use recorder_core::capture::ChannelEndpoint;
use recorder_core::config::{CompressionConfig, StreamConfig};
use recorder_core::constants::{DEFAULT_FILE_EXTENSION, DEFAULT_REPORT_SECS};
use recorder_core::sink::MessageSink;
use recorder_core::sinks::{ConsoleFormat, ConsoleSink, CounterSink};

use super::error::CliError;

// ═══════════════════════════════════════════════════════════════
//  Config file (TOML)
// ═══════════════════════════════════════════════════════════════

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    pub out_dir: Option<PathBuf>,
    #[serde(default)]
    pub connections: Vec<ConnectionConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConnectionConfig {
    pub addr: String,
    pub port: u16,
    /// Channels to record. Empty records everything the publisher sends.
    #[serde(default)]
    pub channels: Vec<String>,
    #[serde(default = "default_extension")]
    pub file_extension: String,
    #[serde(default)]
    pub compression: CompressionConfig,
    /// Extra sinks fed with every recorded payload.
    #[serde(default)]
    pub sinks: Vec<SinkConfig>,
    /// Seconds between progress reports; 0 disables them.
    #[serde(default = "default_report_secs")]
    pub report_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SinkConfig {
    Console {
        #[serde(default)]
        format: ConsoleFormat,
    },
    Counter,
}

impl SinkConfig {
    pub fn build(&self) -> Box<dyn MessageSink + Send> {
        match self {
            SinkConfig::Console { format } => Box::new(ConsoleSink::stdout(*format)),
            SinkConfig::Counter => Box::new(CounterSink::default()),
        }
    }
}

fn default_extension() -> String {
    DEFAULT_FILE_EXTENSION.into()
}

fn default_report_secs() -> u64 {
    DEFAULT_REPORT_SECS
}

impl ConnectionConfig {
    pub fn endpoint(&self) -> ChannelEndpoint {
        ChannelEndpoint::new(&self.addr, self.port, None, &self.file_extension)
    }

    pub fn stream_config(&self) -> StreamConfig {
        StreamConfig::new(self.compression)
    }
}

pub fn parse_config(content: &str) -> Result<Config, CliError> {
    let cfg: Config = toml::from_str(content).map_err(|e| CliError::Config(format!("bad config: {e}")))?;

    if cfg.connections.is_empty() {
        return Err(CliError::Config("no [[connections]] configured".into()));
    }
    for conn in &cfg.connections {
        conn.stream_config()
            .validate()
            .map_err(|e| CliError::Config(format!("connection {}: {e}", conn.endpoint())))?;
    }
    Ok(cfg)
}

pub fn load_config(path: &Path) -> Result<Config, CliError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| CliError::Config(format!("cannot read config {}: {e}", path.display())))?;
    parse_config(&content)
}
