//! Endpoint identity and the storage naming derived from it.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_FILE_EXTENSION, ENDPOINT_SCHEME, NO_TOPIC};

/// A publisher address plus, optionally, the channel recorded from it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChannelEndpoint {
    pub addr: String,
    pub port: u16,
    #[serde(default)]
    pub channel: Option<String>,
    #[serde(default = "default_extension")]
    pub file_extension: String,
}

fn default_extension() -> String {
    DEFAULT_FILE_EXTENSION.to_string()
}

impl ChannelEndpoint {
    pub fn new(addr: &str, port: u16, channel: Option<&str>, file_extension: &str) -> Self {
        Self {
            addr: addr.to_string(),
            port,
            channel: channel.filter(|c| !c.is_empty()).map(str::to_string),
            file_extension: file_extension.to_string(),
        }
    }

    /// `tcp://addr:port`
    pub fn host(&self) -> String {
        format!("{}://{}:{}", ENDPOINT_SCHEME, self.addr, self.port)
    }

    /// `addr:port`, suitable for `TcpStream::connect`.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.addr, self.port)
    }

    /// Same endpoint, narrowed to `channel`. An empty name means no channel.
    pub fn for_channel(&self, channel: &str) -> Self {
        Self {
            channel: Some(channel).filter(|c| !c.is_empty()).map(str::to_string),
            ..self.clone()
        }
    }

    /// File name of the stream recorded for this endpoint, e.g.
    /// `tcp___127.0.0.1_5555_test.rec`. Separators that are unsafe in file
    /// names are replaced with `_`.
    pub fn storage_name(&self) -> String {
        let channel = self.channel.as_deref().unwrap_or(NO_TOPIC);
        format!("{}_{}.{}", self.host(), channel, self.file_extension)
            .replace([':', '/', '\\'], "_")
    }
}

impl fmt::Display for ChannelEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.channel {
            Some(channel) => write!(f, "{} [{}]", self.host(), channel),
            None => write!(f, "{} [*]", self.host()),
        }
    }
}
