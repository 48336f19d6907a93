use std::io::{self, Stdout, Write};

use serde::{Deserialize, Serialize};

use crate::sink::{MessageSink, SinkError};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsoleFormat {
    /// UTF-8 text; invalid sequences are replaced.
    #[default]
    Text,
    Hex,
}

/// Prints one payload per line.
pub struct ConsoleSink<W: Write = Stdout> {
    out: W,
    format: ConsoleFormat,
}

impl ConsoleSink<Stdout> {
    pub fn stdout(format: ConsoleFormat) -> Self {
        Self::new(io::stdout(), format)
    }
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(out: W, format: ConsoleFormat) -> Self {
        Self { out, format }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> MessageSink for ConsoleSink<W> {
    fn deliver(&mut self, payload: &[u8]) -> Result<(), SinkError> {
        match self.format {
            ConsoleFormat::Text => writeln!(self.out, "{}", String::from_utf8_lossy(payload))?,
            ConsoleFormat::Hex => writeln!(self.out, "{}", hex::encode(payload))?,
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<(), SinkError> {
        self.out.flush()?;
        Ok(())
    }
}
