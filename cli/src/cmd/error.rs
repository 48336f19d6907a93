use recorder_core::compression::CompressionError;
use recorder_core::types::StreamError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Config(String),

    #[error("{0}")]
    Codec(#[from] CompressionError),

    #[error("{0}")]
    Stream(#[from] StreamError),
}
