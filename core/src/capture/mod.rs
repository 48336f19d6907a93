//! capture: the recording side.
//!
//! A capture session receives channel-tagged messages from a
//! [`MessageSource`] and appends each payload, as one record, to the stream
//! belonging to that channel on that endpoint.

pub mod endpoint;
pub mod source;
pub mod session;

pub use endpoint::ChannelEndpoint;
pub use source::{encode_channel_message, write_channel_message, ChannelMessage, FramedMessageSource, MemorySource, MessageSource};
pub use session::{CaptureSession, CaptureSummary};
