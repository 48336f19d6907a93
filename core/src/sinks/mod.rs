mod console;
mod counter;
mod collect;
mod publish;
mod record;

pub use console::{ConsoleFormat, ConsoleSink};
pub use counter::CounterSink;
pub use collect::CollectSink;
pub use publish::FramedPublisher;
