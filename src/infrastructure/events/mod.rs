//! Event Sources and Sinks
//!
//! - NotifyEventSource: OS change notifications via `notify`
//! - ChannelEventSource: in-memory source fed by hand (embedding, tests)
//! - JsonEventSink: NDJSON output of watch events for automation

mod channel;
mod json;
mod notify_source;

pub use channel::{channel_source, ChannelEventSender, ChannelEventSource};
pub use json::JsonEventSink;
pub use notify_source::{classify, classify_path, NotifyEventSource};
