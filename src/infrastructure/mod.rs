//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `events/` - Event sources (notify backend, in-memory channel)
//! - `fs/` - Staged file copies and directory creation
//! - `scheduler` - One-shot delayed tasks with cancellation
//! - `hook` - On-change command runner

pub mod events;
pub mod fs;
pub mod hook;
pub mod scheduler;

pub use events::{channel_source, ChannelEventSender, ChannelEventSource, NotifyEventSource};
pub use hook::{HookOutcome, OnChangeHook};
pub use scheduler::{Scheduler, TaskHandle};
