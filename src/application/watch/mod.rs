//! Watch Use Case
//!
//! This module implements the watch-and-mirror loop.
//! It orchestrates:
//! - Change notifications (via an `EventSource`)
//! - Mirroring of created or changed paths (via `MirrorSync`)
//! - Completion reports from delayed copies
//! - The optional on-change hook
//!
//! ## Usage
//!
//! ```ignore
//! let mut watch = WatchLoop::new(config, NotifyEventSource::new()?);
//! watch.register(&roots)?;
//! let outcome = watch.run(&running, |event| { ... });
//! ```

mod event;
mod use_case;


pub use event::{LoopOutcome, LoopState, WatchEvent, POLL_INTERVAL_MS};
pub use use_case::WatchLoop;
