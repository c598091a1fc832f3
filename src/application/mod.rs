//! Application Layer
//!
//! Use cases that orchestrate the watch-and-mirror flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `PathResolver` - Expand arguments into watch roots
//! - `MirrorSync` - Replicate one changed path into the mirror
//! - `WatchLoop` - Consume events, mirror them, run the on-change hook

pub mod mirror;
pub mod resolver;
pub mod watch;

pub use mirror::{CopyReport, MirrorSync, SyncOutcome};
pub use resolver::PathResolver;
pub use watch::{LoopOutcome, LoopState, WatchEvent, WatchLoop};
