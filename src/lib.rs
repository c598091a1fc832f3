//! Mirrorwatch - watch directory trees and mirror changes into a shadow tree
//!
//! Every created or finished file under the watched roots is copied, after a
//! settle delay, to `<mirror_dir>/<full source path>`. Directories are
//! recreated immediately.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::mirror::{CopyReport, MirrorSync, SyncOutcome};
pub use application::resolver::PathResolver;
pub use application::watch::{LoopOutcome, WatchEvent, WatchLoop};
pub use config::{Config, WatchConfig};
pub use domain::entities::{ChangeEvent, ChangeKind, WatchRoot};
pub use domain::services::{map_to_mirror, MirrorLayout};
pub use error::{MirrorError, MirrorResult};
