//! Domain entities

mod change_event;
mod pending_copy;
mod watch_root;

pub use change_event::{ChangeEvent, ChangeKind};
pub use pending_copy::PendingCopy;
pub use watch_root::{RootKind, WatchRoot};
