//! Mirror Sync Use Case
//!
//! Replicates a changed path into the mirror directory:
//! - Directories are created immediately (parents included)
//! - Files are copied after a fixed delay so the writer can finish
//!
//! Delayed copies run on background timers and report back through a
//! completion callback; `cancel_pending` stops any that have not fired.

mod use_case;


pub use use_case::{CopyReport, CopyReporter, MirrorSync, SyncOutcome};
