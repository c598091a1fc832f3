//! Event Source Port
//!
//! Abstracts the OS change-notification facility. Events and errors arrive
//! on two separate channels; both disconnect once the source is closed.

use std::path::{Path, PathBuf};
use std::sync::mpsc::Receiver;

use crate::domain::entities::ChangeEvent;
use crate::error::{MirrorError, MirrorResult};

/// A filesystem change notification backend
pub trait EventSource {
    /// Register one path for non-recursive notification.
    ///
    /// Subdirectories are registered individually by the caller.
    fn watch(&mut self, path: &Path) -> MirrorResult<()>;

    /// Change notifications, in delivery order
    fn events(&self) -> &Receiver<ChangeEvent>;

    /// Asynchronous backend errors
    fn errors(&self) -> &Receiver<MirrorError>;

    /// Paths registered so far
    fn watched(&self) -> &[PathBuf];

    /// Release all registrations; no events are delivered afterwards
    fn close(&mut self);
}
