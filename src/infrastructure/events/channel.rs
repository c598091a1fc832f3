//! In-memory event source
//!
//! Events and errors are pushed through a `ChannelEventSender`; dropping the
//! sender disconnects the source the same way a dead OS watcher would.

use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver, SendError, Sender};

use crate::domain::entities::{ChangeEvent, ChangeKind};
use crate::domain::ports::EventSource;
use crate::error::{MirrorError, MirrorResult};

pub struct ChannelEventSource {
    events: Receiver<ChangeEvent>,
    errors: Receiver<MirrorError>,
    watched: Vec<PathBuf>,
    closed: bool,
}

/// Feeding side of a `ChannelEventSource`
#[derive(Clone)]
pub struct ChannelEventSender {
    events: Sender<ChangeEvent>,
    errors: Sender<MirrorError>,
}

/// Create a connected source/sender pair
pub fn channel_source() -> (ChannelEventSource, ChannelEventSender) {
    let (event_tx, events) = channel();
    let (error_tx, errors) = channel();
    (
        ChannelEventSource {
            events,
            errors,
            watched: Vec::new(),
            closed: false,
        },
        ChannelEventSender {
            events: event_tx,
            errors: error_tx,
        },
    )
}

impl ChannelEventSource {
    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

impl ChannelEventSender {
    pub fn send(&self, event: ChangeEvent) -> Result<(), SendError<ChangeEvent>> {
        self.events.send(event)
    }

    pub fn send_change(
        &self,
        path: impl Into<PathBuf>,
        kind: ChangeKind,
    ) -> Result<(), SendError<ChangeEvent>> {
        self.send(ChangeEvent::new(path, kind))
    }

    pub fn send_error(&self, message: impl Into<String>) -> Result<(), SendError<MirrorError>> {
        self.errors.send(MirrorError::EventSource {
            message: message.into(),
        })
    }
}

impl EventSource for ChannelEventSource {
    /// Registration only requires the path to exist
    fn watch(&mut self, path: &Path) -> MirrorResult<()> {
        if self.closed {
            return Err(MirrorError::WatchRegistrationFailed {
                path: path.to_path_buf(),
                message: "event source is closed".to_string(),
            });
        }
        if !path.exists() {
            return Err(MirrorError::WatchRegistrationFailed {
                path: path.to_path_buf(),
                message: "no such file or directory".to_string(),
            });
        }
        self.watched.push(path.to_path_buf());
        Ok(())
    }

    fn events(&self) -> &Receiver<ChangeEvent> {
        &self.events
    }

    fn errors(&self) -> &Receiver<MirrorError> {
        &self.errors
    }

    fn watched(&self) -> &[PathBuf] {
        &self.watched
    }

    fn close(&mut self) {
        self.closed = true;
        self.watched.clear();
    }
}
