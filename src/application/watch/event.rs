//! Watch event types and loop state

use crate::domain::entities::ChangeKind;
use crate::error::{MirrorError, EXIT_FAILURE};

/// How long the loop blocks on the event channel before rechecking flags
pub const POLL_INTERVAL_MS: u64 = 50;

/// Watch event types for NDJSON output
#[derive(Debug, Clone, serde::Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum WatchEvent {
    /// Watch started
    WatchStarted {
        roots: Vec<String>,
        mirror: Option<String>,
        delay_ms: u64,
        recurse: bool,
    },
    /// Mirror directory missing; changes are reported but not mirrored
    MirrorUnavailable { path: Option<String> },
    /// Raw change notification
    FileChanged { path: String, kind: ChangeKind },
    DirectoryCreated { source: String, destination: String },
    DirectoryExists { destination: String },
    CopyScheduled {
        source: String,
        destination: String,
        delay_ms: u64,
    },
    CopyCompleted {
        source: String,
        destination: String,
        bytes: u64,
    },
    /// Source vanished before its delayed copy fired
    CopySkipped { source: String },
    HookStarted { command: String, pid: u32 },
    /// Error occurred
    Error { message: String },
    /// Watch stopped
    Shutdown { cancelled_copies: usize },
}

impl WatchEvent {
    /// Convert to JSON string with "command": "watch" field included
    pub fn to_json(&self) -> String {
        let mut value =
            serde_json::to_value(self).unwrap_or_else(|_| serde_json::json!({"event": "error"}));
        if let Some(obj) = value.as_object_mut() {
            obj.insert("command".to_string(), serde_json::json!("watch"));
        }
        serde_json::to_string(&value).unwrap_or_else(|_| "{}".to_string())
    }

    /// Diagnostics that are shown even in quiet mode
    pub fn is_error(&self) -> bool {
        matches!(
            self,
            WatchEvent::Error { .. } | WatchEvent::MirrorUnavailable { .. }
        )
    }

    pub(crate) fn error(err: &MirrorError) -> Self {
        WatchEvent::Error {
            message: err.to_string(),
        }
    }
}

/// Lifecycle of a watch loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Idle,
    Running,
    ShuttingDown,
    Terminated,
}

/// Why a watch loop returned
#[derive(Debug)]
pub enum LoopOutcome {
    /// Running flag cleared (Ctrl+C)
    Interrupted,
    /// Event source disconnected
    SourceClosed,
    /// Halt-on-error tripped on this error
    Halted(MirrorError),
}

impl LoopOutcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            LoopOutcome::Interrupted | LoopOutcome::SourceClosed => 0,
            LoopOutcome::Halted(_) => EXIT_FAILURE,
        }
    }
}
