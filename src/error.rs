//! Error types for mirrorwatch
//!
//! Library code returns `MirrorError`; the binary wraps it with `anyhow`
//! context and maps it to an exit code.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for mirrorwatch operations
pub type MirrorResult<T> = Result<T, MirrorError>;

/// Exit code for a fatal setup or halt-on-error failure.
pub const EXIT_FAILURE: i32 = 1;
/// Exit code when no watch path could be resolved.
pub const EXIT_NO_PATHS: i32 = 2;

/// Main error type for mirrorwatch operations
#[derive(Error, Debug)]
pub enum MirrorError {
    /// A root argument does not exist
    #[error("path not found: {path}")]
    PathNotFound { path: PathBuf },

    /// A root argument exists but could not be inspected
    #[error("cannot stat {path}: {source}")]
    StatFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Resolution produced an empty watch set
    #[error("no valid paths to watch")]
    NoWatchPaths,

    /// The event source refused to register a path
    #[error("failed to watch {path}: {message}")]
    WatchRegistrationFailed { path: PathBuf, message: String },

    /// The configured mirror directory is missing or not a directory
    #[error("copy target dir does not exist: {path}")]
    MirrorDirUnavailable { path: PathBuf },

    /// Creating a mirrored directory (or a file's parent chain) failed
    #[error("failed to create directory {path}: {source}")]
    DirectoryCreateFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Streaming a file into the mirror failed
    #[error("failed to copy {from} to {to}: {source}")]
    CopyFailed {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The event source reported an error on its error channel
    #[error("event source error: {message}")]
    EventSource { message: String },

    /// A duration option could not be parsed
    #[error("invalid duration '{value}': {reason}")]
    InvalidInterval { value: String, reason: String },

    /// A config file could not be parsed
    #[error("invalid config in {file}: {message}")]
    Config { file: PathBuf, message: String },

    /// The on-change command could not be started
    #[error("on-change command failed: {message}")]
    HookFailed { message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl MirrorError {
    /// Process exit code for this error when it aborts the program.
    pub fn exit_code(&self) -> i32 {
        match self {
            MirrorError::PathNotFound { .. }
            | MirrorError::StatFailed { .. }
            | MirrorError::NoWatchPaths => EXIT_NO_PATHS,
            _ => EXIT_FAILURE,
        }
    }
}
