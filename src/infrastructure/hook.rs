//! On-change command hook
//!
//! Spawns a user command after mirrored changes, at most once per interval.
//! The child is reaped on a background thread; its exit status is not awaited.

use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use crate::error::{MirrorError, MirrorResult};

/// Result of a trigger attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HookOutcome {
    Spawned { pid: u32 },
    /// Last run was less than one interval ago
    Throttled { retry_in: Duration },
}

#[derive(Debug, Clone)]
pub struct OnChangeHook {
    program: String,
    args: Vec<String>,
    interval: Duration,
    last_run: Option<Instant>,
    quiet: bool,
}

impl OnChangeHook {
    /// Parse a whitespace-separated command line.
    ///
    /// Returns `None` for a blank command.
    pub fn parse(command: &str, interval: Duration) -> Option<Self> {
        let mut parts = command.split_whitespace().map(str::to_string);
        let program = parts.next()?;
        Some(Self {
            program,
            args: parts.collect(),
            interval,
            last_run: None,
            quiet: false,
        })
    }

    /// Discard the child's stdout and stderr
    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Spawn the command unless the previous run is within one interval of `now`
    pub fn trigger(&mut self, now: Instant) -> MirrorResult<HookOutcome> {
        if let Some(last) = self.last_run {
            let elapsed = now.saturating_duration_since(last);
            if elapsed < self.interval {
                return Ok(HookOutcome::Throttled {
                    retry_in: self.interval - elapsed,
                });
            }
        }

        let output = || {
            if self.quiet {
                Stdio::null()
            } else {
                Stdio::inherit()
            }
        };

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::null())
            .stdout(output())
            .stderr(output())
            .spawn()
            .map_err(|e| MirrorError::HookFailed {
                message: format!("{}: {}", self.command_line(), e),
            })?;

        self.last_run = Some(now);
        let pid = child.id();
        thread::spawn(move || {
            let _ = child.wait();
        });

        Ok(HookOutcome::Spawned { pid })
    }
}
