//! Watch Loop implementation

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{channel, Receiver, RecvTimeoutError};
use std::time::{Duration, Instant};

use crate::application::mirror::{CopyReport, MirrorSync, SyncOutcome};
use crate::config::WatchConfig;
use crate::domain::entities::{ChangeEvent, WatchRoot};
use crate::domain::ports::EventSource;
use crate::error::{MirrorError, MirrorResult};
use crate::infrastructure::hook::{HookOutcome, OnChangeHook};

use super::event::{LoopOutcome, LoopState, WatchEvent, POLL_INTERVAL_MS};

fn display(path: &std::path::Path) -> String {
    path.display().to_string()
}

fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

/// Watch Loop
///
/// Consumes change events from an `EventSource`, mirrors qualifying paths
/// and runs the on-change hook. This is the main entry point for the
/// `watch` binary.
pub struct WatchLoop<S: EventSource> {
    config: WatchConfig,
    source: S,
    mirror: MirrorSync,
    hook: Option<OnChangeHook>,
    reports: Receiver<CopyReport>,
    state: LoopState,
}

impl<S: EventSource> WatchLoop<S> {
    pub fn new(config: WatchConfig, source: S) -> Self {
        let (report_tx, reports) = channel();
        let mirror = MirrorSync::from_config(&config).with_reporter(move |report| {
            let _ = report_tx.send(report);
        });
        let hook = config
            .on_change
            .as_deref()
            .and_then(|cmd| OnChangeHook::parse(cmd, config.interval))
            .map(|hook| hook.with_quiet(config.quiet));

        Self {
            config,
            source,
            mirror,
            hook,
            reports,
            state: LoopState::Idle,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn mirror(&self) -> &MirrorSync {
        &self.mirror
    }

    pub fn config(&self) -> &WatchConfig {
        &self.config
    }

    /// Register every root with the event source.
    ///
    /// Stops at the first registration failure.
    pub fn register(&mut self, roots: &[WatchRoot]) -> MirrorResult<()> {
        for root in roots {
            self.source.watch(root.path())?;
            self.mirror.observe_root(root.path());
        }
        Ok(())
    }

    /// Process events until `running` is cleared, the source disconnects,
    /// or (with halt-on-error) a per-event error occurs.
    pub fn run<F>(&mut self, running: &AtomicBool, on_event: F) -> LoopOutcome
    where
        F: Fn(WatchEvent),
    {
        self.state = LoopState::Running;

        on_event(WatchEvent::WatchStarted {
            roots: self.source.watched().iter().map(|p| display(p)).collect(),
            mirror: self.config.mirror_dir.as_deref().map(display),
            delay_ms: millis(self.config.delay),
            recurse: self.config.recurse,
        });
        if self.mirror.mirror_dir().is_none() {
            on_event(WatchEvent::MirrorUnavailable {
                path: self.config.mirror_dir.as_deref().map(display),
            });
        }

        let poll = Duration::from_millis(POLL_INTERVAL_MS);
        loop {
            if !running.load(Ordering::SeqCst) {
                return self.shutdown(&on_event);
            }

            let reports: Vec<CopyReport> = self.reports.try_iter().collect();
            for report in reports {
                if let Err(err) = self.handle_report(report, &on_event) {
                    if self.config.halt_on_error {
                        return self.halt(err);
                    }
                }
            }

            let source_errors: Vec<MirrorError> = self.source.errors().try_iter().collect();
            for err in source_errors {
                on_event(WatchEvent::error(&err));
                if self.config.halt_on_error {
                    return self.halt(err);
                }
            }

            let received = self.source.events().recv_timeout(poll);
            match received {
                Ok(event) => {
                    if let Err(err) = self.dispatch(&event, &on_event) {
                        on_event(WatchEvent::error(&err));
                        if self.config.halt_on_error {
                            return self.halt(err);
                        }
                    }
                }
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => {
                    self.shutdown(&on_event);
                    return LoopOutcome::SourceClosed;
                }
            }
        }
    }

    /// Handle one change event: log it, mirror it, run the hook.
    fn dispatch(&mut self, event: &ChangeEvent, on_event: &impl Fn(WatchEvent)) -> MirrorResult<()> {
        on_event(WatchEvent::FileChanged {
            path: display(&event.path),
            kind: event.kind,
        });

        if !event.kind.triggers_mirror() {
            return Ok(());
        }

        let outcome = self.mirror.sync(&event.path)?;
        let counts_as_change = outcome.counts_as_change();
        match outcome {
            SyncOutcome::DirectoryCreated { destination } => {
                on_event(WatchEvent::DirectoryCreated {
                    source: display(&event.path),
                    destination: display(&destination),
                })
            }
            SyncOutcome::AlreadyMirrored { destination } => {
                on_event(WatchEvent::DirectoryExists {
                    destination: display(&destination),
                })
            }
            SyncOutcome::CopyScheduled(pending) => on_event(WatchEvent::CopyScheduled {
                source: display(pending.source()),
                destination: display(pending.destination()),
                delay_ms: millis(self.mirror.delay()),
            }),
            SyncOutcome::Disabled
            | SyncOutcome::SourceMissing
            | SyncOutcome::InsideMirror
            | SyncOutcome::Unsupported => {}
        }

        if !counts_as_change {
            return Ok(());
        }
        if let Some(hook) = self.hook.as_mut() {
            if let HookOutcome::Spawned { pid } = hook.trigger(Instant::now())? {
                on_event(WatchEvent::HookStarted {
                    command: hook.command_line(),
                    pid,
                });
            }
        }

        Ok(())
    }

    fn handle_report(
        &self,
        report: CopyReport,
        on_event: &impl Fn(WatchEvent),
    ) -> MirrorResult<()> {
        match report {
            CopyReport::Copied {
                source,
                destination,
                bytes,
            } => on_event(WatchEvent::CopyCompleted {
                source: display(&source),
                destination: display(&destination),
                bytes,
            }),
            CopyReport::SourceVanished { source } => on_event(WatchEvent::CopySkipped {
                source: display(&source),
            }),
            CopyReport::Failed(err) => {
                on_event(WatchEvent::error(&err));
                return Err(err);
            }
        }
        Ok(())
    }

    fn shutdown(&mut self, on_event: &impl Fn(WatchEvent)) -> LoopOutcome {
        self.state = LoopState::ShuttingDown;
        self.source.close();
        let cancelled_copies = self.mirror.cancel_pending();
        on_event(WatchEvent::Shutdown { cancelled_copies });
        self.state = LoopState::Terminated;
        LoopOutcome::Interrupted
    }

    fn halt(&mut self, err: MirrorError) -> LoopOutcome {
        self.state = LoopState::Terminated;
        self.source.close();
        self.mirror.cancel_pending();
        LoopOutcome::Halted(err)
    }
}
