//! Scenario: Stopping the Watcher
//!
//! Journey: The operator interrupts the watcher while copies are still
//! waiting out their delay.
//!
//! Success Criteria:
//! - The loop exits with the interrupted outcome and exit status 0
//! - Pending copies are cancelled and never land in the mirror

use std::time::Duration;

use mirrorwatch::application::watch::LoopState;
use mirrorwatch::{LoopOutcome, WatchConfig, WatchEvent};

use crate::common::*;

/// SCENARIO: interrupting cancels copies that have not fired yet
#[test]
fn scenario_interrupt_cancels_pending_copies() {
    let env = TestEnv::new();
    let config = WatchConfig::new(
        vec![env.source.path().to_path_buf()],
        Some(env.mirror.path().to_path_buf()),
    )
    .with_delay(Duration::from_secs(30));
    let session = WatchSession::start(config);

    env.write("slow.txt", "later");
    assert!(session.wait_for_event(Duration::from_secs(5), |e| matches!(
        e,
        WatchEvent::CopyScheduled { .. }
    )));

    let (outcome, state, events) = session.stop();

    assert!(matches!(outcome, LoopOutcome::Interrupted));
    assert_eq!(outcome.exit_code(), 0);
    assert_eq!(state, LoopState::Terminated);
    let cancelled = events.iter().find_map(|e| match e {
        WatchEvent::Shutdown { cancelled_copies } => Some(*cancelled_copies),
        _ => None,
    });
    assert!(cancelled.is_some_and(|n| n >= 1), "events: {events:?}");

    std::thread::sleep(Duration::from_millis(100));
    assert!(!env.mirrored("slow.txt").exists());
}

/// SCENARIO: an idle watcher stops cleanly
#[test]
fn scenario_idle_interrupt_is_clean() {
    let env = TestEnv::new();
    let session = WatchSession::start(WatchConfig::new(
        vec![env.source.path().to_path_buf()],
        Some(env.mirror.path().to_path_buf()),
    ));

    let (outcome, _, events) = session.stop();

    assert!(matches!(outcome, LoopOutcome::Interrupted));
    assert!(matches!(
        events.last(),
        Some(WatchEvent::Shutdown {
            cancelled_copies: 0
        })
    ));
}
