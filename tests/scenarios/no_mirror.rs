//! Scenario: Watching Without a Mirror
//!
//! Journey: An operator runs the watcher only to log activity. No mirror
//! directory is given, or the one given does not exist.
//!
//! Success Criteria:
//! - Changes are still reported
//! - Nothing is written anywhere
//! - No error events

use std::time::Duration;

use mirrorwatch::{ChangeKind, WatchConfig, WatchEvent};

use crate::common::*;

/// SCENARIO: no mirror directory means events are only logged
#[test]
fn scenario_without_mirror_only_logs() {
    let env = TestEnv::new();
    let config = WatchConfig::new(vec![env.source.path().to_path_buf()], None)
        .with_delay(Duration::from_millis(50));
    let session = WatchSession::start(config);

    env.write("a.txt", "hello");

    assert!(session.wait_for_event(Duration::from_secs(5), |e| matches!(
        e,
        WatchEvent::FileChanged {
            kind: ChangeKind::Created,
            ..
        }
    )));
    std::thread::sleep(Duration::from_millis(200));

    let (_, _, events) = session.stop();
    assert!(events
        .iter()
        .any(|e| matches!(e, WatchEvent::MirrorUnavailable { path: None })));
    assert!(!events.iter().any(|e| matches!(
        e,
        WatchEvent::Error { .. } | WatchEvent::CopyScheduled { .. } | WatchEvent::CopyCompleted { .. }
    )));
    assert!(list_all_files(env.mirror.path()).is_empty());
}

/// SCENARIO: a mirror path that does not exist disables mirroring
#[test]
fn scenario_missing_mirror_directory_disables_mirroring() {
    let env = TestEnv::new();
    let missing = env.mirror.path().join("not-there");
    let config = WatchConfig::new(vec![env.source.path().to_path_buf()], Some(missing.clone()))
        .with_delay(Duration::from_millis(50));
    let session = WatchSession::start(config);

    env.write("a.txt", "hello");
    std::fs::create_dir(env.source_path("sub")).unwrap();

    assert!(session.wait_for_event(Duration::from_secs(5), |e| matches!(
        e,
        WatchEvent::FileChanged { .. }
    )));
    std::thread::sleep(Duration::from_millis(200));

    assert!(!missing.exists());
    assert!(session.errors().is_empty(), "errors: {:?}", session.errors());
}
