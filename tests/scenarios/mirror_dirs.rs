//! Scenario: Mirroring New Directories
//!
//! Journey: A directory appears under a watched root. Its mirror counterpart
//! should exist right away, without waiting for the copy delay.

use std::time::Duration;

use mirrorwatch::{WatchConfig, WatchEvent};

use crate::common::*;

/// SCENARIO: a new directory is created in the mirror immediately
#[test]
fn scenario_directory_is_created_without_delay() {
    let env = TestEnv::new();
    let config = WatchConfig::new(
        vec![env.source.path().to_path_buf()],
        Some(env.mirror.path().to_path_buf()),
    )
    .with_delay(Duration::from_secs(60));
    let session = WatchSession::start(config);

    std::fs::create_dir(env.source_path("sub")).unwrap();

    let dest = env.mirrored("sub");
    assert!(
        wait_until(Duration::from_secs(2), || dest.is_dir()),
        "mirror directory should appear long before the 60s delay"
    );

    let (_, _, events) = session.stop();
    assert!(events
        .iter()
        .any(|e| matches!(e, WatchEvent::DirectoryCreated { .. })));
    assert!(!events
        .iter()
        .any(|e| matches!(e, WatchEvent::CopyScheduled { .. })));
}

/// SCENARIO: a directory whose mirror already exists is left alone
#[test]
fn scenario_existing_mirror_directory_is_reported() {
    let env = TestEnv::new();
    let dest = env.mirrored("again");
    std::fs::create_dir_all(&dest).unwrap();
    std::fs::write(dest.join("keep.txt"), "keep").unwrap();

    let config = WatchConfig::new(
        vec![env.source.path().to_path_buf()],
        Some(env.mirror.path().to_path_buf()),
    );
    let session = WatchSession::start(config);

    std::fs::create_dir(env.source_path("again")).unwrap();

    assert!(session.wait_for_event(Duration::from_secs(5), |e| matches!(
        e,
        WatchEvent::DirectoryExists { .. }
    )));
    assert_eq!(std::fs::read_to_string(dest.join("keep.txt")).unwrap(), "keep");
}
