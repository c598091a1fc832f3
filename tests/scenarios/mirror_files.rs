//! Scenario: Mirroring New Files
//!
//! Journey: An operator watches a drop directory and wants every finished
//! file copied into a backup tree.
//!
//! Steps:
//! 1. Start watching the source with a short delay
//! 2. Create and write a file
//! 3. Wait out the delay
//! 4. Find the copy at `<mirror>/<full source path>`
//!
//! Success Criteria:
//! - Copy content matches the source at copy time
//! - No error events
//! - A file deleted before the delay expires is skipped quietly

use std::time::Duration;

use mirrorwatch::{map_to_mirror, MirrorLayout, WatchConfig, WatchEvent};

use crate::assert_mirrored;
use crate::common::*;

fn config(env: &TestEnv, delay: Duration) -> WatchConfig {
    WatchConfig::new(
        vec![env.source.path().to_path_buf()],
        Some(env.mirror.path().to_path_buf()),
    )
    .with_delay(delay)
}

/// SCENARIO: a file written after startup lands in the mirror after the delay
#[test]
fn scenario_new_file_is_mirrored_after_delay() {
    let env = TestEnv::new();
    let session = WatchSession::start(config(&env, Duration::from_millis(200)));

    env.write("a.txt", "hello");
    let dest = env.mirrored("a.txt");

    assert!(
        wait_until(Duration::from_secs(5), || {
            std::fs::read_to_string(&dest).is_ok_and(|c| c == "hello")
        }),
        "mirror never received a.txt; mirror contains: {:?}",
        list_all_files(env.mirror.path())
    );
    assert_mirrored!(dest, "hello");
    assert!(session.errors().is_empty(), "errors: {:?}", session.errors());

    let (_, _, events) = session.stop();
    assert!(events
        .iter()
        .any(|e| matches!(e, WatchEvent::CopyCompleted { bytes: 5, .. })));
}

/// SCENARIO: the copy reflects the content at fire time, not at event time
#[test]
fn scenario_copy_reads_content_at_fire_time() {
    let env = TestEnv::new();
    let session = WatchSession::start(config(&env, Duration::from_millis(400)));

    let path = env.write("log.txt", "first");
    std::thread::sleep(Duration::from_millis(50));
    std::fs::write(&path, "second").unwrap();

    let dest = env.mirrored("log.txt");
    assert!(wait_until(Duration::from_secs(5), || {
        std::fs::read_to_string(&dest).is_ok_and(|c| c == "second")
    }));
    drop(session);
}

/// SCENARIO: a file removed before its delay expires is never copied
#[test]
fn scenario_deleted_before_delay_is_skipped() {
    let env = TestEnv::new();
    let session = WatchSession::start(config(&env, Duration::from_millis(500)));

    let path = env.write("tmp.part", "partial");
    assert!(session.wait_for_event(Duration::from_secs(5), |e| matches!(
        e,
        WatchEvent::CopyScheduled { .. }
    )));
    std::fs::remove_file(&path).unwrap();

    assert!(session.wait_for_event(Duration::from_secs(5), |e| matches!(
        e,
        WatchEvent::CopySkipped { .. }
    )));
    assert!(!env.mirrored("tmp.part").exists());
    assert!(session.errors().is_empty(), "errors: {:?}", session.errors());
}

/// SCENARIO: files under a nested directory present at startup are mirrored
#[test]
fn scenario_nested_file_is_mirrored_with_recursion() {
    let env = TestEnv::new();
    std::fs::create_dir_all(env.source_path("sub/deeper")).unwrap();
    let session = WatchSession::start(config(&env, Duration::from_millis(100)));

    env.write("sub/deeper/n.txt", "nested");

    let dest = env.mirrored("sub/deeper/n.txt");
    assert!(wait_until(Duration::from_secs(5), || {
        std::fs::read_to_string(&dest).is_ok_and(|c| c == "nested")
    }));
    assert!(session.errors().is_empty(), "errors: {:?}", session.errors());
}

/// SCENARIO: a file finished elsewhere and renamed into the source is mirrored
#[test]
fn scenario_file_renamed_into_source_is_mirrored() {
    let env = TestEnv::new();
    let staging = tempfile::tempdir().unwrap();
    let staged = staging.path().join("upload.part");
    std::fs::write(&staged, "uploaded").unwrap();
    let session = WatchSession::start(config(&env, Duration::from_millis(100)));

    std::fs::rename(&staged, env.source_path("upload.txt")).unwrap();

    let dest = env.mirrored("upload.txt");
    assert!(
        wait_until(Duration::from_secs(5), || {
            std::fs::read_to_string(&dest).is_ok_and(|c| c == "uploaded")
        }),
        "renamed file never mirrored; mirror contains: {:?}",
        list_all_files(env.mirror.path())
    );
    assert!(session.errors().is_empty(), "errors: {:?}", session.errors());
}

/// SCENARIO: a source directory that lives inside the mirror is still mirrored
#[test]
fn scenario_source_nested_in_mirror_is_mirrored() {
    let env = TestEnv::new();
    let root = env.mirror.path().join("data");
    std::fs::create_dir(&root).unwrap();
    let cfg = WatchConfig::new(vec![root.clone()], Some(env.mirror.path().to_path_buf()))
        .with_delay(Duration::from_millis(100));
    let session = WatchSession::start(cfg);

    let file = root.join("a.txt");
    std::fs::write(&file, "inside").unwrap();

    let dest = map_to_mirror(&file, env.mirror.path(), MirrorLayout::native());
    assert!(
        wait_until(Duration::from_secs(5), || {
            std::fs::read_to_string(&dest).is_ok_and(|c| c == "inside")
        }),
        "expected {}; mirror contains: {:?}",
        dest.display(),
        list_all_files(env.mirror.path())
    );
    assert!(session.errors().is_empty(), "errors: {:?}", session.errors());
}

/// SCENARIO: a mirror inside the watched tree copies each file exactly once
#[test]
fn scenario_mirror_nested_in_source_does_not_copy_its_own_output() {
    let env = TestEnv::new();
    let mirror = env.source_path("backup");
    std::fs::create_dir(&mirror).unwrap();
    let cfg = WatchConfig::new(vec![env.source.path().to_path_buf()], Some(mirror.clone()))
        .with_delay(Duration::from_millis(100));
    let session = WatchSession::start(cfg);

    let file = env.write("a.txt", "once");

    let dest = map_to_mirror(&file, &mirror, MirrorLayout::native());
    assert!(wait_until(Duration::from_secs(5), || {
        std::fs::read_to_string(&dest).is_ok_and(|c| c == "once")
    }));
    std::thread::sleep(Duration::from_millis(500));

    let (_, _, events) = session.stop();
    let copies = events
        .iter()
        .filter(|e| matches!(e, WatchEvent::CopyCompleted { .. }))
        .count();
    assert!(copies >= 1);
    let again = map_to_mirror(&dest, &mirror, MirrorLayout::native());
    assert!(
        !again.exists(),
        "mirror output was copied again; mirror contains: {:?}",
        list_all_files(&mirror)
    );
}
