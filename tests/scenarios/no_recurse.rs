//! Scenario: Watching One Level Only
//!
//! Journey: With `--no-recurse`, only the given directory is watched, so
//! changes inside existing subdirectories are ignored.

use std::time::Duration;

use mirrorwatch::{PathResolver, WatchConfig, WatchEvent};

use crate::common::*;

/// SCENARIO: resolving without recursion returns the top directory only
#[test]
fn scenario_no_recurse_resolves_top_level_only() {
    let env = TestEnv::new();
    std::fs::create_dir_all(env.source_path("sub")).unwrap();

    let roots = PathResolver::new(false)
        .resolve(&[env.source.path().to_path_buf()])
        .unwrap();

    assert_eq!(roots.len(), 1);
    assert_eq!(roots[0].path(), env.source.path());
    assert!(!roots[0].is_recursive());
}

/// SCENARIO: a write inside an existing subdirectory is not seen
#[test]
fn scenario_no_recurse_ignores_subdirectory_changes() {
    let env = TestEnv::new();
    std::fs::create_dir_all(env.source_path("sub")).unwrap();

    let config = WatchConfig::new(
        vec![env.source.path().to_path_buf()],
        Some(env.mirror.path().to_path_buf()),
    )
    .with_recurse(false)
    .with_delay(Duration::from_millis(50));
    let session = WatchSession::start(config);

    env.write("sub/inner.txt", "hidden");
    env.write("top.txt", "seen");

    let top = env.mirrored("top.txt");
    assert!(wait_until(Duration::from_secs(5), || top.is_file()));

    let (_, _, events) = session.stop();
    let inner = env.source_path("sub/inner.txt").display().to_string();
    assert!(!events
        .iter()
        .any(|e| matches!(e, WatchEvent::FileChanged { path, .. } if *path == inner)));
    assert!(!env.mirrored("sub/inner.txt").exists());
}
