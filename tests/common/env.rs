//! Test environment for isolated mirrorwatch runs.
//!
//! Provides `TestEnv`: a source tree and a mirror directory in separate temp
//! dirs, plus helpers to run the `watch` binary against them.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Child, Command, Output, Stdio};

use mirrorwatch::{map_to_mirror, MirrorLayout};
use tempfile::TempDir;

/// Result of running the `watch` binary
#[derive(Debug)]
pub struct TestResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    fn from_output(output: Output) -> Self {
        Self {
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated source and mirror directories
pub struct TestEnv {
    pub source: TempDir,
    pub mirror: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            source: tempfile::tempdir().expect("create source dir"),
            mirror: tempfile::tempdir().expect("create mirror dir"),
        }
    }

    pub fn source_path(&self, relative: &str) -> PathBuf {
        self.source.path().join(relative)
    }

    /// Where a source-relative path lands in the mirror
    pub fn mirrored(&self, relative: &str) -> PathBuf {
        map_to_mirror(
            &self.source_path(relative),
            self.mirror.path(),
            MirrorLayout::native(),
        )
    }

    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.source_path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent");
        }
        std::fs::write(&path, content).expect("write source file");
        path
    }

    /// Build a `watch` command running inside the source dir with no
    /// ambient config or env overrides
    pub fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(bin());
        cmd.current_dir(self.source.path())
            .args(args)
            .env("NO_COLOR", "1")
            .env_remove("MIRRORWATCH_QUIET")
            .env_remove("MIRRORWATCH_HALT")
            .env_remove("MIRRORWATCH_NO_RECURSE")
            .env_remove("MIRRORWATCH_DELAY")
            .env_remove("MIRRORWATCH_INTERVAL")
            .env("XDG_CONFIG_HOME", self.mirror.path().join(".no-config"));
        cmd
    }

    /// Run to completion
    pub fn run(&self, args: &[&str]) -> TestResult {
        let output = self.command(args).output().expect("run watch binary");
        TestResult::from_output(output)
    }

    /// Start without waiting; stdout and stderr are piped
    pub fn spawn(&self, args: &[&str]) -> Child {
        self.command(args)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("spawn watch binary")
    }
}

pub fn bin() -> &'static Path {
    Path::new(env!("CARGO_BIN_EXE_watch"))
}
