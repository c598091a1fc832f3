//! Configuration type definitions

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::MirrorResult;

use super::duration::serde_duration;
use super::loader::{self, ConfigWarning};

/// Default quiescence delay before a changed file is copied
pub const DEFAULT_DELAY: Duration = Duration::from_secs(10);

/// Default `--interval` (hook throttle window)
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(1);

/// Watch settings (`[watch]`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatchSettings {
    /// Descend into subdirectories of each root
    #[serde(default = "default_true")]
    pub recurse: bool,

    /// Exit on the first reported error
    #[serde(default)]
    pub halt_on_error: bool,

    /// Minimum time between two on-change hook runs
    #[serde(default = "default_interval", with = "serde_duration")]
    pub interval: Duration,
}

impl Default for WatchSettings {
    fn default() -> Self {
        Self {
            recurse: true,
            halt_on_error: false,
            interval: DEFAULT_INTERVAL,
        }
    }
}

/// Mirror settings (`[mirror]`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MirrorSettings {
    /// Quiescence delay before copying a changed file
    #[serde(default = "default_delay", with = "serde_duration")]
    pub delay: Duration,
}

impl Default for MirrorSettings {
    fn default() -> Self {
        Self {
            delay: DEFAULT_DELAY,
        }
    }
}

/// Output settings (`[output]`)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutputSettings {
    /// Suppress per-event output (errors are still printed)
    #[serde(default)]
    pub quiet: bool,

    /// Emit NDJSON events instead of text
    #[serde(default)]
    pub json: bool,

    #[serde(default)]
    pub color: ColorMode,
}

/// Hook settings (`[hook]`)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HookSettings {
    /// Command run after a qualifying change
    #[serde(default)]
    pub on_change: Option<String>,
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// File-level configuration (`mirrorwatch.toml`)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub watch: WatchSettings,

    #[serde(default)]
    pub mirror: MirrorSettings,

    #[serde(default)]
    pub output: OutputSettings,

    #[serde(default)]
    pub hook: HookSettings,
}

fn default_true() -> bool {
    true
}

fn default_interval() -> Duration {
    DEFAULT_INTERVAL
}

fn default_delay() -> Duration {
    DEFAULT_DELAY
}

impl Config {
    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> MirrorResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Apply environment variable overrides (MIRRORWATCH_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Merge CLI overrides and produce the runtime configuration.
    pub fn resolve(self, overrides: ConfigOverrides) -> WatchConfig {
        WatchConfig {
            roots: overrides.roots,
            mirror_dir: overrides.mirror_dir,
            recurse: if overrides.no_recurse {
                false
            } else {
                self.watch.recurse
            },
            halt_on_error: overrides.halt_on_error || self.watch.halt_on_error,
            quiet: overrides.quiet || self.output.quiet,
            json: overrides.json || self.output.json,
            color: overrides.color.unwrap_or(self.output.color),
            interval: overrides.interval.unwrap_or(self.watch.interval),
            delay: overrides.delay.unwrap_or(self.mirror.delay),
            on_change: overrides
                .on_change
                .or(self.hook.on_change)
                .filter(|cmd| !cmd.trim().is_empty()),
        }
    }
}

/// Values supplied on the command line; `None`/`false` defers to the file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub roots: Vec<PathBuf>,
    pub mirror_dir: Option<PathBuf>,
    pub no_recurse: bool,
    pub halt_on_error: bool,
    pub quiet: bool,
    pub json: bool,
    pub color: Option<ColorMode>,
    pub interval: Option<Duration>,
    pub delay: Option<Duration>,
    pub on_change: Option<String>,
}

/// Runtime configuration, built once at startup and passed by reference.
#[derive(Debug, Clone)]
pub struct WatchConfig {
    /// Root arguments as given by the user
    pub roots: Vec<PathBuf>,
    /// Mirror directory, if one was supplied
    pub mirror_dir: Option<PathBuf>,
    pub recurse: bool,
    pub halt_on_error: bool,
    pub quiet: bool,
    pub json: bool,
    pub color: ColorMode,
    /// Hook throttle window
    pub interval: Duration,
    /// Quiescence delay before copying
    pub delay: Duration,
    pub on_change: Option<String>,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Config::default().resolve(ConfigOverrides::default())
    }
}

impl WatchConfig {
    /// Convenience constructor used by tests and embedders.
    pub fn new(roots: Vec<PathBuf>, mirror_dir: Option<PathBuf>) -> Self {
        Self {
            roots,
            mirror_dir,
            ..Self::default()
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_recurse(mut self, recurse: bool) -> Self {
        self.recurse = recurse;
        self
    }

    pub fn with_halt_on_error(mut self, halt: bool) -> Self {
        self.halt_on_error = halt;
        self
    }

    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    pub fn with_on_change(mut self, command: Option<String>) -> Self {
        self.on_change = command;
        self
    }
}
