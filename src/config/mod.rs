//! Configuration module for mirrorwatch
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (MIRRORWATCH_*)
//! 3. Config file (`--config`, `./mirrorwatch.toml`, or the user config dir)
//! 4. Built-in defaults (lowest priority)

mod duration;
mod loader;
mod types;

pub use duration::{format_duration, parse_duration, MAX_DURATION};
pub use loader::{discover, ConfigWarning, LoadedConfig, PROJECT_CONFIG_FILE};
pub use types::{
    ColorMode, Config, ConfigOverrides, HookSettings, MirrorSettings, OutputSettings,
    WatchConfig, WatchSettings, DEFAULT_DELAY, DEFAULT_INTERVAL,
};
