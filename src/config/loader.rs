//! Configuration discovery, loading and environment overrides

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{MirrorError, MirrorResult};

use super::duration::parse_duration;
use super::types::Config;

/// File name looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "mirrorwatch.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> MirrorResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| MirrorError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Result of config discovery
#[derive(Debug, Default)]
pub struct LoadedConfig {
    pub config: Config,
    pub warnings: Vec<ConfigWarning>,
    /// File the config came from, `None` for built-in defaults
    pub source: Option<PathBuf>,
}

/// Find and load the config file.
///
/// An explicit path must exist and parse. Otherwise `./mirrorwatch.toml`,
/// then `<config_dir>/mirrorwatch/config.toml`, then defaults. Environment
/// overrides are applied in every case.
pub fn discover(explicit: Option<&Path>, cwd: &Path) -> MirrorResult<LoadedConfig> {
    let candidate = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => default_candidates(cwd).into_iter().find(|p| p.is_file()),
    };

    let Some(path) = candidate else {
        return Ok(LoadedConfig {
            config: with_env_overrides(Config::default()),
            ..LoadedConfig::default()
        });
    };

    let (config, warnings) = load_with_warnings(&path)?;
    Ok(LoadedConfig {
        config: with_env_overrides(config),
        warnings,
        source: Some(path),
    })
}

fn default_candidates(cwd: &Path) -> Vec<PathBuf> {
    let mut candidates = vec![cwd.join(PROJECT_CONFIG_FILE)];
    if let Some(dir) = dirs::config_dir() {
        candidates.push(dir.join("mirrorwatch").join("config.toml"));
    }
    candidates
}

/// Apply environment variable overrides (MIRRORWATCH_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_from(config, |key| std::env::var(key).ok())
}

pub(crate) fn with_env_overrides_from(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
) -> Config {
    if let Some(val) = get_env("MIRRORWATCH_QUIET") {
        config.output.quiet = is_truthy(&val);
    }

    if let Some(val) = get_env("MIRRORWATCH_HALT") {
        config.watch.halt_on_error = is_truthy(&val);
    }

    if let Some(val) = get_env("MIRRORWATCH_NO_RECURSE") {
        config.watch.recurse = !is_truthy(&val);
    }

    // Unparseable durations keep the file value
    if let Some(val) = get_env("MIRRORWATCH_DELAY") {
        if let Ok(delay) = parse_duration(&val) {
            config.mirror.delay = delay;
        }
    }

    if let Some(val) = get_env("MIRRORWATCH_INTERVAL") {
        if let Ok(interval) = parse_duration(&val) {
            config.watch.interval = interval;
        }
    }

    config
}

fn is_truthy(val: &str) -> bool {
    let v = val.trim().to_lowercase();
    !(v.is_empty() || v == "0" || v == "false" || v == "no" || v == "off")
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "watch",
        "recurse",
        "halt_on_error",
        "interval",
        "mirror",
        "delay",
        "output",
        "quiet",
        "json",
        "color",
        "hook",
        "on_change",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
