//! CLI Argument Parsing
//!
//! Durations stay strings here and are parsed by the command so that a bad
//! value exits with status 1 rather than clap's usage status.

use std::path::PathBuf;

use clap::Parser;
use mirrorwatch::config::ColorMode;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

impl From<ColorWhen> for ColorMode {
    fn from(when: ColorWhen) -> Self {
        match when {
            ColorWhen::Auto => ColorMode::Auto,
            ColorWhen::Always => ColorMode::Always,
            ColorWhen::Never => ColorMode::Never,
        }
    }
}

/// Watch a directory tree and mirror new or finished files into a shadow tree
#[derive(Parser, Debug)]
#[command(name = "watch")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Files are copied to <MIRROR_DIR>/<full source path> after --delay.")]
pub struct Cli {
    /// Directory (or file) to watch
    pub path: Option<PathBuf>,

    /// Directory that receives mirrored copies
    pub mirror_dir: Option<PathBuf>,

    /// Exit on the first copy or watcher error
    #[arg(long)]
    pub halt: bool,

    /// Only print errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Minimum time between on-change command runs (e.g. 500ms, 2s)
    #[arg(short, long, value_name = "DURATION")]
    pub interval: Option<String>,

    /// Watch only the given directory, not its subdirectories
    #[arg(short = 'n', long)]
    pub no_recurse: bool,

    /// Delay before a changed file is copied (e.g. 10s, 1m)
    #[arg(short, long, value_name = "DURATION")]
    pub delay: Option<String>,

    /// Command to run after mirrored changes
    #[arg(long, value_name = "COMMAND")]
    pub on_change: Option<String>,

    /// Output events as NDJSON
    #[arg(long)]
    pub json: bool,

    /// Colored output
    #[arg(long, value_enum)]
    pub color: Option<ColorWhen>,

    /// Config file (defaults to ./mirrorwatch.toml, then the user config dir)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}
