//! watch - mirror new and finished files into a shadow directory tree
//!
//! Usage: watch [OPTIONS] <PATH> [MIRROR_DIR]

mod cli;
mod commands;
mod ui;

use clap::{CommandFactory, Parser};
use mirrorwatch::error::{MirrorError, EXIT_FAILURE};

use crate::cli::Cli;

fn main() {
    if std::env::args_os().len() <= 1 {
        let _ = Cli::command().print_help();
        std::process::exit(0);
    }

    let cli = Cli::parse();

    let code = match commands::watch::cmd_watch(&cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            err.downcast_ref::<MirrorError>()
                .map(MirrorError::exit_code)
                .unwrap_or(EXIT_FAILURE)
        }
    };
    std::process::exit(code);
}
