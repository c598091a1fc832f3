use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};
use mirrorwatch::application::resolver::PathResolver;
use mirrorwatch::application::watch::{WatchEvent, WatchLoop};
use mirrorwatch::config::{discover, parse_duration, ConfigOverrides, LoadedConfig, WatchConfig};
use mirrorwatch::error::MirrorError;
use mirrorwatch::infrastructure::events::{JsonEventSink, NotifyEventSource};

use crate::cli::Cli;
use crate::ui::context::UiContext;
use crate::ui::output::print_config_warnings;

/// Merge CLI flags over the discovered config file and environment
fn load_config(cli: &Cli) -> Result<(WatchConfig, LoadedConfig)> {
    let cwd = std::env::current_dir().context("failed to read current directory")?;
    let loaded = discover(cli.config.as_deref(), &cwd)?;

    let interval = cli.interval.as_deref().map(parse_duration).transpose()?;
    let delay = cli.delay.as_deref().map(parse_duration).transpose()?;

    let overrides = ConfigOverrides {
        roots: cli.path.iter().cloned().collect(),
        mirror_dir: cli.mirror_dir.clone(),
        no_recurse: cli.no_recurse,
        halt_on_error: cli.halt,
        quiet: cli.quiet,
        json: cli.json,
        color: cli.color.map(Into::into),
        interval,
        delay,
        on_change: cli.on_change.clone(),
    };
    let config = loaded.config.clone().with_env_overrides().resolve(overrides);

    Ok((config, loaded))
}

pub fn cmd_watch(cli: &Cli) -> Result<i32> {
    let (config, loaded) = load_config(cli)?;
    let ui = UiContext::new(config.json, config.quiet, config.color);

    if let Some(source) = &loaded.source {
        if !loaded.warnings.is_empty() && !ui.json {
            print_config_warnings(source, &loaded.warnings, ui.color, ui.unicode);
        }
    }

    let roots = PathResolver::new(config.recurse).resolve(&config.roots)?;
    if roots.is_empty() {
        return Err(MirrorError::NoWatchPaths.into());
    }

    let source = NotifyEventSource::new()?;
    let mut watch = WatchLoop::new(config.clone(), source);
    watch.register(&roots)?;

    // Set up Ctrl+C handler
    let running = Arc::new(AtomicBool::new(true));
    let running_clone = running.clone();
    ctrlc::set_handler(move || {
        running_clone.store(false, Ordering::SeqCst);
    })
    .context("failed to install Ctrl+C handler")?;

    if !ui.json && !ui.quiet {
        print!(
            "{}",
            crate::ui::views::watch::render_watch_header(&config, roots.len(), ui.color, ui.unicode)
        );
    }

    let json_sink = ui.json.then(JsonEventSink::stdout);
    let outcome = watch.run(&running, |event| {
        if ui.quiet && !event.is_error() {
            return;
        }
        if let Some(sink) = &json_sink {
            sink.emit(&event);
            return;
        }

        let timestamp = chrono::Local::now().format("%H:%M:%S").to_string();
        let rendered =
            crate::ui::views::watch::render_watch_event(&timestamp, &event, ui.color, ui.unicode);
        match event {
            WatchEvent::Error { .. } | WatchEvent::MirrorUnavailable { .. } => eprint!("{rendered}"),
            _ => print!("{rendered}"),
        }
    });

    Ok(outcome.exit_code())
}
