use mirrorwatch::application::watch::WatchEvent;
use mirrorwatch::config::{format_duration, WatchConfig};
use mirrorwatch::error::MirrorError;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_watch_header(
    config: &WatchConfig,
    root_count: usize,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Watch, "Mirrorwatch");
    let roots = config
        .roots
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ");
    header.add("Watching", format!("{roots} ({root_count} dirs)"));
    header.add(
        "Mirror",
        config
            .mirror_dir
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(none)".to_string()),
    );
    header.add("Delay", format_duration(config.delay));
    if let Some(cmd) = &config.on_change {
        header.add(
            "On change",
            format!("{} (at most every {})", cmd, format_duration(config.interval)),
        );
    }
    header.add("Hint", "Press Ctrl+C to stop");
    header.render(supports_color, supports_unicode)
}

pub fn render_watch_event(
    timestamp: &str,
    event: &WatchEvent,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let prefix = ColoredText::dim(format!("[{}]", timestamp)).render(supports_color);
    let icon = |icon: Icon| icon.colored(supports_color, supports_unicode);

    match event {
        WatchEvent::WatchStarted { roots, .. } => format!(
            "{} {} Watching {} path{}\n",
            prefix,
            icon(Icon::Watch),
            roots.len(),
            if roots.len() == 1 { "" } else { "s" }
        ),
        WatchEvent::MirrorUnavailable { path } => match path {
            Some(path) => format!(
                "{} {} {} (changes are logged only)\n",
                prefix,
                icon(Icon::Warning),
                MirrorError::MirrorDirUnavailable { path: path.into() }
            ),
            None => format!(
                "{} {} No mirror directory given (changes are logged only)\n",
                prefix,
                icon(Icon::Warning)
            ),
        },
        WatchEvent::FileChanged { path, kind } => format!(
            "{} {} {} {}\n",
            prefix,
            icon(Icon::Arrow),
            kind,
            path
        ),
        WatchEvent::DirectoryCreated { destination, .. } => format!(
            "{} {} Created dir {}\n",
            prefix,
            icon(Icon::Folder),
            destination
        ),
        WatchEvent::DirectoryExists { destination } => format!(
            "{} {} Dir exists {}\n",
            prefix,
            icon(Icon::Folder),
            destination
        ),
        WatchEvent::CopyScheduled {
            source,
            destination,
            delay_ms,
        } => format!(
            "{} {} Copy {} -> {} in {}\n",
            prefix,
            icon(Icon::Pending),
            source,
            destination,
            format_duration(std::time::Duration::from_millis(*delay_ms))
        ),
        WatchEvent::CopyCompleted {
            destination, bytes, ..
        } => format!(
            "{} {} Copied {} ({} bytes)\n",
            prefix,
            icon(Icon::Success),
            destination,
            bytes
        ),
        WatchEvent::CopySkipped { source } => format!(
            "{} {} Skipped {} (no longer a file)\n",
            prefix,
            icon(Icon::Warning),
            source
        ),
        WatchEvent::HookStarted { command, pid } => format!(
            "{} {} Ran {} (pid {})\n",
            prefix,
            icon(Icon::Hook),
            command,
            pid
        ),
        WatchEvent::Error { message } => format!(
            "{} {} Error: {}\n",
            prefix,
            icon(Icon::Error),
            message
        ),
        WatchEvent::Shutdown { cancelled_copies } => {
            let suffix = if *cancelled_copies > 0 {
                format!(" ({} pending copies cancelled)", cancelled_copies)
            } else {
                String::new()
            };
            format!(
                "\n{} {} Watch stopped.{}\n",
                prefix,
                icon(Icon::Watch),
                suffix
            )
        }
    }
}
