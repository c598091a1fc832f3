use std::path::Path;

use mirrorwatch::config::ConfigWarning;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Render unknown-key warnings for a loaded config file
pub fn render_config_warnings(
    path: &Path,
    warnings: &[ConfigWarning],
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let icon = Icon::Warning.colored(supports_color, supports_unicode);
    let mut out = String::new();
    for w in warnings {
        let location = match w.line {
            Some(line) => format!("{}:{}", path.display(), line),
            None => path.display().to_string(),
        };
        out.push_str(&format!(
            "{} Unknown config key '{}' in {}\n",
            icon, w.key, location
        ));
        if let Some(suggestion) = &w.suggestion {
            let hint = format!("Did you mean '{}'?", suggestion);
            out.push_str(&format!("   {}\n", ColoredText::dim(hint).render(supports_color)));
        }
    }
    out
}

pub fn print_config_warnings(path: &Path, warnings: &[ConfigWarning], color: bool, unicode: bool) {
    eprint!("{}", render_config_warnings(path, warnings, color, unicode));
}
