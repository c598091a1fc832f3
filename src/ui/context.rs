use mirrorwatch::config::ColorMode;

use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub quiet: bool,
    pub caps: TerminalCapabilities,
    pub color: bool,
    pub unicode: bool,
}

impl UiContext {
    pub fn new(json: bool, quiet: bool, color: ColorMode) -> Self {
        Self::from_caps(json, quiet, color, detect_capabilities())
    }

    pub(crate) fn from_caps(
        json: bool,
        quiet: bool,
        color: ColorMode,
        caps: TerminalCapabilities,
    ) -> Self {
        let color = match color {
            ColorMode::Never => false,
            ColorMode::Always => true,
            ColorMode::Auto => caps.supports_color && !caps.is_ci,
        };

        Self {
            json,
            quiet,
            caps,
            color: color && !json,
            unicode: caps.supports_unicode,
        }
    }
}
