use doxy::config::{ColorMode, Config, OutputFormat};
use doxy::presentation::Renderer;

use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub caps: TerminalCapabilities,
    pub color: bool,
    pub unicode: bool,
    pub format: OutputFormat,
}

impl UiContext {
    pub fn new(config: &Config) -> Self {
        Self::from_caps(config, detect_capabilities())
    }

    pub(crate) fn from_caps(config: &Config, caps: TerminalCapabilities) -> Self {
        let color = match config.output.color {
            ColorMode::Never => false,
            ColorMode::Always => true,
            ColorMode::Auto => caps.supports_color && !caps.is_ci,
        };

        Self {
            caps,
            color,
            unicode: caps.supports_unicode,
            format: config.output.format,
        }
    }

    pub fn renderer(&self) -> Renderer {
        Renderer::new(
            self.format,
            self.color,
            self.unicode,
            usize::from(self.caps.width),
        )
    }

    pub fn is_fancy(&self) -> bool {
        self.format == OutputFormat::Fancy
    }
}
