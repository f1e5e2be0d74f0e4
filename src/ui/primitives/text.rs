use std::fmt;

use crossterm::style::Stylize;

use crate::ui::theme::Tone;

/// A message fragment with a tone, styled only when colour is on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColoredText {
    text: String,
    tone: Tone,
    bold: bool,
}

impl ColoredText {
    pub fn new(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
            bold: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(text, Tone::Error)
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(text, Tone::Warning)
    }

    /// Service names and other subjects of a message.
    pub fn info(text: impl Into<String>) -> Self {
        Self::new(text, Tone::Info)
    }

    pub fn dim(text: impl Into<String>) -> Self {
        Self::new(text, Tone::Muted)
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn render(&self, color: bool) -> String {
        if !color {
            return self.text.clone();
        }
        let styled = self.text.as_str().with(self.tone.color());
        if self.bold {
            styled.bold().to_string()
        } else {
            styled.to_string()
        }
    }
}

/// Plain text, for logs and tests.
impl fmt::Display for ColoredText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
