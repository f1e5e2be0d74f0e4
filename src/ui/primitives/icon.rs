use crossterm::style::Stylize;

use crate::ui::theme::{glyphs, Tone};

/// Leading marker of a status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    /// Prefix of a cause in an error chain
    Arrow,
}

impl Icon {
    fn glyph(self) -> (&'static str, &'static str) {
        match self {
            Icon::Success => glyphs::DONE,
            Icon::Error => glyphs::FAILED,
            Icon::Warning => glyphs::CAUTION,
            Icon::Arrow => glyphs::CAUSE,
        }
    }

    fn tone(self) -> Tone {
        match self {
            Icon::Success => Tone::Success,
            Icon::Error => Tone::Error,
            Icon::Warning => Tone::Warning,
            Icon::Arrow => Tone::Muted,
        }
    }

    pub fn render(self, unicode: bool) -> &'static str {
        let (fancy, plain) = self.glyph();
        if unicode {
            fancy
        } else {
            plain
        }
    }

    pub fn colored(self, color: bool, unicode: bool) -> String {
        let glyph = self.render(unicode);
        if color {
            glyph.with(self.tone().color()).to_string()
        } else {
            glyph.to_string()
        }
    }
}
