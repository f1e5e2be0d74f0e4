//! Colours and glyphs for doxy's own messages.
//!
//! Compose output is never restyled; this only covers the lines doxy
//! prints around it.

use crossterm::style::Color;

/// What a message means, mapped to one colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Error,
    Warning,
    Info,
    Muted,
}

impl Tone {
    pub fn color(self) -> Color {
        match self {
            Tone::Success => Color::Green,
            Tone::Error => Color::Red,
            Tone::Warning => Color::Yellow,
            Tone::Info => Color::Cyan,
            Tone::Muted => Color::DarkGrey,
        }
    }
}

/// `(unicode, ascii)` glyph pairs
pub mod glyphs {
    pub const DONE: (&str, &str) = ("✓", "[OK]");
    pub const FAILED: (&str, &str) = ("✗", "[ERROR]");
    pub const CAUTION: (&str, &str) = ("⚠", "[WARN]");
    pub const CAUSE: (&str, &str) = ("↳", "->");
}
