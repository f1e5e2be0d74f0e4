//! Output Rendering
//!
//! Renders service listings and step headers for the configured
//! [`OutputFormat`]. Renderers return strings; printing is left to the
//! caller.

use crossterm::style::Stylize;
use unicode_width::UnicodeWidthStr;

use crate::config::OutputFormat;
use crate::domain::entities::Service;

/// Glyphs used to draw rules and trees
struct Glyphs {
    rule: &'static str,
    branch: &'static str,
    last: &'static str,
}

impl Glyphs {
    fn unicode() -> Self {
        Self {
            rule: "─",
            branch: "├─ ",
            last: "└─ ",
        }
    }

    fn ascii() -> Self {
        Self {
            rule: "-",
            branch: "|- ",
            last: "`- ",
        }
    }
}

/// Rules and trees, for people
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FancyRenderer {
    /// Whether to use colors
    pub color: bool,
    /// Whether to use unicode
    pub unicode: bool,
    /// Terminal width used for rules
    pub width: usize,
}

impl Default for FancyRenderer {
    fn default() -> Self {
        Self {
            color: true,
            unicode: true,
            width: 80,
        }
    }
}

impl FancyRenderer {
    fn glyphs(&self) -> Glyphs {
        if self.unicode {
            Glyphs::unicode()
        } else {
            Glyphs::ascii()
        }
    }

    fn dim(&self, text: &str) -> String {
        if self.color {
            format!("{}", text.dark_grey())
        } else {
            text.to_string()
        }
    }

    /// `── title ─────…` padded to the terminal width.
    pub fn header(&self, title: &str) -> String {
        let glyphs = self.glyphs();
        let lead = glyphs.rule.repeat(2);
        let used = 2 + 1 + title.width() + 1;
        let tail = glyphs.rule.repeat(self.width.saturating_sub(used).max(2));

        let title = if self.color {
            format!("{}", title.cyan().bold())
        } else {
            title.to_string()
        };
        format!("{} {} {}\n", self.dim(&lead), title, self.dim(&tail))
    }

    pub fn services(&self, services: &[Service]) -> String {
        if services.is_empty() {
            return format!("{}\n", self.dim("no services found"));
        }

        let glyphs = self.glyphs();
        let mut out = String::new();
        for service in services {
            let name = if self.color {
                format!("{}", service.name().bold())
            } else {
                service.name().to_string()
            };
            out.push_str(&name);
            if !service.state().is_enabled() {
                out.push(' ');
                out.push_str(&self.dim("(disabled)"));
            }
            out.push('\n');

            let subs = service.sub_services().unwrap_or_default();
            for (i, sub) in subs.iter().enumerate() {
                let glyph = if i + 1 == subs.len() {
                    glyphs.last
                } else {
                    glyphs.branch
                };
                out.push_str(&self.dim(glyph));
                out.push_str(sub);
                out.push('\n');
            }
        }
        out
    }
}

/// One service per line, for scripts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SimpleRenderer;

impl SimpleRenderer {
    pub fn header(&self, _title: &str) -> String {
        String::new()
    }

    /// `name`, or `name<TAB>sub1,sub2` when sub-services were loaded.
    pub fn services(&self, services: &[Service]) -> String {
        let mut out = String::new();
        for service in services {
            out.push_str(service.name());
            if let Some(subs) = service.sub_services() {
                out.push('\t');
                out.push_str(&subs.join(","));
            }
            out.push('\n');
        }
        out
    }
}

/// Renderer selected once from the output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Renderer {
    Fancy(FancyRenderer),
    Simple(SimpleRenderer),
}

impl Renderer {
    pub fn new(format: OutputFormat, color: bool, unicode: bool, width: usize) -> Self {
        match format {
            OutputFormat::Fancy => Renderer::Fancy(FancyRenderer {
                color,
                unicode,
                width,
            }),
            OutputFormat::Simple => Renderer::Simple(SimpleRenderer),
        }
    }

    pub fn format(&self) -> OutputFormat {
        match self {
            Renderer::Fancy(_) => OutputFormat::Fancy,
            Renderer::Simple(_) => OutputFormat::Simple,
        }
    }

    /// Section header; empty for the simple format.
    pub fn header(&self, title: &str) -> String {
        match self {
            Renderer::Fancy(r) => r.header(title),
            Renderer::Simple(r) => r.header(title),
        }
    }

    pub fn services(&self, services: &[Service]) -> String {
        match self {
            Renderer::Fancy(r) => r.services(services),
            Renderer::Simple(r) => r.services(services),
        }
    }
}
