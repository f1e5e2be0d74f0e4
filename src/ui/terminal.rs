//! What the attached terminal can show.

use is_terminal::IsTerminal;

/// Width assumed when stdout is not a terminal
const FALLBACK_WIDTH: u16 = 80;

/// Variables whose presence means a CI runner
const CI_MARKERS: &[&str] = &["CI", "GITHUB_ACTIONS", "GITLAB_CI", "BUILDKITE", "JENKINS_HOME"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCapabilities {
    pub supports_color: bool,
    pub supports_unicode: bool,
    pub is_ci: bool,
    pub width: u16,
}

pub fn detect_capabilities() -> TerminalCapabilities {
    let stdout = std::io::stdout();
    let size = crossterm::terminal::size().ok().map(|(cols, _)| cols);
    capabilities_from(|key| std::env::var(key).ok(), stdout.is_terminal(), size)
}

fn capabilities_from(
    env: impl Fn(&str) -> Option<String>,
    stdout_is_tty: bool,
    columns: Option<u16>,
) -> TerminalCapabilities {
    let set = |key: &str| env(key).filter(|v| !v.is_empty());
    let dumb = set("TERM").is_some_and(|t| t.eq_ignore_ascii_case("dumb"));

    // The first locale variable that is set wins, as in libc.
    let utf8_locale = ["LC_ALL", "LC_CTYPE", "LANG"]
        .iter()
        .find_map(|key| set(*key))
        .map_or(true, |locale| {
            let locale = locale.to_ascii_lowercase();
            locale.contains("utf-8") || locale.contains("utf8")
        });

    TerminalCapabilities {
        supports_color: stdout_is_tty && !dumb && set("NO_COLOR").is_none(),
        supports_unicode: !dumb && utf8_locale,
        is_ci: CI_MARKERS.iter().any(|key| env(key).is_some()),
        width: columns
            .filter(|&cols| stdout_is_tty && cols > 0)
            .unwrap_or(FALLBACK_WIDTH),
    }
}
