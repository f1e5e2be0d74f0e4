use doxy::config::ConfigWarning;
use doxy::DoxyError;

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn format_error(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    let mut out = format!(
        "{} {}\n",
        Icon::Error.colored(supports_color, supports_unicode),
        ColoredText::error(err.to_string()).bold().render(supports_color)
    );

    for cause in err.chain().skip(1) {
        out.push_str(&format!(
            "  {} {}\n",
            Icon::Arrow.colored(supports_color, supports_unicode),
            cause
        ));
    }

    if let Some(hint) = err.downcast_ref::<DoxyError>().and_then(hint_for) {
        out.push_str(&format!(
            "  {}\n",
            ColoredText::dim(format!("hint: {}", hint)).render(supports_color)
        ));
    }
    out
}

fn hint_for(err: &DoxyError) -> Option<String> {
    match err {
        DoxyError::RootNotFound { .. } => Some(
            "set root_directory in the config file, DOXY_ROOT_DIRECTORY, or pass --root"
                .to_string(),
        ),
        DoxyError::ServiceNotFound { .. } => {
            Some("run 'doxy list --all' to see the available services".to_string())
        }
        DoxyError::ConflictingDescriptors { disabled, .. } => Some(format!(
            "delete or rename {} if the service should be enabled",
            disabled.display()
        )),
        DoxyError::ConfigNotFound { .. } => Some(format!(
            "drop --config to use ${} or the default location",
            doxy::config::CONFIG_ENV
        )),
        DoxyError::Spawn { program, .. } => Some(format!(
            "is '{}' installed? set compose_executable or DOXY_COMPOSE_EXECUTABLE",
            program
        )),
        _ => None,
    }
}

/// Print `err` with the run's colour and glyph settings.
pub fn print_error(err: &anyhow::Error, ui: &UiContext) {
    eprint!("{}", format_error(err, ui.color, ui.unicode));
}

pub fn format_config_warning(
    warning: &ConfigWarning,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let location = match warning.line {
        Some(line) => format!("{}:{}", warning.file.display(), line),
        None => warning.file.display().to_string(),
    };
    let mut out = format!(
        "{} unknown config key '{}' in {}",
        Icon::Warning.colored(supports_color, supports_unicode),
        warning.key,
        location
    );
    if let Some(suggestion) = &warning.suggestion {
        out.push_str(&format!(
            " ({})",
            ColoredText::warning(format!("did you mean '{}'?", suggestion)).render(supports_color)
        ));
    }
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_format_plain_error() {
        let err = anyhow::anyhow!("Generic error message");
        let rendered = format_error(&err, false, false);
        assert_eq!(rendered, "[ERROR] Generic error message\n");
    }

    #[test]
    fn test_format_service_not_found_has_hint() {
        let err = anyhow::Error::from(DoxyError::ServiceNotFound {
            name: "grafana".to_string(),
        });
        let rendered = format_error(&err, false, true);
        assert!(rendered.starts_with("✗ service 'grafana' not found\n"));
        assert!(rendered.contains("hint: run 'doxy list --all'"));
    }

    #[test]
    fn test_format_context_chain() {
        let err = anyhow::Error::from(DoxyError::RootNotFound {
            path: PathBuf::from("/srv/missing"),
        })
        .context("cannot list services");
        let rendered = format_error(&err, false, false);
        assert!(rendered.starts_with("[ERROR] cannot list services\n"));
        assert!(rendered.contains("  -> root directory not found: /srv/missing\n"));
    }

    #[test]
    fn test_format_with_color_support() {
        let err = anyhow::anyhow!("boom");
        assert!(format_error(&err, true, true).contains("\u{1b}["));
        assert!(!format_error(&err, false, true).contains("\u{1b}["));
    }

    #[test]
    fn test_format_config_not_found_has_hint() {
        let err = anyhow::Error::from(DoxyError::ConfigNotFound {
            path: PathBuf::from("/tmp/nope.toml"),
        });
        let rendered = format_error(&err, false, false);
        assert!(rendered.starts_with("[ERROR] config file not found: /tmp/nope.toml\n"));
        assert!(rendered.contains("hint: drop --config to use $DOXY_CONFIG"));
    }

    #[test]
    fn test_config_warning_with_suggestion() {
        let warning = ConfigWarning {
            key: "colour".to_string(),
            file: PathBuf::from("/home/u/.config/doxy/config.toml"),
            line: Some(3),
            suggestion: Some("color".to_string()),
        };
        assert_eq!(
            format_config_warning(&warning, false, false),
            "[WARN] unknown config key 'colour' in /home/u/.config/doxy/config.toml:3 (did you mean 'color'?)\n"
        );
    }
}
