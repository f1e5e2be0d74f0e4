//! `doxy edit`, `doxy enable`, `doxy disable`

use std::path::Path;
use std::process::Command;

use anyhow::{anyhow, bail, Context, Result};
use tracing::debug;

use doxy::presentation::ConcreteServiceUseCase;
use doxy::{DoxyError, ListScope, ServiceState};

use super::picker::resolve_service;
use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

const FALLBACK_EDITOR: &str = "vi";

pub fn cmd_edit(
    use_case: &ConcreteServiceUseCase,
    service: Option<String>,
) -> Result<()> {
    let name = resolve_service(service, use_case, ListScope::All, "edit")?;
    let descriptor = use_case.require_service(&name)?;

    let editor = editor_from(|key| std::env::var(key).ok());
    let status = open_in_editor(&editor, &descriptor)?;
    if !status {
        bail!("editor '{}' exited with an error", editor);
    }
    Ok(())
}

pub fn cmd_enable(
    use_case: &ConcreteServiceUseCase,
    ui: &UiContext,
    service: Option<String>,
) -> Result<()> {
    let name = resolve_service(service, use_case, ListScope::Disabled, "enable")?;
    toggle(use_case, ui, &name, ServiceState::Enabled)
}

pub fn cmd_disable(
    use_case: &ConcreteServiceUseCase,
    ui: &UiContext,
    service: Option<String>,
) -> Result<()> {
    let name = resolve_service(service, use_case, ListScope::Enabled, "disable")?;
    toggle(use_case, ui, &name, ServiceState::Disabled)
}

fn toggle(
    use_case: &ConcreteServiceUseCase,
    ui: &UiContext,
    name: &str,
    target: ServiceState,
) -> Result<()> {
    // Separates "no such service" from "already in the target state".
    use_case.require_service(name)?;

    let result = match target {
        ServiceState::Enabled => use_case.enable(name),
        ServiceState::Disabled => use_case.disable(name),
    };
    let descriptor = result.map_err(|e| match e {
        DoxyError::NotFound { .. } => anyhow!("service '{}' is already {}", name, target),
        other => anyhow::Error::new(other),
    })?;
    debug!(descriptor = %descriptor.display(), "descriptor renamed");

    if ui.is_fancy() {
        println!(
            "{} {} {}",
            Icon::Success.colored(ui.color, ui.unicode),
            ColoredText::info(name).bold().render(ui.color),
            target
        );
    }
    Ok(())
}

/// `$VISUAL`, then `$EDITOR`, then `vi`.
fn editor_from(get_env: impl Fn(&str) -> Option<String>) -> String {
    ["VISUAL", "EDITOR"]
        .iter()
        .filter_map(|key| get_env(key))
        .find(|value| !value.trim().is_empty())
        .unwrap_or_else(|| FALLBACK_EDITOR.to_string())
}

/// Run the editor on `file`; the editor value may carry its own arguments.
fn open_in_editor(editor: &str, file: &Path) -> Result<bool> {
    let mut parts = editor.split_whitespace();
    let program = parts.next().unwrap_or(FALLBACK_EDITOR);
    let mut args: Vec<String> = parts.map(|s| s.to_string()).collect();
    args.push(file.display().to_string());

    debug!(program, ?args, "opening editor");
    let status = Command::new(program)
        .args(&args)
        .status()
        .with_context(|| format!("failed to start editor '{}'", program))?;
    Ok(status.success())
}
