//! `doxy control`, `doxy update`, `doxy status`, `doxy start-all`
//!
//! Compose output goes straight to the terminal. Step headers are printed
//! on stdout before each step; failures are reported on stderr. A failing
//! compose step never makes doxy itself fail.

use std::io::Write;

use anyhow::Result;

use doxy::application::{CompositeResult, StartAllResult};
use doxy::domain::ports::{ServiceEvent, ServiceEventSink};
use doxy::presentation::{ConcreteServiceUseCase, Renderer};
use doxy::{ListScope, StatusOptions, UpdateOptions};

use super::picker::resolve_service;
use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Prints a header per step and a warning per failed step
struct TerminalSink {
    renderer: Renderer,
    color: bool,
    unicode: bool,
}

impl TerminalSink {
    fn new(ui: &UiContext) -> Self {
        Self {
            renderer: ui.renderer(),
            color: ui.color,
            unicode: ui.unicode,
        }
    }

    fn warn(&self, message: String) {
        eprintln!(
            "{} {}",
            Icon::Warning.colored(self.color, self.unicode),
            ColoredText::warning(message).render(self.color)
        );
    }
}

impl ServiceEventSink for TerminalSink {
    fn on_event(&self, event: ServiceEvent) {
        match event {
            ServiceEvent::StepStarted { service, label } => {
                let mut stdout = std::io::stdout().lock();
                let _ = write!(
                    stdout,
                    "{}",
                    self.renderer.header(&format!("{}: {}", service, label))
                );
                // The child shares our stdout; the header must land first.
                let _ = stdout.flush();
            }
            ServiceEvent::StepFinished {
                service,
                label,
                outcome,
            } if !outcome.success => {
                self.warn(format!("{}: {} failed ({})", service, label, outcome));
            }
            ServiceEvent::StepFinished { .. } => {}
            ServiceEvent::ServiceFailed { service, error } => {
                self.warn(format!("{}: {}", service, error));
            }
        }
    }
}

pub fn cmd_control(
    use_case: &ConcreteServiceUseCase,
    ui: &UiContext,
    service: Option<String>,
    args: &[String],
) -> Result<()> {
    let name = resolve_service(service, use_case, ListScope::Enabled, "control")?;
    let outcome = use_case.control(&name, args)?;
    if !outcome.success {
        TerminalSink::new(ui).warn(format!("{}: compose {}", name, outcome));
    }
    Ok(())
}

pub fn cmd_update(
    use_case: &ConcreteServiceUseCase,
    ui: &UiContext,
    service: Option<String>,
    remove: bool,
    no_stop: bool,
) -> Result<()> {
    let name = resolve_service(service, use_case, ListScope::Enabled, "update")?;
    let options = UpdateOptions {
        remove,
        stop_first: !no_stop,
    };
    let result = use_case.update(&name, &options, &TerminalSink::new(ui))?;
    print_composite_summary(ui, "updated", &result);
    Ok(())
}

pub fn cmd_status(
    use_case: &ConcreteServiceUseCase,
    ui: &UiContext,
    service: Option<String>,
    lines: usize,
) -> Result<()> {
    let name = resolve_service(service, use_case, ListScope::Enabled, "inspect")?;
    let options = StatusOptions { log_lines: lines };
    use_case.status(&name, &options, &TerminalSink::new(ui))?;
    Ok(())
}

pub fn cmd_start_all(use_case: &ConcreteServiceUseCase, ui: &UiContext) -> Result<()> {
    let result = use_case.start_all(&TerminalSink::new(ui))?;
    print_start_all_summary(ui, &result);
    Ok(())
}

fn print_composite_summary(ui: &UiContext, verb: &str, result: &CompositeResult) {
    if !ui.is_fancy() {
        return;
    }
    let name = ColoredText::info(result.service.as_str())
        .bold()
        .render(ui.color);
    if result.is_success() {
        println!("{} {} {}", Icon::Success.colored(ui.color, ui.unicode), name, verb);
    } else {
        let failed: Vec<&str> = result.failed_steps().map(|s| s.label).collect();
        println!(
            "{} {} {} with failed steps: {}",
            Icon::Warning.colored(ui.color, ui.unicode),
            name,
            verb,
            failed.join(", ")
        );
    }
}

fn print_start_all_summary(ui: &UiContext, result: &StartAllResult) {
    if !ui.is_fancy() {
        return;
    }
    let icon = if result.is_success() {
        Icon::Success
    } else {
        Icon::Warning
    };
    println!(
        "{} started {} of {} services",
        icon.colored(ui.color, ui.unicode),
        result.started.len(),
        result.total()
    );
    for (name, reason) in &result.failed {
        println!(
            "  {} {} {}",
            Icon::Error.colored(ui.color, ui.unicode),
            name,
            ColoredText::dim(format!("({})", reason)).render(ui.color)
        );
    }
}
