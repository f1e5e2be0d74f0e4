//! Interactive service selection
//!
//! Used when a verb that needs a SERVICE is invoked without one.

use anyhow::{bail, Result};
use dialoguer::theme::ColorfulTheme;
use dialoguer::FuzzySelect;
use is_terminal::IsTerminal;

use doxy::presentation::ConcreteServiceUseCase;
use doxy::ListScope;

/// Return `explicit`, or let the user pick from the services in `scope`.
pub fn resolve_service(
    explicit: Option<String>,
    use_case: &ConcreteServiceUseCase,
    scope: ListScope,
    verb: &str,
) -> Result<String> {
    if let Some(name) = explicit {
        return Ok(name);
    }

    if !std::io::stdin().is_terminal() || !std::io::stderr().is_terminal() {
        bail!("no service given for '{}' (pass SERVICE; not prompting without a terminal)", verb);
    }

    let names = use_case.names(scope)?;
    if names.is_empty() {
        let kind = match scope {
            ListScope::Disabled => "disabled ",
            ListScope::Enabled => "enabled ",
            ListScope::All => "",
        };
        bail!(
            "no {}services under {}",
            kind,
            use_case.root().display()
        );
    }

    let selection = FuzzySelect::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("Service to {}", verb))
        .items(&names)
        .default(0)
        .interact_opt()?;

    match selection {
        Some(index) => Ok(names[index].clone()),
        None => bail!("no service selected"),
    }
}
