//! `doxy list`

use anyhow::{Context, Result};

use doxy::presentation::ConcreteServiceUseCase;
use doxy::ListScope;

use crate::ui::context::UiContext;

pub fn cmd_list(
    use_case: &ConcreteServiceUseCase,
    ui: &UiContext,
    sub_services: bool,
    disabled: bool,
    all: bool,
) -> Result<()> {
    let scope = scope_for(disabled, all);
    let services = use_case
        .list(scope, sub_services)
        .context("cannot list services")?;

    let renderer = ui.renderer();
    let title = match scope {
        ListScope::Enabled => "Services",
        ListScope::Disabled => "Disabled services",
        ListScope::All => "All services",
    };
    print!("{}", renderer.header(&format!("{} ({})", title, services.len())));
    print!("{}", renderer.services(&services));
    Ok(())
}

fn scope_for(disabled: bool, all: bool) -> ListScope {
    if all {
        ListScope::All
    } else if disabled {
        ListScope::Disabled
    } else {
        ListScope::Enabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_select_scope() {
        assert_eq!(scope_for(false, false), ListScope::Enabled);
        assert_eq!(scope_for(true, false), ListScope::Disabled);
        assert_eq!(scope_for(false, true), ListScope::All);
    }
}
