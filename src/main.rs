//! Doxy CLI - manage a directory of docker-compose services
//!
//! Usage: doxy [OPTIONS] <COMMAND>
//!
//! Commands:
//!   list       List enabled (or disabled, or all) services
//!   edit       Open a service's compose file in an editor
//!   enable     Enable a disabled service
//!   disable    Disable a service
//!   control    Run any compose command against a service
//!   update     Pull new images and restart a service
//!   status     Show images, containers, processes and logs
//!   start-all  Start every enabled service
//!   config     Print the effective configuration

mod commands;
mod ui;

use anyhow::Result;
use clap::Parser;
use is_terminal::IsTerminal;
use tracing_subscriber::EnvFilter;

use doxy::config::{self, Config, LoadedConfig};
use doxy::presentation::{create_service_use_case, Cli, Commands};

use crate::ui::context::UiContext;

/// Full filter directive, overrides -v
const LOG_ENV: &str = "DOXY_LOG";

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Flag-only settings until the config resolves.
    let mut ui = UiContext::new(&apply_flags(Config::default(), &cli));
    if let Err(err) = run(cli, &mut ui) {
        crate::ui::error::print_error(&err, &ui);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    let filter = match std::env::var(LOG_ENV) {
        Ok(directive) if !directive.trim().is_empty() => EnvFilter::new(directive),
        _ => EnvFilter::new(level_for(verbose)),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}

fn level_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn run(cli: Cli, ui: &mut UiContext) -> Result<()> {
    let LoadedConfig {
        config,
        source,
        warnings,
    } = config::resolve(cli.config.as_deref())?;
    let config = apply_flags(config, &cli);
    *ui = UiContext::new(&config);
    let ui = *ui;

    for warning in &warnings {
        eprint!(
            "{}",
            crate::ui::error::format_config_warning(warning, ui.color, ui.unicode)
        );
    }

    let use_case = || create_service_use_case(&config);
    match cli.command {
        Commands::Config => commands::config::cmd_config(&config, source.as_deref()),
        Commands::List {
            sub_services,
            disabled,
            all,
        } => commands::list::cmd_list(&use_case()?, &ui, sub_services, disabled, all),
        Commands::Edit { service } => commands::service::cmd_edit(&use_case()?, service),
        Commands::Enable { service } => {
            commands::service::cmd_enable(&use_case()?, &ui, service)
        }
        Commands::Disable { service } => {
            commands::service::cmd_disable(&use_case()?, &ui, service)
        }
        Commands::Control { service, args } => {
            commands::compose::cmd_control(&use_case()?, &ui, service, &args)
        }
        Commands::Update {
            service,
            remove,
            no_stop,
        } => commands::compose::cmd_update(&use_case()?, &ui, service, remove, no_stop),
        Commands::Status { service, lines } => commands::compose::cmd_status(
            &use_case()?,
            &ui,
            service,
            lines.unwrap_or(config.status.log_lines),
        ),
        Commands::StartAll => commands::compose::cmd_start_all(&use_case()?, &ui),
    }
}

/// CLI flags take precedence over environment and file settings.
fn apply_flags(mut config: Config, cli: &Cli) -> Config {
    if let Some(root) = &cli.root {
        config.root_directory = Some(root.clone());
    }
    if let Some(compose) = &cli.compose {
        config.compose_executable = compose.clone();
    }
    if let Some(format) = cli.format {
        config.output.format = format.into();
    }
    if let Some(color) = cli.color {
        config.output.color = color.into();
    }
    config
}
