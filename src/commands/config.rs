//! `doxy config`
//!
//! Prints the effective configuration as TOML, after file, environment and
//! flag overrides have been applied.

use std::path::Path;

use anyhow::{Context, Result};

use doxy::config::Config;

pub fn cmd_config(config: &Config, source: Option<&Path>) -> Result<()> {
    print!("{}", render_config(config, source)?);
    Ok(())
}

fn render_config(config: &Config, source: Option<&Path>) -> Result<String> {
    let effective = Config {
        root_directory: Some(config.root_directory()),
        ..config.clone()
    };
    let body = toml::to_string_pretty(&effective).context("cannot serialize configuration")?;

    let origin = match source {
        Some(path) => format!("# loaded from {}\n", path.display()),
        None => "# no config file found, using defaults\n".to_string(),
    };
    Ok(format!("{}{}", origin, body))
}
