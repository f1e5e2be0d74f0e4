//! Configuration module for Doxy
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority, applied by the binary)
//! 2. Environment variables (DOXY_*)
//! 3. Config file (`--config`, `$DOXY_CONFIG`, or `<config dir>/doxy/config.toml`)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    default_config_path, load_with_warnings, resolve, with_env_overrides,
    with_env_overrides_from, ConfigWarning, LoadedConfig, CONFIG_ENV,
};
pub use types::{ColorMode, Config, OutputConfig, OutputFormat, StatusConfig};
