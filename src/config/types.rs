//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::application::DEFAULT_LOG_LINES;
use crate::domain::value_objects::{ComposeCommand, DEFAULT_COMPOSE_COMMAND};
use crate::error::DoxyResult;

/// How service listings and headers are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Rules and trees
    #[default]
    Fancy,
    /// One line per service, no headers
    Simple,
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,

    #[serde(default)]
    pub color: ColorMode,
}

/// `status` configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusConfig {
    #[serde(default = "default_log_lines")]
    pub log_lines: usize,
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self {
            log_lines: default_log_lines(),
        }
    }
}

fn default_log_lines() -> usize {
    DEFAULT_LOG_LINES
}

fn default_compose_executable() -> String {
    DEFAULT_COMPOSE_COMMAND.to_string()
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory whose subdirectories are services
    #[serde(default)]
    pub root_directory: Option<PathBuf>,

    /// Compose invocation, split on whitespace
    #[serde(default = "default_compose_executable")]
    pub compose_executable: String,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub status: StatusConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root_directory: None,
            compose_executable: default_compose_executable(),
            output: OutputConfig::default(),
            status: StatusConfig::default(),
        }
    }
}

impl Config {
    /// Root directory with `~` expanded; the current directory when unset.
    pub fn root_directory(&self) -> PathBuf {
        match &self.root_directory {
            Some(root) => expand_home(root),
            None => PathBuf::from("."),
        }
    }

    pub fn compose_command(&self) -> DoxyResult<ComposeCommand> {
        ComposeCommand::parse(&self.compose_executable)
    }
}

fn expand_home(path: &Path) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };
    match dirs::home_dir() {
        Some(home) => home.join(rest),
        None => path.to_path_buf(),
    }
}
