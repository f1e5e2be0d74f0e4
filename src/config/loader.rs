//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{DoxyError, DoxyResult};

use super::types::{Config, OutputFormat};

/// Environment variable naming an explicit config file
pub const CONFIG_ENV: &str = "DOXY_CONFIG";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Outcome of config resolution
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: Config,
    /// File the config was read from, if any
    pub source: Option<PathBuf>,
    pub warnings: Vec<ConfigWarning>,
}

/// Parse a config file, reporting keys the schema does not know.
pub fn load_with_warnings(path: &Path) -> DoxyResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;
    let invalid = |message: String| DoxyError::InvalidConfig {
        file: path.to_path_buf(),
        message,
    };

    let mut ignored = Vec::new();
    let config: Config = serde_ignored::deserialize(
        toml::de::Deserializer::new(&content),
        |key_path: serde_ignored::Path<'_>| ignored.push(key_path.to_string()),
    )
    .map_err(|e| invalid(e.to_string()))?;

    let warnings = ignored
        .iter()
        .map(|dotted| {
            // `output.colour` is reported as `colour`
            let key = dotted.rsplit('.').next().unwrap_or(dotted);
            ConfigWarning {
                key: key.to_string(),
                file: path.to_path_buf(),
                line: line_of_key(&content, key),
                suggestion: closest_known_key(key).map(str::to_string),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve and load the config file, then apply environment overrides.
///
/// An explicit path must exist. The `$DOXY_CONFIG` and default locations
/// are optional; when absent the built-in defaults are used.
pub fn resolve(explicit: Option<&Path>) -> DoxyResult<LoadedConfig> {
    let candidate = match explicit {
        Some(path) => {
            if !path.is_file() {
                return Err(DoxyError::ConfigNotFound {
                    path: path.to_path_buf(),
                });
            }
            Some(path.to_path_buf())
        }
        None => std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .or_else(default_config_path)
            .filter(|p| p.is_file()),
    };

    let mut loaded = match candidate {
        Some(path) => {
            debug!(path = %path.display(), "loading config");
            let (config, warnings) = load_with_warnings(&path)?;
            LoadedConfig {
                config,
                source: Some(path),
                warnings,
            }
        }
        None => {
            debug!("no config file, using defaults");
            LoadedConfig::default()
        }
    };

    loaded.config = with_env_overrides(loaded.config);
    Ok(loaded)
}

/// `<config dir>/doxy/config.toml`, honouring `XDG_CONFIG_HOME`.
pub fn default_config_path() -> Option<PathBuf> {
    std::env::var_os("XDG_CONFIG_HOME")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
        .map(|dir| dir.join("doxy").join("config.toml"))
}

/// Apply environment variable overrides (DOXY_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_from(config, |key| std::env::var(key).ok())
}

/// Same as [`with_env_overrides`], reading variables through `get_env`.
pub fn with_env_overrides_from<F>(mut config: Config, get_env: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    // DOXY_ROOT_DIRECTORY
    if let Some(root) = get_env("DOXY_ROOT_DIRECTORY").filter(|v| !v.is_empty()) {
        config.root_directory = Some(PathBuf::from(root));
    }

    // DOXY_COMPOSE_EXECUTABLE
    if let Some(compose) = get_env("DOXY_COMPOSE_EXECUTABLE").filter(|v| !v.trim().is_empty()) {
        config.compose_executable = compose;
    }

    // DOXY_FORMAT
    if let Some(format) = get_env("DOXY_FORMAT") {
        match format.to_lowercase().as_str() {
            "fancy" => config.output.format = OutputFormat::Fancy,
            "simple" => config.output.format = OutputFormat::Simple,
            other => debug!(value = other, "ignoring unknown DOXY_FORMAT"),
        }
    }

    config
}

/// Every key the schema accepts, at any nesting level
const KNOWN_KEYS: &[&str] = &[
    "root_directory",
    "compose_executable",
    "output",
    "format",
    "color",
    "status",
    "log_lines",
];

/// 1-based line on which `key` is assigned.
fn line_of_key(content: &str, key: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| {
            line.trim_start()
                .strip_prefix(key)
                .is_some_and(|rest| rest.trim_start().starts_with('='))
        })
        .map(|index| index + 1)
}

/// Known key within two edits of `unknown`.
fn closest_known_key(unknown: &str) -> Option<&'static str> {
    KNOWN_KEYS
        .iter()
        .map(|&known| (known, edit_distance(unknown, known)))
        .filter(|&(_, distance)| distance <= 2)
        .min_by_key(|&(_, distance)| distance)
        .map(|(known, _)| known)
}

fn edit_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b.len()).collect();

    for (i, ca) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = (above + 1)
                .min(row[j] + 1)
                .min(diagonal + usize::from(ca != cb));
            diagonal = above;
        }
    }
    row[b.len()]
}
