//! Service Options
//!
//! Configuration types for the composite verbs.

/// Default `logs --tail` length for `status`
pub const DEFAULT_LOG_LINES: usize = 10;

/// Which services a listing covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListScope {
    #[default]
    Enabled,
    Disabled,
    All,
}

/// Options for `update`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateOptions {
    /// Tear down with `down --remove-orphans` instead of `stop`
    pub remove: bool,
    /// Run the stop/teardown step before pulling
    pub stop_first: bool,
}

impl Default for UpdateOptions {
    fn default() -> Self {
        Self {
            remove: false,
            stop_first: true,
        }
    }
}

/// Options for `status`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusOptions {
    /// Number of log lines to tail
    pub log_lines: usize,
}

impl Default for StatusOptions {
    fn default() -> Self {
        Self {
            log_lines: DEFAULT_LOG_LINES,
        }
    }
}
