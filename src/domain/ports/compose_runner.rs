//! ComposeRunner port - runs the external compose tool
//!
//! Implementations:
//! - `ProcessComposeRunner` - spawns the configured executable
//! - recording runners in tests

use std::fmt;
use std::path::Path;

use crate::error::DoxyResult;

/// How one compose invocation ended.
///
/// Callers decide what a failure means; the runner never turns a non-zero
/// exit into an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOutcome {
    pub success: bool,
    /// `None` when the child was killed by a signal
    pub code: Option<i32>,
}

impl RunOutcome {
    pub fn ok() -> Self {
        Self {
            success: true,
            code: Some(0),
        }
    }

    pub fn failed(code: Option<i32>) -> Self {
        Self {
            success: false,
            code,
        }
    }
}

impl fmt::Display for RunOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.success, self.code) {
            (true, _) => f.write_str("success"),
            (false, Some(code)) => write!(f, "exit code {}", code),
            (false, None) => f.write_str("terminated by signal"),
        }
    }
}

pub trait ComposeRunner {
    /// Run `<compose> -f <descriptor> <args...>` and wait for it to exit.
    ///
    /// Errors only when the process cannot be started.
    fn run(&self, descriptor: &Path, args: &[String]) -> DoxyResult<RunOutcome>;
}
