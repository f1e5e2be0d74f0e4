//! Service Results
//!
//! Result types for composite operations.

use crate::domain::ports::RunOutcome;

/// Outcome of one step of a composite operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepReport {
    pub label: &'static str,
    pub args: Vec<String>,
    pub outcome: RunOutcome,
}

/// Result of `update` or `status` on one service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositeResult {
    pub service: String,
    pub steps: Vec<StepReport>,
}

impl CompositeResult {
    pub fn new(service: impl Into<String>) -> Self {
        Self {
            service: service.into(),
            steps: Vec::new(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.steps.iter().all(|s| s.outcome.success)
    }

    pub fn failed_steps(&self) -> impl Iterator<Item = &StepReport> {
        self.steps.iter().filter(|s| !s.outcome.success)
    }
}

/// Result of `start-all`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StartAllResult {
    /// Services whose `up -d` exited successfully
    pub started: Vec<String>,
    /// Services that failed, with a short reason
    pub failed: Vec<(String, String)>,
}

impl StartAllResult {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn total(&self) -> usize {
        self.started.len() + self.failed.len()
    }
}
