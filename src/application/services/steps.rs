//! Composite Step Sequences
//!
//! The compose verbs are passed to the tool unmodified; these functions
//! only fix their order.

use super::options::{StatusOptions, UpdateOptions};

/// One labelled compose invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub label: &'static str,
    pub args: Vec<String>,
}

impl Step {
    fn new(label: &'static str, args: &[&str]) -> Self {
        Self {
            label,
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }
}

/// `stop` or `down --remove-orphans`, then `pull`, then `up -d`.
pub fn update_steps(options: &UpdateOptions) -> Vec<Step> {
    let mut steps = Vec::with_capacity(3);
    if options.stop_first {
        steps.push(if options.remove {
            Step::new("Removing", &["down", "--remove-orphans"])
        } else {
            Step::new("Stopping", &["stop"])
        });
    }
    steps.push(Step::new("Pulling", &["pull"]));
    steps.push(start_step());
    steps
}

/// `images`, `ps`, `top`, `logs --tail <n>`.
pub fn status_steps(options: &StatusOptions) -> Vec<Step> {
    let tail = options.log_lines.to_string();
    vec![
        Step::new("Images", &["images"]),
        Step::new("Containers", &["ps"]),
        Step::new("Processes", &["top"]),
        Step::new("Logs", &["logs", "--tail", tail.as_str()]),
    ]
}

/// Detached start used by `update` and `start-all`.
pub fn start_step() -> Step {
    Step::new("Starting", &["up", "-d"])
}
