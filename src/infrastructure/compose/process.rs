//! Process Compose Runner
//!
//! Spawns the configured compose executable with inherited stdio so its
//! output streams straight to the terminal.

use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

use tracing::debug;

use crate::domain::ports::{ComposeRunner, RunOutcome};
use crate::domain::value_objects::ComposeCommand;
use crate::error::{DoxyError, DoxyResult};

/// `ComposeRunner` that runs a real child process
#[derive(Debug, Clone)]
pub struct ProcessComposeRunner {
    command: ComposeCommand,
}

impl ProcessComposeRunner {
    pub fn new(command: ComposeCommand) -> Self {
        Self { command }
    }

    pub fn command(&self) -> &ComposeCommand {
        &self.command
    }
}

impl Default for ProcessComposeRunner {
    fn default() -> Self {
        Self::new(ComposeCommand::default())
    }
}

impl ComposeRunner for ProcessComposeRunner {
    fn run(&self, descriptor: &Path, args: &[String]) -> DoxyResult<RunOutcome> {
        let argv = self.command.argv(descriptor, args);
        debug!(?argv, "spawning compose");

        let status = Command::new(&argv[0])
            .args(&argv[1..])
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| DoxyError::Spawn {
                program: self.command.program().to_string(),
                source,
            })?;

        let outcome = outcome_from(status);
        debug!(success = outcome.success, code = ?outcome.code, "compose exited");
        Ok(outcome)
    }
}

fn outcome_from(status: ExitStatus) -> RunOutcome {
    if status.success() {
        RunOutcome::ok()
    } else {
        RunOutcome::failed(status.code())
    }
}
