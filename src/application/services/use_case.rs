//! Service Use Case
//!
//! Every verb resolves its service through `require_service` before doing
//! anything. Composite verbs then run their steps in order and never stop
//! on a failing exit code; each outcome is reported to the event sink and
//! collected in the result.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use super::options::{ListScope, StatusOptions, UpdateOptions};
use super::result::{CompositeResult, StartAllResult, StepReport};
use super::steps::{start_step, status_steps, update_steps, Step};
use crate::domain::entities::{Service, ServiceState};
use crate::domain::ports::{ComposeRunner, RunOutcome, ServiceEvent, ServiceEventSink};
use crate::error::{DoxyError, DoxyResult};
use crate::infrastructure::fs as service_fs;

/// Use case for the services of one root directory
pub struct ServiceUseCase<R: ComposeRunner> {
    root: PathBuf,
    runner: R,
}

impl<R: ComposeRunner> ServiceUseCase<R> {
    pub fn new(root: impl Into<PathBuf>, runner: R) -> Self {
        Self {
            root: root.into(),
            runner,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Services in `scope`, optionally with their sub-service names.
    pub fn list(&self, scope: ListScope, include_sub_services: bool) -> DoxyResult<Vec<Service>> {
        match scope {
            ListScope::Enabled => service_fs::find_services(&self.root, include_sub_services),
            ListScope::Disabled => {
                service_fs::find_disabled_services(&self.root, include_sub_services)
            }
            ListScope::All => service_fs::find_all_services(&self.root, include_sub_services),
        }
    }

    /// Names of the services in `scope`, for pickers and completion.
    pub fn names(&self, scope: ListScope) -> DoxyResult<Vec<String>> {
        Ok(self
            .list(scope, false)?
            .into_iter()
            .map(|s| s.name().to_string())
            .collect())
    }

    /// Guard run at the top of every per-service verb.
    ///
    /// Returns the service's descriptor (enabled or disabled) after checking
    /// that the root, the directory, and exactly one descriptor exist.
    pub fn require_service(&self, name: &str) -> DoxyResult<PathBuf> {
        let service_path = self.service_path(name)?;
        service_fs::existing_descriptor(&service_path).map_err(|e| match e {
            DoxyError::NotFound { .. } => DoxyError::ServiceNotFound {
                name: name.to_string(),
            },
            other => other,
        })
    }

    /// Like `require_service`, but the service must be enabled.
    pub fn require_enabled(&self, name: &str) -> DoxyResult<PathBuf> {
        let descriptor = self.require_service(name)?;
        match service_fs::service_state(descriptor.parent().unwrap_or(&self.root))? {
            ServiceState::Enabled => Ok(descriptor),
            ServiceState::Disabled => Err(DoxyError::ServiceDisabled {
                name: name.to_string(),
            }),
        }
    }

    pub fn enable(&self, name: &str) -> DoxyResult<PathBuf> {
        let service_path = self.service_path(name)?;
        let path = service_fs::enable(&service_path)?;
        info!(service = name, "enabled");
        Ok(path)
    }

    pub fn disable(&self, name: &str) -> DoxyResult<PathBuf> {
        let service_path = self.service_path(name)?;
        let path = service_fs::disable(&service_path)?;
        info!(service = name, "disabled");
        Ok(path)
    }

    /// Pass `args` straight through to the compose tool.
    pub fn control(&self, name: &str, args: &[String]) -> DoxyResult<RunOutcome> {
        let descriptor = self.require_enabled(name)?;
        self.runner.run(&descriptor, args)
    }

    /// Stop (or tear down), pull, and start detached.
    pub fn update(
        &self,
        name: &str,
        options: &UpdateOptions,
        sink: &dyn ServiceEventSink,
    ) -> DoxyResult<CompositeResult> {
        let descriptor = self.require_enabled(name)?;
        info!(service = name, remove = options.remove, "updating");
        self.run_steps(name, &descriptor, update_steps(options), sink)
    }

    /// Images, containers, processes, and the recent log tail.
    pub fn status(
        &self,
        name: &str,
        options: &StatusOptions,
        sink: &dyn ServiceEventSink,
    ) -> DoxyResult<CompositeResult> {
        let descriptor = self.require_enabled(name)?;
        self.run_steps(name, &descriptor, status_steps(options), sink)
    }

    /// `up -d` for every enabled service, in discovery order.
    ///
    /// A service that fails to resolve, fails to spawn, or exits non-zero is
    /// recorded and the loop moves on.
    pub fn start_all(&self, sink: &dyn ServiceEventSink) -> DoxyResult<StartAllResult> {
        let services = self.list(ListScope::Enabled, false)?;
        let mut result = StartAllResult::default();

        for service in services {
            let name = service.name().to_string();
            let step = start_step();
            let outcome = self
                .require_enabled(&name)
                .and_then(|descriptor| {
                    self.run_step(&name, &descriptor, &step, sink)
                        .map(|report| report.outcome)
                });

            match outcome {
                Ok(outcome) if outcome.success => result.started.push(name),
                Ok(outcome) => result.failed.push((name, outcome.to_string())),
                Err(e) => {
                    warn!(service = %name, error = %e, "start failed");
                    sink.on_event(ServiceEvent::ServiceFailed {
                        service: name.clone(),
                        error: e.to_string(),
                    });
                    result.failed.push((name, e.to_string()));
                }
            }
        }

        info!(
            started = result.started.len(),
            failed = result.failed.len(),
            "start-all finished"
        );
        Ok(result)
    }

    fn run_steps(
        &self,
        name: &str,
        descriptor: &Path,
        steps: Vec<Step>,
        sink: &dyn ServiceEventSink,
    ) -> DoxyResult<CompositeResult> {
        let mut result = CompositeResult::new(name);
        for step in &steps {
            let report = self.run_step(name, descriptor, step, sink)?;
            if !report.outcome.success {
                warn!(service = name, step = step.label, code = ?report.outcome.code, "step failed, continuing");
            }
            result.steps.push(report);
        }
        Ok(result)
    }

    fn run_step(
        &self,
        name: &str,
        descriptor: &Path,
        step: &Step,
        sink: &dyn ServiceEventSink,
    ) -> DoxyResult<StepReport> {
        sink.on_event(ServiceEvent::StepStarted {
            service: name.to_string(),
            label: step.label.to_string(),
        });

        let outcome = self.runner.run(descriptor, &step.args)?;

        sink.on_event(ServiceEvent::StepFinished {
            service: name.to_string(),
            label: step.label.to_string(),
            outcome,
        });

        Ok(StepReport {
            label: step.label,
            args: step.args.clone(),
            outcome,
        })
    }

    /// `<root>/<name>`, after rejecting names that would leave the root.
    fn service_path(&self, name: &str) -> DoxyResult<PathBuf> {
        if !self.root.is_dir() {
            return Err(DoxyError::RootNotFound {
                path: self.root.clone(),
            });
        }

        let is_plain_name = !name.is_empty()
            && name != "."
            && name != ".."
            && !name.contains(['/', '\\']);
        let path = self.root.join(name);
        if !is_plain_name || !path.is_dir() {
            return Err(DoxyError::ServiceNotFound {
                name: name.to_string(),
            });
        }
        Ok(path)
    }
}
