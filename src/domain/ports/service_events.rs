//! Service Event Port
//!
//! Lets the binary label and report composite operations (status, update,
//! start-all) while they run.

use crate::domain::ports::RunOutcome;

/// Event emitted while running compose commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceEvent {
    /// A labelled step is about to run
    StepStarted { service: String, label: String },

    /// A compose invocation returned
    StepFinished {
        service: String,
        label: String,
        outcome: RunOutcome,
    },

    /// A service in a fan-out could not be handled at all
    ServiceFailed { service: String, error: String },
}

/// Trait for receiving service events
pub trait ServiceEventSink {
    fn on_event(&self, event: ServiceEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl ServiceEventSink for NoopEventSink {
    fn on_event(&self, _event: ServiceEvent) {}
}
