//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod compose_runner;
pub mod service_events;

pub use compose_runner::{ComposeRunner, RunOutcome};
pub use service_events::{NoopEventSink, ServiceEvent, ServiceEventSink};
