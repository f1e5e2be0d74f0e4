//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, ports)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `ServiceUseCase` - listing, enable/disable, and the compose verbs
//!   (control, update, status, start-all) for one root directory

pub mod services;

pub use services::{
    CompositeResult, ListScope, ServiceUseCase, StartAllResult, StatusOptions, Step, StepReport,
    UpdateOptions, DEFAULT_LOG_LINES,
};
