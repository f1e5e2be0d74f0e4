//! Services Module
//!
//! Orchestrates compose commands against the services of one root.
//!
//! ## Structure
//!
//! - `options` - `UpdateOptions`, `StatusOptions`, `ListScope`
//! - `steps` - the fixed step sequences of the composite verbs
//! - `result` - `CompositeResult`, `StartAllResult`
//! - `use_case` - `ServiceUseCase`
//!
//! ## Usage
//!
//! ```ignore
//! use doxy::application::{ServiceUseCase, UpdateOptions};
//!
//! let use_case = ServiceUseCase::new(root, runner);
//! let result = use_case.update("grafana", &UpdateOptions::default(), &sink)?;
//! ```

mod options;
mod result;
mod steps;
mod use_case;

pub use options::{ListScope, StatusOptions, UpdateOptions, DEFAULT_LOG_LINES};
pub use result::{CompositeResult, StartAllResult, StepReport};
pub use steps::{start_step, status_steps, update_steps, Step};
pub use use_case::ServiceUseCase;
