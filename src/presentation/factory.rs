//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use crate::application::ServiceUseCase;
use crate::config::Config;
use crate::error::DoxyResult;
use crate::infrastructure::ProcessComposeRunner;

/// Type alias for the concrete ServiceUseCase with all dependencies
pub type ConcreteServiceUseCase = ServiceUseCase<ProcessComposeRunner>;

/// Create a service use case for the configured root and compose command
///
/// Fails only when the compose executable setting is empty.
pub fn create_service_use_case(config: &Config) -> DoxyResult<ConcreteServiceUseCase> {
    let runner = ProcessComposeRunner::new(config.compose_command()?);
    Ok(ServiceUseCase::new(config.root_directory(), runner))
}
