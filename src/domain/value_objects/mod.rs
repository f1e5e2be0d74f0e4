//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod compose_command;
mod descriptor;

pub use compose_command::{ComposeCommand, DEFAULT_COMPOSE_COMMAND};
pub use descriptor::{DescriptorName, DISABLED_SUFFIX, ENABLED_DESCRIPTORS};
