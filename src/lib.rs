//! Doxy - manage a directory of docker-compose services
//!
//! Every subdirectory of the root directory that holds a compose file is a
//! service. Services are enabled or disabled by renaming that file, and all
//! container work is delegated to an external compose executable.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{ListScope, ServiceUseCase, StatusOptions, UpdateOptions};
pub use config::{Config, OutputFormat};
pub use domain::entities::{Service, ServiceState};
pub use domain::value_objects::ComposeCommand;
pub use error::{DoxyError, DoxyResult};
