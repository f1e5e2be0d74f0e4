//! Compose Tool Integration
//!
//! - `descriptor` - reads sub-service names out of a compose file
//! - `process` - `ComposeRunner` backed by a child process

mod descriptor;
mod process;

pub use descriptor::sub_services;
pub use process::ProcessComposeRunner;
