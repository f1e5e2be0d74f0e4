//! File System Implementations
//!
//! - `locator` - scans the root directory for service directories
//! - `state` - resolves descriptors and renames them between states

mod locator;
mod state;

pub use locator::{find_all_services, find_disabled_services, find_services};
pub use state::{descriptor_path, disable, enable, existing_descriptor, exists, service_state};
