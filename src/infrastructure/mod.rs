//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - service discovery and enable/disable renames
//! - `compose/` - descriptor reading and the process-backed compose runner

pub mod compose;
pub mod fs;

// Re-export for convenience
pub use compose::{sub_services, ProcessComposeRunner};
pub use fs::{
    descriptor_path, disable, enable, existing_descriptor, exists, find_all_services, find_disabled_services,
    find_services, service_state,
};
