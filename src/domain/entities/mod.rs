//! Domain Entities
//!
//! - `Service` - one compose project directory under the root

mod service;

pub use service::{Service, ServiceState};
