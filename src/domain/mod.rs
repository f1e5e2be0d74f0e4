//! Domain Layer
//!
//! Service model and the ports the rest of Doxy talks through.
//!
//! ## Structure
//!
//! - `entities/` - `Service` and its derived `ServiceState`
//! - `value_objects/` - descriptor file naming, the compose command
//! - `ports/` - interfaces implemented by the infrastructure layer
//!
//! Nothing in here touches the file system or spawns processes.

pub mod entities;
pub mod ports;
pub mod value_objects;
