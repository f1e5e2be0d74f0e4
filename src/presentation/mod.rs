//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//! - Rendering service listings and step headers
//!
//! ## Usage
//!
//! ```ignore
//! use doxy::presentation::factory;
//!
//! let use_case = factory::create_service_use_case(&config)?;
//! let services = use_case.list(ListScope::Enabled, false)?;
//! ```

pub mod cli;
pub mod factory;
pub mod output;

pub use cli::{Cli, ColorWhen, Commands, FormatArg};
pub use factory::{create_service_use_case, ConcreteServiceUseCase};
pub use output::{FancyRenderer, Renderer, SimpleRenderer};
