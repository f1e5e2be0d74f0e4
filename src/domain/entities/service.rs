//! Service Entity
//!
//! A service is a directory directly under the root that holds a compose
//! descriptor. Its name is the directory name; its state is whichever
//! descriptor variant is on disk.

use std::fmt;
use std::path::{Path, PathBuf};

/// Whether a service's descriptor is live or parked under `.disabled`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceState {
    Enabled,
    Disabled,
}

impl ServiceState {
    pub fn is_enabled(self) -> bool {
        matches!(self, ServiceState::Enabled)
    }
}

impl fmt::Display for ServiceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceState::Enabled => f.write_str("enabled"),
            ServiceState::Disabled => f.write_str("disabled"),
        }
    }
}

/// A discovered compose service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Service {
    name: String,
    path: PathBuf,
    state: ServiceState,
    sub_services: Option<Vec<String>>,
}

impl Service {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>, state: ServiceState) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            state,
            sub_services: None,
        }
    }

    /// Attach the sub-service names read from the descriptor.
    pub fn with_sub_services(mut self, sub_services: Vec<String>) -> Self {
        self.sub_services = Some(sub_services);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn state(&self) -> ServiceState {
        self.state
    }

    /// `None` unless sub-services were requested at discovery time.
    pub fn sub_services(&self) -> Option<&[String]> {
        self.sub_services.as_deref()
    }
}
