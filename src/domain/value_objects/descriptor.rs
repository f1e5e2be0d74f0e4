//! Descriptor File Naming
//!
//! A service directory holds `docker-compose.yml` or `docker-compose.yaml`
//! while enabled. Disabling appends `.disabled` to that name.

use std::path::{Path, PathBuf};

use crate::domain::entities::ServiceState;

/// Enabled descriptor names, in lookup order.
pub const ENABLED_DESCRIPTORS: &[&str] = &["docker-compose.yml", "docker-compose.yaml"];

/// Suffix appended to a descriptor name when the service is disabled.
pub const DISABLED_SUFFIX: &str = ".disabled";

/// One of the descriptor file names a service directory may contain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptorName {
    base: &'static str,
    state: ServiceState,
}

impl DescriptorName {
    /// All candidate names for `state`, in lookup order.
    pub fn candidates(state: ServiceState) -> impl Iterator<Item = DescriptorName> {
        ENABLED_DESCRIPTORS
            .iter()
            .map(move |base| DescriptorName { base: *base, state })
    }

    /// Classify a file name, if it is a descriptor at all.
    pub fn parse(file_name: &str) -> Option<DescriptorName> {
        ENABLED_DESCRIPTORS.iter().find_map(|&base| {
            if file_name == base {
                Some(DescriptorName {
                    base,
                    state: ServiceState::Enabled,
                })
            } else if file_name
                .strip_prefix(base)
                .is_some_and(|rest| rest == DISABLED_SUFFIX)
            {
                Some(DescriptorName {
                    base,
                    state: ServiceState::Disabled,
                })
            } else {
                None
            }
        })
    }

    pub fn state(&self) -> ServiceState {
        self.state
    }

    pub fn file_name(&self) -> String {
        match self.state {
            ServiceState::Enabled => self.base.to_string(),
            ServiceState::Disabled => format!("{}{}", self.base, DISABLED_SUFFIX),
        }
    }

    /// The same base name in the other state.
    pub fn toggled(&self) -> DescriptorName {
        let state = match self.state {
            ServiceState::Enabled => ServiceState::Disabled,
            ServiceState::Disabled => ServiceState::Enabled,
        };
        DescriptorName {
            base: self.base,
            state,
        }
    }

    pub fn in_dir(&self, service_path: &Path) -> PathBuf {
        service_path.join(self.file_name())
    }
}
