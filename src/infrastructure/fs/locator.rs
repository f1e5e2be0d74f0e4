//! Service Locator
//!
//! Every immediate subdirectory of the root that holds a descriptor is a
//! service. Nothing is cached; each call rescans the directory.
//!
//! A directory holding descriptors in both states qualifies for both scans.
//! Each scan logs a warning for it, and `find_all_services` lists it once.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::state::find_descriptor;
use crate::domain::entities::{Service, ServiceState};
use crate::error::{DoxyError, DoxyResult};
use crate::infrastructure::compose::sub_services;

/// Enabled services under `root`, sorted by name.
pub fn find_services(root: &Path, include_sub_services: bool) -> DoxyResult<Vec<Service>> {
    scan(root, ServiceState::Enabled, include_sub_services, true)
}

/// Disabled services under `root`, sorted by name.
pub fn find_disabled_services(root: &Path, include_sub_services: bool) -> DoxyResult<Vec<Service>> {
    scan(root, ServiceState::Disabled, include_sub_services, true)
}

/// Enabled services followed by disabled ones, each directory once.
///
/// A conflicting directory is listed with the enabled services.
pub fn find_all_services(root: &Path, include_sub_services: bool) -> DoxyResult<Vec<Service>> {
    let mut services = scan(root, ServiceState::Enabled, include_sub_services, true)?;
    let enabled: BTreeSet<String> = services.iter().map(|s| s.name().to_string()).collect();

    let disabled = scan(root, ServiceState::Disabled, include_sub_services, false)?;
    services.extend(
        disabled
            .into_iter()
            .filter(|service| !enabled.contains(service.name())),
    );
    Ok(services)
}

fn scan(
    root: &Path,
    state: ServiceState,
    include_sub_services: bool,
    warn_on_conflict: bool,
) -> DoxyResult<Vec<Service>> {
    if !root.is_dir() {
        return Err(DoxyError::RootNotFound {
            path: root.to_path_buf(),
        });
    }
    let root = absolute(root)?;

    let mut services = Vec::new();
    for entry in fs::read_dir(&root)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }

        let Some(descriptor) = find_descriptor(&path, state) else {
            continue;
        };

        let Some(name) = entry.file_name().to_str().map(str::to_string) else {
            warn!(path = %path.display(), "skipping service with non UTF-8 name");
            continue;
        };

        if warn_on_conflict {
            let other = match state {
                ServiceState::Enabled => ServiceState::Disabled,
                ServiceState::Disabled => ServiceState::Enabled,
            };
            if let Some(parked) = find_descriptor(&path, other) {
                warn!(
                    "service '{}' has both {} and {}; remove one of them",
                    name,
                    descriptor.display(),
                    parked.display()
                );
            }
        }

        let mut service = Service::new(name, path, state);
        if include_sub_services {
            service = service.with_sub_services(sub_services(&descriptor)?);
        }
        services.push(service);
    }

    services.sort_by(|a, b| a.name().cmp(b.name()));
    debug!(
        root = %root.display(),
        %state,
        count = services.len(),
        "scanned for services"
    );
    Ok(services)
}

fn absolute(path: &Path) -> DoxyResult<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(std::env::current_dir()?.join(path))
    }
}
