//! Service State
//!
//! Resolves the descriptor of a service directory and moves it between the
//! enabled and disabled names. A transition is a single `rename`, so the
//! file content is never touched.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::entities::ServiceState;
use crate::domain::value_objects::DescriptorName;
use crate::error::{DoxyError, DoxyResult};

/// First existing descriptor for `state`, if any.
pub(crate) fn find_descriptor(service_path: &Path, state: ServiceState) -> Option<PathBuf> {
    DescriptorName::candidates(state)
        .map(|name| name.in_dir(service_path))
        .find(|path| path.is_file())
}

/// The one descriptor of a service, enabled names checked first.
pub fn descriptor_path(service_path: &Path) -> DoxyResult<PathBuf> {
    let enabled = find_descriptor(service_path, ServiceState::Enabled);
    let disabled = find_descriptor(service_path, ServiceState::Disabled);

    match (enabled, disabled) {
        (Some(enabled), Some(disabled)) => Err(DoxyError::ConflictingDescriptors {
            service: service_name(service_path),
            enabled,
            disabled,
        }),
        (Some(path), None) | (None, Some(path)) => Ok(path),
        (None, None) => Err(DoxyError::NotFound {
            path: service_path.to_path_buf(),
        }),
    }
}

/// Current state of a service, derived from its descriptor name.
pub fn service_state(service_path: &Path) -> DoxyResult<ServiceState> {
    let path = descriptor_path(service_path)?;
    path.file_name()
        .and_then(|n| n.to_str())
        .and_then(DescriptorName::parse)
        .map(|name| name.state())
        .ok_or(DoxyError::NotFound { path })
}

/// The descriptor, provided it resolves and is still a file on disk.
///
/// A descriptor that vanished between lookup and check is `NotFound`.
pub fn existing_descriptor(service_path: &Path) -> DoxyResult<PathBuf> {
    let path = descriptor_path(service_path)?;
    if path.is_file() {
        Ok(path)
    } else {
        Err(DoxyError::NotFound { path })
    }
}

/// True when the descriptor resolves and is still on disk.
pub fn exists(service_path: &Path) -> bool {
    existing_descriptor(service_path).is_ok()
}

/// Rename the enabled descriptor to its `.disabled` name.
pub fn disable(service_path: &Path) -> DoxyResult<PathBuf> {
    transition(service_path, ServiceState::Enabled)
}

/// Rename the disabled descriptor back to its live name.
pub fn enable(service_path: &Path) -> DoxyResult<PathBuf> {
    transition(service_path, ServiceState::Disabled)
}

fn transition(service_path: &Path, from: ServiceState) -> DoxyResult<PathBuf> {
    let source = find_descriptor(service_path, from).ok_or_else(|| DoxyError::NotFound {
        path: service_path.to_path_buf(),
    })?;

    let name = source
        .file_name()
        .and_then(|n| n.to_str())
        .and_then(DescriptorName::parse)
        .ok_or_else(|| DoxyError::NotFound {
            path: source.clone(),
        })?;
    let target_name = name.toggled();

    // Refuse instead of clobbering whatever already holds the target state.
    if let Some(existing) = find_descriptor(service_path, target_name.state()) {
        let (enabled, disabled) = match from {
            ServiceState::Enabled => (source, existing),
            ServiceState::Disabled => (existing, source),
        };
        return Err(DoxyError::ConflictingDescriptors {
            service: service_name(service_path),
            enabled,
            disabled,
        });
    }

    let target = target_name.in_dir(service_path);
    debug!(from = %source.display(), to = %target.display(), "renaming descriptor");
    fs::rename(&source, &target)?;
    Ok(target)
}

fn service_name(service_path: &Path) -> String {
    service_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| service_path.display().to_string())
}
