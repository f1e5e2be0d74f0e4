//! Error types for Doxy
//!
//! Library code returns `DoxyError`; the binary wraps it in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Doxy operations
pub type DoxyResult<T> = Result<T, DoxyError>;

/// Main error type for Doxy operations
#[derive(Error, Debug)]
pub enum DoxyError {
    /// Configured root directory does not exist
    #[error("root directory not found: {path}")]
    RootNotFound { path: PathBuf },

    /// No service with this name under the root directory
    #[error("service '{name}' not found")]
    ServiceNotFound { name: String },

    /// Service exists but its descriptor is parked under `.disabled`
    #[error("service '{name}' is disabled (run 'doxy enable {name}' first)")]
    ServiceDisabled { name: String },

    /// Descriptor missing, or a state transition from the wrong state
    #[error("no matching compose file in {path}")]
    NotFound { path: PathBuf },

    /// Both the enabled and the disabled descriptor are present
    #[error("service '{service}' has both {enabled} and {disabled}; remove one of them")]
    ConflictingDescriptors {
        service: String,
        enabled: PathBuf,
        disabled: PathBuf,
    },

    /// Descriptor is not valid YAML
    #[error("invalid compose file {file}: {message}")]
    DescriptorParse { file: PathBuf, message: String },

    /// Descriptor parsed but has no usable `services` mapping
    #[error("unexpected compose file layout in {file}: {message}")]
    DescriptorSchema { file: PathBuf, message: String },

    /// Compose executable setting is empty
    #[error("compose executable must not be empty (got '{value}')")]
    InvalidComposeCommand { value: String },

    /// The compose executable could not be started
    #[error("failed to run '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Config file named on the command line does not exist
    #[error("config file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Config file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DoxyError {
    /// True for the "nothing there" family of errors.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            DoxyError::NotFound { .. }
                | DoxyError::ServiceNotFound { .. }
                | DoxyError::ServiceDisabled { .. }
                | DoxyError::RootNotFound { .. }
                | DoxyError::ConfigNotFound { .. }
        )
    }
}
