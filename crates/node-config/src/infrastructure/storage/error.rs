use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::{FieldPath, SchemaError};

/// Error type for configuration file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A file system I/O error occurred.
    #[error("failed to {op} {}: {source}", .path.display())]
    Io {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content of a config file could not be parsed.
    #[error("failed to parse config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// A bundled default template could not be parsed.
    #[error("failed to parse embedded template {name}: {source}")]
    Template {
        name: &'static str,
        #[source]
        source: toml::de::Error,
    },

    /// The config could not be serialized to TOML.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// The document parsed but lacks a field required by the deployment mode.
    #[error("invalid config file {}: {source}", .path.display())]
    Validation {
        path: PathBuf,
        #[source]
        source: SchemaError,
    },

    /// The local host name could not be determined.
    #[error("failed to determine local host name: {0}")]
    HostName(#[source] std::io::Error),
}

impl ConfigError {
    /// Required path that failed validation, if this is a validation error.
    pub fn missing_field(&self) -> Option<FieldPath> {
        match self {
            Self::Validation {
                source: SchemaError::MissingField { path, .. },
                ..
            } => Some(*path),
            _ => None,
        }
    }

    /// Builds a `map_err` adapter that wraps an I/O error with its context.
    pub(crate) fn io<'a>(
        op: &'static str,
        path: &'a Path,
    ) -> impl FnOnce(std::io::Error) -> Self + 'a {
        move |source| Self::Io {
            op,
            path: path.to_path_buf(),
            source,
        }
    }
}
