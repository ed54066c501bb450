//! The loaded, validated node configuration.
//!
//! A [`ConfigStore`] is built once at agent startup and handed to whatever
//! needs configuration (by reference, or via [`ConfigStore::shared`] for
//! consumers that outlive the borrow).  It never changes after load.
//! Rewriting the file on disk does not affect a live store; call
//! [`ConfigStore::reload`] to pick the new values up.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::{validate_required, ComputeNodeConfig, DeploymentMode};
use crate::infrastructure::storage::config::{config_file_path, known_keys, read_config_file};
use crate::infrastructure::storage::{ConfigError, DecodeMetadata};

/// Node configuration loaded from `<root>/config.toml`.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    root: PathBuf,
    mode: DeploymentMode,
    config: Arc<ComputeNodeConfig>,
    metadata: DecodeMetadata,
}

impl ConfigStore {
    /// Loads `<root>/config.toml` and checks it against the required-field
    /// schema of `mode`.
    ///
    /// Keys the config does not know about are ignored and logged at `warn`.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::Io`] if the file cannot be read.
    /// - [`ConfigError::Parse`] if it is not valid TOML for the schema.
    /// - [`ConfigError::Validation`] naming the first required path that is
    ///   absent from the document.
    pub fn load(root: impl AsRef<Path>, mode: DeploymentMode) -> Result<Self, ConfigError> {
        let root = root.as_ref().to_path_buf();
        let path = config_file_path(&root);
        let (config, metadata) = read_config_file(&path)?;

        validate_required(&metadata, mode).map_err(|source| ConfigError::Validation {
            path: path.clone(),
            source,
        })?;

        let unknown = metadata.undecoded(known_keys());
        if !unknown.is_empty() {
            warn!(
                "ignoring unknown keys in {}: {}",
                path.display(),
                unknown.join(", ")
            );
        }

        info!("loaded {mode} node config from {}", path.display());
        Ok(Self {
            root,
            mode,
            config: Arc::new(config),
            metadata,
        })
    }

    /// Loads the file again with the same root and mode.
    ///
    /// # Errors
    ///
    /// Same as [`ConfigStore::load`].
    pub fn reload(&self) -> Result<Self, ConfigError> {
        Self::load(&self.root, self.mode)
    }

    pub fn config(&self) -> &ComputeNodeConfig {
        &self.config
    }

    /// Shared handle to the configuration.
    pub fn shared(&self) -> Arc<ComputeNodeConfig> {
        Arc::clone(&self.config)
    }

    /// Resolves a named RPC endpoint; empty for unknown names.
    pub fn rpc_endpoint(&self, name: &str) -> &str {
        self.config.rpc_endpoint(name)
    }

    pub fn mode(&self) -> DeploymentMode {
        self.mode
    }

    /// Repository directory the config was loaded from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config_path(&self) -> PathBuf {
        config_file_path(&self.root)
    }

    /// Keys that were present in the loaded document.
    pub fn metadata(&self) -> &DecodeMetadata {
        &self.metadata
    }

    /// Dotted paths of keys in the document that the schema does not know.
    pub fn undecoded_keys(&self) -> Vec<String> {
        self.metadata.undecoded(known_keys())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
