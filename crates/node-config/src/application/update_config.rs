//! In-place update of the multi-address, node name and port.

use std::path::Path;

use tracing::info;

use crate::domain::{ComputeNodeConfig, ConfigUpdate};
use crate::infrastructure::host::SystemHostName;
use crate::infrastructure::storage::config::{config_file_path, read_config_file, write_config_file};
use crate::infrastructure::storage::ConfigError;

/// Source of the local host name, used when no node name is given.
pub trait HostNameSource {
    /// Returns the host name of the machine.
    ///
    /// # Errors
    ///
    /// Returns the underlying OS error if the name cannot be determined.
    fn host_name(&self) -> std::io::Result<String>;
}

/// Applies `update` to `<root>/config.toml` and rewrites the file.
///
/// Uses the operating system's host name as the node-name fallback.  See
/// [`update_config_file_with`].
///
/// # Errors
///
/// Same as [`update_config_file_with`].
pub fn update_config_file(
    root: &Path,
    update: &ConfigUpdate,
) -> Result<ComputeNodeConfig, ConfigError> {
    update_config_file_with(root, update, &SystemHostName)
}

/// Applies `update` to `<root>/config.toml` and rewrites the file.
///
/// The document is decoded fresh from disk; a live
/// [`ConfigStore`](super::config_store::ConfigStore) is not consulted or
/// updated.  Fields outside the update carry through unchanged.  Returns the
/// config that was written.
///
/// # Errors
///
/// - [`ConfigError::Io`] / [`ConfigError::Parse`] if the current file cannot
///   be read, or the new one cannot be written.
/// - [`ConfigError::HostName`] if the node name is blank and `hosts` fails.
///   The file on disk is untouched in that case.
pub fn update_config_file_with(
    root: &Path,
    update: &ConfigUpdate,
    hosts: &impl HostNameSource,
) -> Result<ComputeNodeConfig, ConfigError> {
    let path = config_file_path(root);
    let (mut config, _) = read_config_file(&path)?;

    update.apply(&mut config, || {
        hosts.host_name().map_err(ConfigError::HostName)
    })?;

    std::fs::remove_file(&path).map_err(ConfigError::io("remove", &path))?;
    write_config_file(&path, &config)?;

    info!(
        "updated {}: multi-address {}, node name {}, port {}",
        path.display(),
        config.api.multi_address,
        config.api.node_name,
        config.api.port
    );
    Ok(config)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
