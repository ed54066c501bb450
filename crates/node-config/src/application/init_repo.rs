//! Repository initialisation: bootstrap the tree, then stamp node identity.

use std::path::Path;

use crate::domain::{ComputeNodeConfig, ConfigUpdate};
use crate::infrastructure::host::SystemHostName;
use crate::infrastructure::storage::{generate_default_tree, ConfigError};

use super::update_config::{update_config_file_with, HostNameSource};

/// Generates the default tree under `root` (keeping existing files) and then
/// applies `update` to its `config.toml`.
///
/// # Errors
///
/// Propagates the errors of
/// [`generate_default_tree`] and [`update_config_file_with`].
pub fn init_repo(root: &Path, update: &ConfigUpdate) -> Result<ComputeNodeConfig, ConfigError> {
    init_repo_with(root, update, &SystemHostName)
}

/// [`init_repo`] with an explicit host-name source.
///
/// # Errors
///
/// See [`init_repo`].
pub fn init_repo_with(
    root: &Path,
    update: &ConfigUpdate,
    hosts: &impl HostNameSource,
) -> Result<ComputeNodeConfig, ConfigError> {
    generate_default_tree(root)?;
    update_config_file_with(root, update, hosts)
}
