//! Application layer: the use cases a node agent or admin command runs.
//!
//! - [`config_store`]  load + validate at startup, then read-only access.
//! - [`update_config`] rewrite multi-address / node name / port in place.
//! - [`init_repo`]     first-run bootstrap followed by an update.

pub mod config_store;
pub mod init_repo;
pub mod update_config;

pub use config_store::ConfigStore;
pub use init_repo::{init_repo, init_repo_with};
pub use update_config::{update_config_file, update_config_file_with, HostNameSource};
