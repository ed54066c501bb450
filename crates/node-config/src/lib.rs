//! # node-config
//!
//! Configuration store of the compute node agent.
//!
//! The agent keeps its settings in a single `config.toml` at the root of its
//! repository directory.  This crate:
//!
//! - decodes that file into a typed [`ComputeNodeConfig`], remembering which
//!   keys were actually present;
//! - checks the present keys against the required-field schema of the
//!   [`DeploymentMode`] (standalone nodes need fewer sections than
//!   integrated ones);
//! - lays out a fresh repository from bundled defaults on first run;
//! - rewrites the multi-address, node name and port in place.
//!
//! # Layers
//!
//! ```text
//! domain/          schema types, required-field lists, update rules (no I/O)
//! application/     ConfigStore, update_config_file, init_repo
//! infrastructure/
//!   storage/       toml file codec, decode metadata, bootstrap
//!   host           OS host-name lookup
//! ```
//!
//! # Example
//!
//! ```no_run
//! use node_config::{ConfigStore, DeploymentMode};
//!
//! let store = ConfigStore::load("/var/lib/computing", DeploymentMode::Standalone)?;
//! println!("testnet rpc: {}", store.rpc_endpoint("swan"));
//! # Ok::<(), node_config::ConfigError>(())
//! ```

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::{
    init_repo, update_config_file, update_config_file_with, ConfigStore, HostNameSource,
};
pub use domain::{
    ComputeNodeConfig, ConfigUpdate, DeploymentMode, FieldPath, SchemaError, DEFAULT_RPC,
};
pub use infrastructure::storage::{generate_default_tree, ConfigError, DecodeMetadata};
