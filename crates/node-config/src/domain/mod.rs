//! Domain layer: the configuration schema and the rules applied to it.
//!
//! Nothing in here touches the file system.  Decoding presence metadata,
//! reading and writing files, and host-name lookup live in
//! [`crate::infrastructure`].

pub mod config;
pub mod schema;
pub mod update;

pub use config::{
    ApiConfig, ComputeNodeConfig, ContractConfig, HubConfig, LogConfig, McsConfig,
    RegistryConfig, RpcConfig, UbiConfig, DEFAULT_RPC,
};
pub use schema::{validate_required, DeploymentMode, FieldPath, PresenceMap, SchemaError};
pub use update::ConfigUpdate;
