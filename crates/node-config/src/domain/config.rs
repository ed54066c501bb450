//! Typed schema of the compute node `config.toml`.
//!
//! Every section and every key is optional on the wire.  A key that is absent
//! from the document decodes to the zero value of its type (`""`, `0`,
//! `false`, `0.0`); whether a key was actually *present* is tracked
//! separately by the storage layer's decode metadata and checked against the
//! required-field schema in [`super::schema`].
//!
//! # Key naming
//!
//! Section names are upper-case (`[API]`, `[HUB]`, ...) except `[Registry]`,
//! and keys are PascalCase.  Two sections break the PascalCase rule and carry
//! screaming-snake names instead:
//!
//! ```toml
//! [RPC]
//! SWAN_TESTNET = "https://rpc-proxima.swanchain.io"
//! SWAN_MAINNET = ""
//!
//! [CONTRACT]
//! SWAN_CONTRACT = "0x..."
//! SWAN_COLLATERAL_CONTRACT = "0x..."
//! ```

use serde::{Deserialize, Serialize};

/// RPC name resolved by [`ComputeNodeConfig::rpc_endpoint`] to the testnet
/// endpoint.
pub const DEFAULT_RPC: &str = "swan";

// ── Config schema types ───────────────────────────────────────────────────────

/// Root of the compute node configuration document.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ComputeNodeConfig {
    #[serde(rename = "API")]
    pub api: ApiConfig,
    #[serde(rename = "UBI")]
    pub ubi: UbiConfig,
    #[serde(rename = "LOG")]
    pub log: LogConfig,
    #[serde(rename = "HUB")]
    pub hub: HubConfig,
    #[serde(rename = "MCS")]
    pub mcs: McsConfig,
    #[serde(rename = "Registry")]
    pub registry: RegistryConfig,
    #[serde(rename = "RPC")]
    pub rpc: RpcConfig,
    #[serde(rename = "CONTRACT")]
    pub contract: ContractConfig,
}

/// Listen address, identity and cache-service connection of the node.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "PascalCase")]
pub struct ApiConfig {
    /// Port the node's web server listens on.
    pub port: u16,
    /// libp2p multi-address announced to the network.
    pub multi_address: String,
    pub domain: String,
    /// Display name of the node; falls back to the host name on update.
    pub node_name: String,
    /// Connection URL of the Redis cache service.
    pub redis_url: String,
    pub redis_password: String,
    /// Comma-separated wallets allowed to submit jobs.  Empty allows all.
    pub wallet_white_list: String,
}

/// Task-verification (UBI) feature settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "PascalCase")]
pub struct UbiConfig {
    pub ubi_task: bool,
    pub ubi_engine_pk: String,
    pub ubi_url: String,
}

/// TLS material for the log server.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "PascalCase")]
pub struct LogConfig {
    pub crt_file: String,
    pub key_file: String,
}

/// Connection to the remote coordinator (orchestrator hub).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "PascalCase")]
pub struct HubConfig {
    pub wallet_address: String,
    pub server_url: String,
    pub access_token: String,
    /// Minimum wallet balance required before jobs are accepted.
    pub balance_threshold: f64,
    pub orchestrator_pk: String,
    /// Whether job signatures from the orchestrator are verified.
    pub verify_sign: bool,
}

/// Object-storage client settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "PascalCase")]
pub struct McsConfig {
    pub api_key: String,
    pub access_token: String,
    pub bucket_name: String,
    pub network: String,
    pub file_cache_path: String,
}

/// Container registry credentials.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "PascalCase")]
pub struct RegistryConfig {
    pub server_address: String,
    pub user_name: String,
    pub password: String,
}

/// Named blockchain RPC endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RpcConfig {
    #[serde(rename = "SWAN_TESTNET")]
    pub swan_testnet: String,
    #[serde(rename = "SWAN_MAINNET")]
    pub swan_mainnet: String,
}

/// On-chain contract addresses.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ContractConfig {
    #[serde(rename = "SWAN_CONTRACT")]
    pub swan_token: String,
    #[serde(rename = "SWAN_COLLATERAL_CONTRACT")]
    pub collateral: String,
}

impl ComputeNodeConfig {
    /// Resolves a named RPC endpoint.
    ///
    /// Only [`DEFAULT_RPC`] is recognised; it maps to the testnet endpoint.
    /// Any other name yields an empty string.  A miss is not an error.
    pub fn rpc_endpoint(&self, name: &str) -> &str {
        match name {
            DEFAULT_RPC => &self.rpc.swan_testnet,
            _ => "",
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
