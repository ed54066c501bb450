//! Storage infrastructure: configuration file persistence.
//!
//! - `config`    reads and writes `config.toml` through `serde` + `toml`.
//! - `metadata`  records which keys a decoded document actually contained.
//! - `bootstrap` lays out a fresh repository from the bundled templates.
//! - `error`     the [`ConfigError`] shared by all of the above.

pub mod bootstrap;
pub mod config;
pub mod error;
pub mod metadata;

pub use bootstrap::generate_default_tree;
pub use config::{config_file_path, read_config_file, write_config_file, CONFIG_FILE_NAME};
pub use error::ConfigError;
pub use metadata::DecodeMetadata;
