//! TOML persistence of [`ComputeNodeConfig`].
//!
//! Reads and writes the node's `config.toml`, which lives at the root of the
//! node's repository directory:
//!
//! ```text
//! <repo>/
//!   config.toml
//!   store_data/
//!     data/
//!     conf/redis.conf
//! ```
//!
//! Decoding goes through an intermediate `toml::Table` so the presence of
//! every key can be recorded in [`DecodeMetadata`] before `serde` fills the
//! gaps with zero values.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use toml::{Table, Value};
use tracing::debug;

use super::error::ConfigError;
use super::metadata::DecodeMetadata;
use crate::domain::ComputeNodeConfig;

/// File name of the node configuration inside the repository directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Resolves the config file path inside the repository directory `root`.
pub fn config_file_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE_NAME)
}

/// Decodes TOML text into a config plus the metadata of keys present.
///
/// # Errors
///
/// Returns the TOML error for malformed text or values of the wrong type.
pub fn decode_config(text: &str) -> Result<(ComputeNodeConfig, DecodeMetadata), toml::de::Error> {
    let table: Table = text.parse()?;
    let metadata = DecodeMetadata::from_table(&table);
    let config = Value::Table(table).try_into()?;
    Ok((config, metadata))
}

/// Encodes a config as TOML text.
///
/// # Errors
///
/// Returns [`ConfigError::Serialize`] if serialization fails.
pub fn encode_config(config: &ComputeNodeConfig) -> Result<String, ConfigError> {
    Ok(toml::to_string_pretty(config)?)
}

/// Key paths that [`ComputeNodeConfig`] knows how to decode.
///
/// Derived from the serialized form of the default config, which emits every
/// section and every key.
pub fn known_keys() -> &'static DecodeMetadata {
    static KNOWN: OnceLock<DecodeMetadata> = OnceLock::new();
    KNOWN.get_or_init(|| match Value::try_from(ComputeNodeConfig::default()) {
        Ok(Value::Table(table)) => DecodeMetadata::from_table(&table),
        _ => DecodeMetadata::default(),
    })
}

/// Reads and decodes the config file at `path`.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] if the file cannot be read and
/// [`ConfigError::Parse`] if its TOML is malformed.
pub fn read_config_file(path: &Path) -> Result<(ComputeNodeConfig, DecodeMetadata), ConfigError> {
    let content = std::fs::read_to_string(path).map_err(ConfigError::io("read", path))?;
    let decoded = decode_config(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("decoded {} keys from {}", decoded.1.len(), path.display());
    Ok(decoded)
}

/// Writes `config` to `path`, creating or truncating the file.
///
/// # Errors
///
/// Returns [`ConfigError::Serialize`] if serialization fails or
/// [`ConfigError::Io`] for file-system failures.
pub fn write_config_file(path: &Path, config: &ComputeNodeConfig) -> Result<(), ConfigError> {
    let content = encode_config(config)?;
    let mut file = File::create(path).map_err(ConfigError::io("create", path))?;
    file.write_all(content.as_bytes())
        .map_err(ConfigError::io("write", path))?;
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use crate::domain::PresenceMap;

    fn scratch_dir() -> PathBuf {
        let dir = std::env::temp_dir().join(format!("node_config_test_{}", Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_config_file_path_ends_with_config_toml() {
        let path = config_file_path(Path::new("/repo"));
        assert_eq!(path, PathBuf::from("/repo/config.toml"));
    }

    #[test]
    fn test_decode_config_records_presence_separately_from_values() {
        // Arrange
        let text = "[UBI]\nUbiTask = false\n";

        // Act
        let (cfg, meta) = decode_config(text).expect("decode");

        // Assert
        assert!(!cfg.ubi.ubi_task);
        assert!(meta.is_defined(&["UBI", "UbiTask"]));
        assert!(!meta.is_defined(&["UBI", "UbiUrl"]));
    }

    #[test]
    fn test_decode_config_rejects_invalid_toml() {
        assert!(decode_config("[[[ not valid toml").is_err());
    }

    #[test]
    fn test_known_keys_cover_every_section_and_renamed_key() {
        let known = known_keys();
        assert!(known.is_defined(&["Registry", "UserName"]));
        assert!(known.is_defined(&["RPC", "SWAN_MAINNET"]));
        assert!(known.is_defined(&["CONTRACT", "SWAN_COLLATERAL_CONTRACT"]));
        assert!(known.is_defined(&["HUB", "BalanceThreshold"]));
        // 8 sections + 30 keys.
        assert_eq!(known.len(), 38);
    }

    #[test]
    fn test_write_then_read_round_trip_via_temp_dir() {
        // Arrange
        let dir = scratch_dir();
        let path = config_file_path(&dir);
        let mut cfg = ComputeNodeConfig::default();
        cfg.api.port = 12345;
        cfg.hub.balance_threshold = 0.25;
        cfg.registry.user_name = "admin".to_string();

        // Act
        write_config_file(&path, &cfg).unwrap();
        let (loaded, meta) = read_config_file(&path).unwrap();

        // Assert
        assert_eq!(loaded, cfg);
        // Every key is written, including zero values.
        assert_eq!(meta, *known_keys());

        // Cleanup
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_read_missing_file_returns_io_error_with_path() {
        let dir = scratch_dir();
        let path = config_file_path(&dir);

        let err = read_config_file(&path).unwrap_err();

        assert!(matches!(err, ConfigError::Io { op: "read", .. }));
        assert!(err.to_string().contains("config.toml"));
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_read_malformed_file_returns_parse_error_with_path() {
        let dir = scratch_dir();
        let path = config_file_path(&dir);
        std::fs::write(&path, "[API\nPort = 1").unwrap();

        let err = read_config_file(&path).unwrap_err();

        match err {
            ConfigError::Parse { path: p, .. } => assert_eq!(p, path),
            other => panic!("expected parse error, got {other:?}"),
        }
        std::fs::remove_dir_all(&dir).ok();
    }
}
