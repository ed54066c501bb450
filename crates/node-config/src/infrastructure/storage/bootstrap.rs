//! First-run generation of the repository directory tree.
//!
//! Running the bootstrap produces:
//!
//! ```text
//! <root>/config.toml                  from the bundled default config
//! <root>/store_data/data/             cache-service data volume
//! <root>/store_data/conf/redis.conf   from the bundled default redis.conf
//! ```
//!
//! Existing files are never overwritten, so running it again (or against a
//! repository the operator already edited) changes nothing.
//!
//! The default `config.toml` is not copied verbatim: the bundled template is
//! decoded into [`ComputeNodeConfig`] and re-encoded, which strips its
//! comments and canonicalizes key order and formatting.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::config::{config_file_path, decode_config, encode_config};
use super::error::ConfigError;
use crate::domain::ComputeNodeConfig;

/// Bundled default node configuration.
pub const DEFAULT_CONFIG_TEMPLATE: &str = include_str!("../../../assets/config.toml");

/// Bundled default Redis configuration.
pub const DEFAULT_REDIS_CONF: &str = include_str!("../../../assets/redis.conf");

/// Data directory of the cache service, relative to the repository root.
pub const DATA_DIR: &str = "store_data/data";

/// Config directory of the cache service, relative to the repository root.
pub const CONF_DIR: &str = "store_data/conf";

/// File name of the cache-service config inside [`CONF_DIR`].
pub const REDIS_CONF_FILE_NAME: &str = "redis.conf";

/// Resolves the cache-service config path inside the repository `root`.
pub fn redis_conf_path(root: &Path) -> PathBuf {
    root.join(CONF_DIR).join(REDIS_CONF_FILE_NAME)
}

/// Decodes the bundled default config template.
///
/// # Errors
///
/// Returns [`ConfigError::Template`] if the bundled template is malformed.
pub fn default_config() -> Result<ComputeNodeConfig, ConfigError> {
    decode_config(DEFAULT_CONFIG_TEMPLATE)
        .map(|(config, _)| config)
        .map_err(|source| ConfigError::Template {
            name: "config.toml",
            source,
        })
}

/// Creates the default repository tree under `root`.
///
/// Missing directories are created; missing files are written from the
/// bundled templates.  Existing files are left byte-for-byte untouched.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system failures other than a target
/// already existing, and [`ConfigError::Template`] / [`ConfigError::Serialize`]
/// if the default config cannot be rendered.
pub fn generate_default_tree(root: &Path) -> Result<(), ConfigError> {
    for dir in [DATA_DIR, CONF_DIR] {
        let dir = root.join(dir);
        fs::create_dir_all(&dir).map_err(ConfigError::io("create directory", &dir))?;
    }

    write_if_absent(&redis_conf_path(root), DEFAULT_REDIS_CONF)?;

    let config_path = config_file_path(root);
    if config_path.exists() {
        debug!("{} already exists, keeping it", config_path.display());
        return Ok(());
    }
    let rendered = encode_config(&default_config()?)?;
    write_if_absent(&config_path, &rendered)
}

/// Writes `content` to a new file at `path`; does nothing if `path` exists.
fn write_if_absent(path: &Path, content: &str) -> Result<(), ConfigError> {
    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            debug!("{} already exists, keeping it", path.display());
            return Ok(());
        }
        Err(e) => return Err(ConfigError::io("create", path)(e)),
    };
    file.write_all(content.as_bytes())
        .map_err(ConfigError::io("write", path))?;
    info!("wrote default {}", path.display());
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
