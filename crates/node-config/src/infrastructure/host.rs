//! Host-name sources for the node-name fallback.

use crate::application::update_config::HostNameSource;

/// Reads the host name from the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemHostName;

impl HostNameSource for SystemHostName {
    fn host_name(&self) -> std::io::Result<String> {
        hostname::get()?.into_string().map_err(|raw| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("host name is not valid UTF-8: {raw:?}"),
            )
        })
    }
}

/// Host-name source returning a fixed value, or failing on demand.
///
/// Lets tests exercise the fallback without depending on the machine they
/// run on.
#[derive(Debug, Clone, Default)]
pub struct FixedHostName {
    name: Option<String>,
}

impl FixedHostName {
    /// Source that always answers `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }

    /// Source whose lookup always fails.
    pub fn unavailable() -> Self {
        Self { name: None }
    }
}

impl HostNameSource for FixedHostName {
    fn host_name(&self) -> std::io::Result<String> {
        self.name.clone().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::NotFound, "host name unavailable")
        })
    }
}
