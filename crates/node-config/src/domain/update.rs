//! Partial overrides applied to an existing configuration document.

use super::config::ComputeNodeConfig;

/// Field overrides requested by an administrative `init`/update command.
///
/// Blank strings and a zero port mean "no override", except for the node
/// name, which falls back to the local host name when blank.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigUpdate {
    pub multi_address: String,
    pub node_name: String,
    pub port: u16,
}

impl ConfigUpdate {
    /// Applies the overrides to `cfg`.
    ///
    /// `host_name` is only invoked when the requested node name is blank.
    /// Non-blank values are stored exactly as given, without trimming.
    ///
    /// # Errors
    ///
    /// Propagates the error of `host_name`; `cfg` is left untouched in that
    /// case.
    pub fn apply<E>(
        &self,
        cfg: &mut ComputeNodeConfig,
        host_name: impl FnOnce() -> Result<String, E>,
    ) -> Result<(), E> {
        let node_name = if is_blank(&self.node_name) {
            host_name()?
        } else {
            self.node_name.clone()
        };

        if multi_address_changed(&cfg.api.multi_address, &self.multi_address) {
            cfg.api.multi_address = self.multi_address.clone();
        }
        cfg.api.node_name = node_name;
        if self.port != 0 {
            cfg.api.port = self.port;
        }
        Ok(())
    }
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// `true` when `requested` is non-blank and not a case-insensitive match of
/// `current` after trimming both.
fn multi_address_changed(current: &str, requested: &str) -> bool {
    let requested = requested.trim();
    !requested.is_empty() && requested.to_lowercase() != current.trim().to_lowercase()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
