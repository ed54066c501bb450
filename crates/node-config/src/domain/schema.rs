//! Required-field schema and its evaluation.
//!
//! A schema is a static list of [`FieldPath`]s.  Each entry names either a
//! whole section (`["HUB"]`) or a key inside a section (`["HUB",
//! "ServerUrl"]`).  The deployment mode picks which list applies; evaluation
//! is generic over anything that can answer "was this path present in the
//! source document?" ([`PresenceMap`]).
//!
//! Presence is deliberately distinct from value: `UbiTask = false` is a
//! *present* key even though it equals the zero value.

use std::fmt;

use thiserror::Error;

/// Error returned when a document does not satisfy a required-field schema.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// A required section or key was absent from the source document.
    #[error("required field {path} is missing (mode: {mode})")]
    MissingField {
        path: FieldPath,
        mode: DeploymentMode,
    },
}

/// Dotted path of a section or of a key inside a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldPath {
    pub section: &'static str,
    pub key: Option<&'static str>,
}

impl FieldPath {
    /// Path naming a whole section.
    pub const fn section(section: &'static str) -> Self {
        Self { section, key: None }
    }

    /// Path naming a key inside a section.
    pub const fn key(section: &'static str, key: &'static str) -> Self {
        Self {
            section,
            key: Some(key),
        }
    }

    /// Path segments in document order.
    pub fn segments(&self) -> Vec<&'static str> {
        match self.key {
            Some(key) => vec![self.section, key],
            None => vec![self.section],
        }
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.key {
            Some(key) => write!(f, "{}.{}", self.section, key),
            None => f.write_str(self.section),
        }
    }
}

/// Answers whether a key path was present in a decoded document.
pub trait PresenceMap {
    fn is_defined(&self, path: &[&str]) -> bool;
}

/// Deployment mode of the node, selecting the required-field schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeploymentMode {
    /// Node runs on its own, without registry or full contract wiring.
    Standalone,
    /// Node is wired into every external service; all sections required.
    Integrated,
}

impl DeploymentMode {
    /// Maps the agent's `standalone` flag onto a mode.
    pub fn from_standalone(standalone: bool) -> Self {
        if standalone {
            Self::Standalone
        } else {
            Self::Integrated
        }
    }

    /// Required-field schema of this mode.
    pub fn required_fields(self) -> &'static [FieldPath] {
        match self {
            Self::Standalone => STANDALONE_REQUIRED,
            Self::Integrated => INTEGRATED_REQUIRED,
        }
    }
}

impl fmt::Display for DeploymentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Standalone => f.write_str("standalone"),
            Self::Integrated => f.write_str("integrated"),
        }
    }
}

// ── Schemas ───────────────────────────────────────────────────────────────────

/// Fields required when the node runs wired into every external service.
pub const INTEGRATED_REQUIRED: &[FieldPath] = &[
    FieldPath::section("API"),
    FieldPath::section("LOG"),
    FieldPath::section("UBI"),
    FieldPath::section("HUB"),
    FieldPath::section("MCS"),
    FieldPath::section("Registry"),
    FieldPath::section("RPC"),
    FieldPath::section("CONTRACT"),
    FieldPath::key("API", "MultiAddress"),
    FieldPath::key("API", "Domain"),
    FieldPath::key("API", "RedisUrl"),
    FieldPath::key("LOG", "CrtFile"),
    FieldPath::key("LOG", "KeyFile"),
    FieldPath::key("UBI", "UbiTask"),
    FieldPath::key("UBI", "UbiEnginePk"),
    FieldPath::key("UBI", "UbiUrl"),
    FieldPath::key("HUB", "ServerUrl"),
    FieldPath::key("HUB", "AccessToken"),
    FieldPath::key("HUB", "WalletAddress"),
    FieldPath::key("MCS", "ApiKey"),
    FieldPath::key("MCS", "BucketName"),
    FieldPath::key("MCS", "Network"),
    FieldPath::key("MCS", "FileCachePath"),
    FieldPath::key("RPC", "SWAN_TESTNET"),
    FieldPath::key("CONTRACT", "SWAN_CONTRACT"),
    FieldPath::key("CONTRACT", "SWAN_COLLATERAL_CONTRACT"),
];

/// Fields required when the node runs standalone.
pub const STANDALONE_REQUIRED: &[FieldPath] = &[
    FieldPath::section("API"),
    FieldPath::section("UBI"),
    FieldPath::section("HUB"),
    FieldPath::key("API", "MultiAddress"),
    FieldPath::key("API", "RedisUrl"),
    FieldPath::key("UBI", "UbiTask"),
    FieldPath::key("UBI", "UbiEnginePk"),
    FieldPath::key("UBI", "UbiUrl"),
    FieldPath::key("RPC", "SWAN_TESTNET"),
    FieldPath::key("CONTRACT", "SWAN_CONTRACT"),
    FieldPath::key("CONTRACT", "SWAN_COLLATERAL_CONTRACT"),
];

/// Checks `presence` against the schema of `mode`.
///
/// Entries are checked in schema order and the first absent one is reported.
///
/// # Errors
///
/// Returns [`SchemaError::MissingField`] naming the first absent path.
pub fn validate_required(
    presence: &impl PresenceMap,
    mode: DeploymentMode,
) -> Result<(), SchemaError> {
    match mode
        .required_fields()
        .iter()
        .find(|path| !presence.is_defined(&path.segments()))
    {
        Some(path) => Err(SchemaError::MissingField { path: *path, mode }),
        None => Ok(()),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    /// Presence map backed by a set of dotted paths.
    struct DottedPaths(HashSet<String>);

    impl DottedPaths {
        fn all_of(mode: DeploymentMode) -> Self {
            Self(
                mode.required_fields()
                    .iter()
                    .map(ToString::to_string)
                    .collect(),
            )
        }
    }

    impl PresenceMap for DottedPaths {
        fn is_defined(&self, path: &[&str]) -> bool {
            self.0.contains(&path.join("."))
        }
    }

    #[test]
    fn test_field_path_display_is_dotted() {
        assert_eq!(FieldPath::section("HUB").to_string(), "HUB");
        assert_eq!(FieldPath::key("HUB", "ServerUrl").to_string(), "HUB.ServerUrl");
    }

    #[test]
    fn test_from_standalone_selects_mode() {
        assert_eq!(DeploymentMode::from_standalone(true), DeploymentMode::Standalone);
        assert_eq!(DeploymentMode::from_standalone(false), DeploymentMode::Integrated);
    }

    #[test]
    fn test_standalone_schema_is_smaller_than_integrated() {
        assert_eq!(STANDALONE_REQUIRED.len(), 11);
        assert_eq!(INTEGRATED_REQUIRED.len(), 26);
        // Standalone does not require the registry or log sections.
        assert!(!STANDALONE_REQUIRED.contains(&FieldPath::section("Registry")));
        assert!(!STANDALONE_REQUIRED.contains(&FieldPath::section("LOG")));
    }

    #[test]
    fn test_validate_accepts_complete_presence_in_both_modes() {
        for mode in [DeploymentMode::Standalone, DeploymentMode::Integrated] {
            let presence = DottedPaths::all_of(mode);
            assert_eq!(validate_required(&presence, mode), Ok(()));
        }
    }

    #[test]
    fn test_validate_reports_each_missing_path() {
        for mode in [DeploymentMode::Standalone, DeploymentMode::Integrated] {
            for missing in mode.required_fields() {
                // Arrange
                let mut presence = DottedPaths::all_of(mode);
                presence.0.remove(&missing.to_string());

                // Act
                let result = validate_required(&presence, mode);

                // Assert
                assert_eq!(
                    result,
                    Err(SchemaError::MissingField {
                        path: *missing,
                        mode
                    }),
                    "mode {mode}, dropped {missing}"
                );
            }
        }
    }

    #[test]
    fn test_validate_reports_first_missing_in_schema_order() {
        let presence = DottedPaths(HashSet::new());
        let err = validate_required(&presence, DeploymentMode::Integrated).unwrap_err();
        assert_eq!(
            err,
            SchemaError::MissingField {
                path: FieldPath::section("API"),
                mode: DeploymentMode::Integrated
            }
        );
    }

    #[test]
    fn test_missing_field_error_message_names_path() {
        let err = SchemaError::MissingField {
            path: FieldPath::key("RPC", "SWAN_TESTNET"),
            mode: DeploymentMode::Standalone,
        };
        assert_eq!(
            err.to_string(),
            "required field RPC.SWAN_TESTNET is missing (mode: standalone)"
        );
    }
}
