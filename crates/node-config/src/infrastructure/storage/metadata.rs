//! Decode metadata: which keys were actually present in a TOML document.
//!
//! `serde` fills absent keys with zero values, so after decoding there is no
//! way to tell `UbiTask = false` from a missing `UbiTask`.  The document is
//! therefore parsed into a `toml::Table` first and every key path is recorded
//! before the table is handed to `serde`.

use std::collections::BTreeSet;

use toml::{Table, Value};

use crate::domain::PresenceMap;

/// Set of key paths present in a decoded document.
///
/// Every table on the way to a key is recorded too, so `["HUB"]` is defined
/// whenever `["HUB", "ServerUrl"]` is.  Arrays are not descended into.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodeMetadata {
    keys: BTreeSet<Vec<String>>,
}

impl DecodeMetadata {
    /// Records every key path of `table`.
    pub fn from_table(table: &Table) -> Self {
        let mut keys = BTreeSet::new();
        collect_keys(table, &mut Vec::new(), &mut keys);
        Self { keys }
    }

    /// Key paths in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &[String]> {
        self.keys.iter().map(Vec::as_slice)
    }

    /// Number of recorded key paths.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Dotted key paths present here but absent from `known`.
    ///
    /// Only the outermost unknown path is reported: an unknown table is
    /// listed once, not once per key inside it.
    pub fn undecoded(&self, known: &DecodeMetadata) -> Vec<String> {
        let mut unknown: Vec<&Vec<String>> = Vec::new();
        for key in &self.keys {
            if known.keys.contains(key) {
                continue;
            }
            if unknown.iter().any(|parent| key.starts_with(parent)) {
                continue;
            }
            unknown.push(key);
        }
        unknown.into_iter().map(|k| k.join(".")).collect()
    }
}

impl PresenceMap for DecodeMetadata {
    fn is_defined(&self, path: &[&str]) -> bool {
        let path: Vec<String> = path.iter().map(|s| (*s).to_string()).collect();
        self.keys.contains(&path)
    }
}

fn collect_keys(table: &Table, prefix: &mut Vec<String>, out: &mut BTreeSet<Vec<String>>) {
    for (key, value) in table {
        prefix.push(key.clone());
        out.insert(prefix.clone());
        if let Value::Table(inner) = value {
            collect_keys(inner, prefix, out);
        }
        prefix.pop();
    }
}
