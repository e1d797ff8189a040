//! Environment store domain model.
//!
//! The store is built once by the loader at the start of evaluation and is
//! immutable afterwards: exactly one writer, finished before any reader runs.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::error::EnvError;

/// A single key-value pair sourced from one line of a properties file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnvEntry {
    pub key: String,
    pub value: String,
}

impl EnvEntry {
    /// Create an entry.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Immutable mapping from key to value, plus the path it was loaded from.
///
/// Keys are unique; when the source file assigns a key more than once, the
/// last assignment wins. Iteration order is deterministic (sorted by key).
#[derive(Debug, Clone, Serialize)]
pub struct EnvStore {
    entries: BTreeMap<String, String>,
    source: PathBuf,
}

impl EnvStore {
    /// Build a store from parsed entries. Later entries override earlier
    /// ones with the same key.
    pub fn from_entries(
        source: impl Into<PathBuf>,
        entries: impl IntoIterator<Item = EnvEntry>,
    ) -> Self {
        let mut map = BTreeMap::new();
        for entry in entries {
            map.insert(entry.key, entry.value);
        }
        Self {
            entries: map,
            source: source.into(),
        }
    }

    /// Look up a key, failing when it is absent.
    ///
    /// There is no default substitution: these values feed application
    /// identity and manifest injection, where a silently missing value
    /// would produce a broken package identifier.
    pub fn get(&self, key: &str) -> Result<&str, EnvError> {
        self.entries
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| EnvError::MissingKey {
                key: key.to_string(),
                path: self.source.clone(),
            })
    }

    /// Key-value pairs in sorted key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Path of the file this store was loaded from.
    pub fn source(&self) -> &Path {
        &self.source
    }
}
