//! Application identity and manifest placeholder models.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::domain::error::InvalidApplicationId;

/// Well-known keys consumed from the environment file.
pub mod placeholder_keys {
    /// Application/package identifier string.
    pub const PAGE: &str = "PAGE";
    /// Opaque Kakao SDK credential injected into the manifest.
    pub const KAKAO_NATIVE_APP_KEY: &str = "KAKAO_NATIVE_APP_KEY";
    /// Implicit placeholder carrying the resolved application id, mirroring
    /// the one the Android manifest merger provides automatically.
    pub const APPLICATION_ID: &str = "applicationId";
}

/// Keys that must be present in the store before any build output exists.
pub const REQUIRED_KEYS: &[&str] = &[
    placeholder_keys::PAGE,
    placeholder_keys::KAKAO_NATIVE_APP_KEY,
];

/// A validated Android application/package identifier.
///
/// Grammar: two or more dot-separated segments, each starting with an ASCII
/// letter followed by letters, digits, or underscores. This is what the
/// platform tooling accepts for `applicationId`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ApplicationId(String);

impl ApplicationId {
    /// Parse and validate an identifier.
    pub fn parse(value: &str) -> Result<Self, InvalidApplicationId> {
        let reject = |reason| {
            Err(InvalidApplicationId {
                value: value.to_string(),
                reason,
            })
        };

        if value.is_empty() {
            return reject("identifier is empty");
        }

        let segments: Vec<&str> = value.split('.').collect();
        if segments.len() < 2 {
            return reject("identifier needs at least two dot-separated segments");
        }

        for segment in segments {
            let mut chars = segment.chars();
            match chars.next() {
                None => return reject("identifier has an empty segment"),
                Some(first) if !first.is_ascii_alphabetic() => {
                    return reject("segment must start with an ASCII letter");
                }
                Some(_) => {}
            }
            if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
                return reject("segment contains a character outside [A-Za-z0-9_]");
            }
        }

        Ok(Self(value.to_string()))
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Named substitution variables handed to manifest templating.
///
/// Order is deterministic (sorted by name) so rendered artifacts and JSON
/// documents are reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ManifestPlaceholders {
    values: BTreeMap<String, String>,
}

impl ManifestPlaceholders {
    /// Create an empty placeholder map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a placeholder, replacing any previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    /// Value for a placeholder name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Whether a placeholder is defined.
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Placeholder names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Name-value pairs in sorted name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of placeholders.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the map is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
