//! Build profile models.
//!
//! The profile is the declarative counterpart of the environment file: SDK
//! levels, version info, build types, and where the environment file lives.
//! All fields carry defaults so an empty `forge.yaml` is a valid profile.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Top-level build profile for the application module.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct BuildProfile {
    /// Android module settings
    #[serde(default)]
    pub android: AndroidProfile,

    /// Environment file location settings
    #[serde(default)]
    pub env: EnvFileSettings,
}

/// Declarative Android settings, the typed form of the module's build block.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct AndroidProfile {
    /// SDK level the module compiles against
    #[serde(default = "default_compile_sdk")]
    pub compile_sdk: u32,

    /// Lowest supported SDK level
    #[serde(default = "default_min_sdk")]
    pub min_sdk: u32,

    /// SDK level the module targets
    #[serde(default = "default_target_sdk")]
    pub target_sdk: u32,

    /// Pinned NDK toolchain version
    #[serde(default = "default_ndk_version")]
    pub ndk_version: String,

    /// JVM bytecode target for Java/Kotlin sources
    #[serde(default = "default_jvm_target")]
    pub jvm_target: u32,

    /// Monotonic integer version
    #[serde(default = "default_version_code")]
    pub version_code: u32,

    /// Human-readable version string
    #[serde(default = "default_version_name")]
    pub version_name: String,

    /// Declared signing config names
    #[serde(default = "default_signing_configs")]
    pub signing_configs: Vec<String>,

    /// Build types, each delegating to a signing config by name
    #[serde(default = "default_build_types")]
    pub build_types: BTreeMap<String, BuildTypeProfile>,
}

const fn default_compile_sdk() -> u32 {
    35
}

const fn default_min_sdk() -> u32 {
    21
}

const fn default_target_sdk() -> u32 {
    35
}

fn default_ndk_version() -> String {
    "27.0.12077973".to_string()
}

const fn default_jvm_target() -> u32 {
    11
}

const fn default_version_code() -> u32 {
    1
}

fn default_version_name() -> String {
    "1.0.0".to_string()
}

fn default_signing_configs() -> Vec<String> {
    vec!["debug".to_string()]
}

fn default_build_types() -> BTreeMap<String, BuildTypeProfile> {
    // Release ships with the debug keys so a release run works out of the
    // box. TODO: point release at a dedicated signing config.
    BTreeMap::from([
        ("debug".to_string(), BuildTypeProfile::signed_by("debug")),
        ("release".to_string(), BuildTypeProfile::signed_by("debug")),
    ])
}

impl Default for AndroidProfile {
    fn default() -> Self {
        Self {
            compile_sdk: default_compile_sdk(),
            min_sdk: default_min_sdk(),
            target_sdk: default_target_sdk(),
            ndk_version: default_ndk_version(),
            jvm_target: default_jvm_target(),
            version_code: default_version_code(),
            version_name: default_version_name(),
            signing_configs: default_signing_configs(),
            build_types: default_build_types(),
        }
    }
}

/// A named build type's wiring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct BuildTypeProfile {
    /// Name of the signing config this build type resolves to
    pub signing_config: String,
}

impl BuildTypeProfile {
    /// Build type delegating to the named signing config.
    pub fn signed_by(signing_config: impl Into<String>) -> Self {
        Self {
            signing_config: signing_config.into(),
        }
    }
}

/// Where the environment file is expected on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct EnvFileSettings {
    /// File name of the environment file
    #[serde(default = "default_env_file_name")]
    pub file_name: String,

    /// Look in the parent of the project root, so one secrets file serves
    /// the whole app tree
    #[serde(default = "default_search_parent")]
    pub search_parent: bool,
}

fn default_env_file_name() -> String {
    ".env".to_string()
}

const fn default_search_parent() -> bool {
    true
}

impl Default for EnvFileSettings {
    fn default() -> Self {
        Self {
            file_name: default_env_file_name(),
            search_parent: default_search_parent(),
        }
    }
}
