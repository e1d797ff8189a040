use std::path::Path;

use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use thiserror::Error;

use crate::domain::models::BuildProfile;

/// JVM bytecode targets the toolchain accepts.
const SUPPORTED_JVM_TARGETS: [u32; 4] = [8, 11, 17, 21];

/// Profile validation error types
#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("Invalid compile_sdk: {0}. Must be at least min_sdk ({1})")]
    CompileSdkBelowMin(u32, u32),

    #[error("Invalid target_sdk: {0}. Must be at least min_sdk ({1})")]
    TargetSdkBelowMin(u32, u32),

    #[error("Invalid jvm_target: {0}. Must be one of: 8, 11, 17, 21")]
    InvalidJvmTarget(u32),

    #[error("Invalid version_code: {0}. Must be at least 1")]
    InvalidVersionCode(u32),

    #[error("Version name cannot be empty")]
    EmptyVersionName,

    #[error("NDK version cannot be empty")]
    EmptyNdkVersion,

    #[error("Environment file name cannot be empty")]
    EmptyEnvFileName,

    #[error("Build type '{0}' references unknown signing config '{1}'")]
    UnknownSigningConfig(String, String),

    #[error("Profile validation failed: {0}")]
    ValidationFailed(String),
}

/// Profile loader with hierarchical merging
pub struct ProfileLoader;

impl ProfileLoader {
    /// Load the build profile for a project with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. forge.yaml in the project root (optional)
    /// 3. Environment variables (FORGE_* prefix, highest priority)
    ///
    /// # Errors
    /// Returns an error when extraction fails or the merged profile does not
    /// pass validation.
    pub fn load(project_root: &Path) -> Result<BuildProfile> {
        let profile: BuildProfile = Figment::new()
            // 1. Start with programmatic defaults
            .merge(Serialized::defaults(BuildProfile::default()))
            // 2. Merge the project profile (optional)
            .merge(Yaml::file(project_root.join("forge.yaml")))
            // 3. Merge environment variables (highest priority)
            .merge(Env::prefixed("FORGE_").split("__"))
            .extract()
            .context("Failed to extract build profile from figment")?;

        Self::validate(&profile)?;
        Ok(profile)
    }

    /// Validate a profile after loading
    ///
    /// # Errors
    /// Returns the first [`ProfileError`] found.
    pub fn validate(profile: &BuildProfile) -> Result<(), ProfileError> {
        let android = &profile.android;

        // Validate SDK levels
        if android.compile_sdk < android.min_sdk {
            return Err(ProfileError::CompileSdkBelowMin(
                android.compile_sdk,
                android.min_sdk,
            ));
        }

        if android.target_sdk < android.min_sdk {
            return Err(ProfileError::TargetSdkBelowMin(
                android.target_sdk,
                android.min_sdk,
            ));
        }

        // Validate toolchain settings
        if !SUPPORTED_JVM_TARGETS.contains(&android.jvm_target) {
            return Err(ProfileError::InvalidJvmTarget(android.jvm_target));
        }

        if android.ndk_version.trim().is_empty() {
            return Err(ProfileError::EmptyNdkVersion);
        }

        // Validate version info
        if android.version_code == 0 {
            return Err(ProfileError::InvalidVersionCode(android.version_code));
        }

        if android.version_name.trim().is_empty() {
            return Err(ProfileError::EmptyVersionName);
        }

        // Validate signing configs
        for signing_config in &android.signing_configs {
            if signing_config.is_empty() {
                return Err(ProfileError::ValidationFailed(
                    "Signing config name cannot be empty".to_string(),
                ));
            }
        }

        // Validate build types: each must delegate to a declared signing config
        for (name, build_type) in &android.build_types {
            if name.is_empty() {
                return Err(ProfileError::ValidationFailed(
                    "Build type name cannot be empty".to_string(),
                ));
            }
            if !android
                .signing_configs
                .contains(&build_type.signing_config)
            {
                return Err(ProfileError::UnknownSigningConfig(
                    name.clone(),
                    build_type.signing_config.clone(),
                ));
            }
        }

        // Validate environment file settings
        if profile.env.file_name.trim().is_empty() {
            return Err(ProfileError::EmptyEnvFileName);
        }

        Ok(())
    }
}
