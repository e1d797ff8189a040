//! Manifest assembler
//!
//! Combines the environment store with the build profile into a
//! [`ResolvedBuildConfig`]. Every required key must be present and the
//! application id must parse; anything less aborts the assembly.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use crate::domain::error::AssemblyError;
use crate::domain::models::manifest::placeholder_keys;
use crate::domain::models::{
    AndroidProfile, ApplicationId, BuildProfile, EnvStore, ManifestPlaceholders, REQUIRED_KEYS,
};

/// The fully resolved build configuration for one module.
///
/// `namespace` and `application_id` both derive from the `PAGE` key; they are
/// carried separately because consumers set them independently.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedBuildConfig {
    /// Application id applied to the final artifact
    pub application_id: ApplicationId,

    /// Source namespace, same value as the application id
    pub namespace: ApplicationId,

    /// Android settings the profile resolved to
    pub android: AndroidProfile,

    /// Placeholders injected into the manifest
    pub placeholders: ManifestPlaceholders,

    /// Environment file the values came from
    pub env_path: PathBuf,

    /// When this configuration was assembled
    pub resolved_at: DateTime<Utc>,
}

/// Assembles resolved build configurations.
pub struct ManifestAssembler;

impl ManifestAssembler {
    /// Assemble a resolved build configuration from an environment store and
    /// a build profile.
    ///
    /// # Errors
    /// Returns [`AssemblyError::Env`] when a required key is missing from the
    /// store and [`AssemblyError::InvalidApplicationId`] when the `PAGE`
    /// value is not a well-formed application id.
    pub fn assemble(
        store: &EnvStore,
        profile: &BuildProfile,
    ) -> Result<ResolvedBuildConfig, AssemblyError> {
        // Fail on the first missing required key
        for key in REQUIRED_KEYS {
            store.get(key)?;
        }

        let application_id = ApplicationId::parse(store.get(placeholder_keys::PAGE)?)?;
        let app_key = store.get(placeholder_keys::KAKAO_NATIVE_APP_KEY)?;

        let mut placeholders = ManifestPlaceholders::new();
        placeholders.insert(placeholder_keys::KAKAO_NATIVE_APP_KEY, app_key);
        placeholders.insert(placeholder_keys::PAGE, application_id.as_str());
        placeholders.insert(placeholder_keys::APPLICATION_ID, application_id.as_str());

        // Placeholder values stay out of the logs; the app key is a secret
        info!(
            application_id = %application_id,
            placeholders = placeholders.len(),
            env_path = %store.source().display(),
            "manifest assembled"
        );

        Ok(ResolvedBuildConfig {
            application_id: application_id.clone(),
            namespace: application_id,
            android: profile.android.clone(),
            placeholders,
            env_path: store.source().to_path_buf(),
            resolved_at: Utc::now(),
        })
    }
}
