//! End-to-end tests for the resolution pipeline: profile, environment file,
//! assembly, and manifest rendering.

mod common;

use envforge::domain::models::EnvFileSettings;
use envforge::infrastructure::env::{resolver, EnvLoader};
use envforge::infrastructure::manifest::{ManifestAssembler, ManifestRenderer};
use envforge::infrastructure::profile::ProfileLoader;
use envforge::{AssemblyError, EnvError, RenderError};

use common::{complete_env, setup_project};

fn resolve_config(
    project_root: &std::path::Path,
) -> Result<envforge::ResolvedBuildConfig, AssemblyError> {
    let profile = ProfileLoader::load(project_root).expect("profile should load");
    let env_path = resolver::resolve(project_root, &profile.env);
    let store = EnvLoader::load(&env_path)?;
    ManifestAssembler::assemble(&store, &profile)
}

#[test]
fn test_full_pipeline_with_defaults() {
    let (_dir, project_root) = setup_project(complete_env());

    let config = resolve_config(&project_root).unwrap();

    assert_eq!(config.application_id.as_str(), "com.example.app");
    assert_eq!(config.namespace.as_str(), "com.example.app");
    assert_eq!(config.android.compile_sdk, 35);
    assert_eq!(config.android.ndk_version, "27.0.12077973");
    assert_eq!(config.placeholders.len(), 3);
}

#[test]
fn test_full_pipeline_with_project_profile() {
    let (_dir, project_root) = setup_project(complete_env());
    std::fs::write(
        project_root.join("forge.yaml"),
        "android:\n  min_sdk: 24\n  version_code: 3\n",
    )
    .unwrap();

    let config = resolve_config(&project_root).unwrap();

    assert_eq!(config.android.min_sdk, 24);
    assert_eq!(config.android.version_code, 3);
    assert_eq!(config.android.target_sdk, 35, "Default should persist");
}

#[test]
fn test_pipeline_aborts_on_missing_key() {
    let (_dir, project_root) = setup_project("PAGE=com.example.app\n");

    let err = resolve_config(&project_root).unwrap_err();
    match err {
        AssemblyError::Env(EnvError::MissingKey { key, .. }) => {
            assert_eq!(key, "KAKAO_NATIVE_APP_KEY");
        }
        other => panic!("expected missing key, got {other:?}"),
    }
}

#[test]
fn test_pipeline_aborts_on_invalid_application_id() {
    let (_dir, project_root) =
        setup_project("PAGE=single\nKAKAO_NATIVE_APP_KEY=abcdef1234567890\n");

    let err = resolve_config(&project_root).unwrap_err();
    assert!(matches!(err, AssemblyError::InvalidApplicationId(_)));
}

#[test]
fn test_last_assignment_wins_through_pipeline() {
    let (_dir, project_root) = setup_project(
        "PAGE=com.example.first\nKAKAO_NATIVE_APP_KEY=abcdef1234567890\nPAGE=com.example.second\n",
    );

    let config = resolve_config(&project_root).unwrap();
    assert_eq!(config.application_id.as_str(), "com.example.second");
}

#[test]
fn test_rendered_manifest_carries_resolved_values() {
    let (_dir, project_root) = setup_project(complete_env());
    let config = resolve_config(&project_root).unwrap();

    let template = r#"<manifest package="${applicationId}">
  <data android:scheme="kakao${KAKAO_NATIVE_APP_KEY}" android:host="oauth"/>
  <meta-data android:name="page" android:value="${PAGE}"/>
</manifest>
"#;

    let renderer = ManifestRenderer::new();
    let rendered = renderer.render(template, &config.placeholders).unwrap();

    assert!(rendered.contains(r#"package="com.example.app""#));
    assert!(rendered.contains("kakaoabcdef1234567890"));
    assert!(rendered.contains(r#"android:value="com.example.app""#));
    assert!(!rendered.contains("${"));
}

#[test]
fn test_render_rejects_placeholder_outside_contract() {
    let (_dir, project_root) = setup_project(complete_env());
    let config = resolve_config(&project_root).unwrap();

    let renderer = ManifestRenderer::new();
    let err = renderer
        .render("<meta-data android:value=\"${FACEBOOK_APP_ID}\"/>", &config.placeholders)
        .unwrap_err();

    match err {
        RenderError::UnresolvedPlaceholder(name) => assert_eq!(name, "FACEBOOK_APP_ID"),
        other => panic!("expected unresolved placeholder, got {other:?}"),
    }
}

#[test]
fn test_resolved_config_serializes_to_json() {
    let (_dir, project_root) = setup_project(complete_env());
    let config = resolve_config(&project_root).unwrap();

    let value = serde_json::to_value(&config).unwrap();

    assert_eq!(value["application_id"], "com.example.app");
    assert_eq!(value["namespace"], "com.example.app");
    assert_eq!(value["android"]["compile_sdk"], 35);
    assert_eq!(value["placeholders"]["PAGE"], "com.example.app");
    assert_eq!(
        value["placeholders"]["KAKAO_NATIVE_APP_KEY"],
        "abcdef1234567890"
    );
}

#[test]
fn test_explicit_env_file_override() {
    let (dir, project_root) = setup_project("PAGE=com.example.ignored\n");
    let override_path = dir.path().join(".env.ci");
    std::fs::write(&override_path, complete_env()).unwrap();

    let profile = ProfileLoader::load(&project_root).unwrap();
    let store = EnvLoader::load(&override_path).unwrap();
    let config = ManifestAssembler::assemble(&store, &profile).unwrap();

    assert_eq!(config.application_id.as_str(), "com.example.app");
    assert_eq!(config.env_path, override_path);
}

#[test]
fn test_profile_driven_env_file_name() {
    let (dir, project_root) = setup_project("");
    std::fs::remove_file(dir.path().join(".env")).unwrap();
    std::fs::write(dir.path().join(".env.production"), complete_env()).unwrap();
    std::fs::write(
        project_root.join("forge.yaml"),
        "env:\n  file_name: .env.production\n",
    )
    .unwrap();

    let profile = ProfileLoader::load(&project_root).unwrap();
    assert_eq!(profile.env.file_name, ".env.production");

    let env_path = resolver::resolve(&project_root, &profile.env);
    let store = EnvLoader::load(&env_path).unwrap();
    let config = ManifestAssembler::assemble(&store, &profile).unwrap();

    assert_eq!(config.application_id.as_str(), "com.example.app");
}

#[test]
fn test_search_parent_disabled_reads_project_root() {
    let (_dir, project_root) = setup_project("PAGE=com.example.parent\n");
    std::fs::write(project_root.join(".env"), complete_env()).unwrap();
    std::fs::write(
        project_root.join("forge.yaml"),
        "env:\n  search_parent: false\n",
    )
    .unwrap();

    let config = resolve_config(&project_root).unwrap();
    assert_eq!(config.application_id.as_str(), "com.example.app");
    assert_eq!(config.env_path, project_root.join(".env"));
}
