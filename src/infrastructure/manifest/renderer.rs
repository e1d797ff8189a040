//! Manifest template rendering
//!
//! Replaces `${NAME}` tokens in a manifest template with placeholder values.
//! A token with no matching placeholder is fatal; partially rendered
//! manifests never leave this module.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use regex::Regex;
use thiserror::Error;
use tracing::debug;

use crate::domain::models::ManifestPlaceholders;

/// Rendering error types
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Manifest template not found: {}", path.display())]
    TemplateNotFound { path: PathBuf },

    #[error("Failed to read manifest template {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Unresolved placeholder '${{{0}}}' in manifest template")]
    UnresolvedPlaceholder(String),
}

/// Substitutes `${NAME}` tokens in manifest templates.
pub struct ManifestRenderer {
    token: Regex,
}

impl ManifestRenderer {
    /// Create a new renderer.
    pub fn new() -> Self {
        Self {
            // Match ${NAME} where NAME is a letter or underscore followed
            // by letters, digits, or underscores
            token: Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").unwrap(),
        }
    }

    /// Render a template string against the given placeholders.
    ///
    /// # Errors
    /// Returns [`RenderError::UnresolvedPlaceholder`] naming the first token
    /// with no matching placeholder. Nothing is substituted in that case.
    pub fn render(
        &self,
        template: &str,
        placeholders: &ManifestPlaceholders,
    ) -> Result<String, RenderError> {
        // Every token must resolve before anything is replaced
        for caps in self.token.captures_iter(template) {
            let name = &caps[1];
            if !placeholders.contains(name) {
                return Err(RenderError::UnresolvedPlaceholder(name.to_string()));
            }
        }

        let rendered = self
            .token
            .replace_all(template, |caps: &regex::Captures| {
                placeholders.get(&caps[1]).unwrap_or_default().to_string()
            })
            .into_owned();

        Ok(rendered)
    }

    /// Read a template from disk and render it.
    ///
    /// # Errors
    /// Returns [`RenderError::TemplateNotFound`] when the file does not
    /// exist, [`RenderError::Io`] for any other read failure, and the
    /// [`RenderError::UnresolvedPlaceholder`] errors of [`Self::render`].
    pub fn render_file(
        &self,
        path: &Path,
        placeholders: &ManifestPlaceholders,
    ) -> Result<String, RenderError> {
        debug!(path = %path.display(), "rendering manifest template");

        let template = fs::read_to_string(path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                RenderError::TemplateNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                RenderError::Io {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;

        self.render(&template, placeholders)
    }
}

impl Default for ManifestRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placeholders() -> ManifestPlaceholders {
        let mut values = ManifestPlaceholders::new();
        values.insert("PAGE", "com.example.app");
        values.insert("KAKAO_NATIVE_APP_KEY", "abc123");
        values
    }

    #[test]
    fn test_render_substitutes_tokens() {
        let renderer = ManifestRenderer::new();
        let template = r#"<data android:scheme="kakao${KAKAO_NATIVE_APP_KEY}" />"#;

        let rendered = renderer.render(template, &placeholders()).unwrap();
        assert_eq!(rendered, r#"<data android:scheme="kakaoabc123" />"#);
    }

    #[test]
    fn test_render_repeated_token() {
        let renderer = ManifestRenderer::new();
        let rendered = renderer
            .render("${PAGE} and ${PAGE}", &placeholders())
            .unwrap();
        assert_eq!(rendered, "com.example.app and com.example.app");
    }

    #[test]
    fn test_render_unresolved_token_is_fatal() {
        let renderer = ManifestRenderer::new();
        let err = renderer
            .render("package=${PAGE} scheme=${OAUTH_HOST}", &placeholders())
            .unwrap_err();

        match err {
            RenderError::UnresolvedPlaceholder(name) => assert_eq!(name, "OAUTH_HOST"),
            other => panic!("expected unresolved placeholder, got {other:?}"),
        }
    }

    #[test]
    fn test_render_without_tokens_is_passthrough() {
        let renderer = ManifestRenderer::new();
        let template = "<manifest package=\"fixed\" />";

        let rendered = renderer.render(template, &placeholders()).unwrap();
        assert_eq!(rendered, template);
    }

    #[test]
    fn test_render_leaves_bare_dollar_alone() {
        let renderer = ManifestRenderer::new();
        let rendered = renderer.render("cost: $5 {not a token}", &placeholders()).unwrap();
        assert_eq!(rendered, "cost: $5 {not a token}");
    }

    #[test]
    fn test_render_file_missing_template() {
        let dir = tempfile::tempdir().unwrap();
        let renderer = ManifestRenderer::new();

        let err = renderer
            .render_file(&dir.path().join("AndroidManifest.xml"), &placeholders())
            .unwrap_err();
        assert!(matches!(err, RenderError::TemplateNotFound { .. }));
    }

    #[test]
    fn test_render_file_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("AndroidManifest.xml");
        std::fs::write(&path, "<manifest package=\"${PAGE}\" />").unwrap();

        let renderer = ManifestRenderer::new();
        let rendered = renderer.render_file(&path, &placeholders()).unwrap();
        assert_eq!(rendered, "<manifest package=\"com.example.app\" />");
    }
}
