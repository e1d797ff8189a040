use regex::Regex;

/// Decides which environment values may appear in human-readable output.
///
/// Detection is name-based: a key that looks like it holds a credential gets
/// its value masked. Values themselves are never inspected.
#[derive(Debug, Clone)]
pub struct SecretRedactor {
    sensitive_key: Regex,
}

impl SecretRedactor {
    /// Create a new redactor.
    pub fn new() -> Self {
        Self {
            // Key names that indicate a secret value
            sensitive_key: Regex::new(r"(?i)(api[_-]?key|app[_-]?key|secret|token|password)")
                .unwrap(),
        }
    }

    /// Whether a key names a value that must not be shown in full.
    pub fn is_sensitive(&self, key: &str) -> bool {
        self.sensitive_key.is_match(key)
    }

    /// A value as it may be displayed for its key. Secrets are masked, the
    /// rest pass through unchanged.
    pub fn display_value(&self, key: &str, value: &str) -> String {
        if self.is_sensitive(key) {
            mask(value)
        } else {
            value.to_string()
        }
    }
}

impl Default for SecretRedactor {
    fn default() -> Self {
        Self::new()
    }
}

/// Mask a secret, keeping just enough of it to recognize which one it is.
pub fn mask(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    if chars.len() < 8 {
        return "[REDACTED]".to_string();
    }

    let head: String = chars[..2].iter().collect();
    let tail: String = chars[chars.len() - 2..].iter().collect();
    format!("{head}...{tail}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_key_is_sensitive() {
        let redactor = SecretRedactor::new();
        assert!(redactor.is_sensitive("KAKAO_NATIVE_APP_KEY"));
        assert!(redactor.is_sensitive("api_key"));
        assert!(redactor.is_sensitive("AUTH_TOKEN"));
        assert!(redactor.is_sensitive("db_password"));
        assert!(redactor.is_sensitive("CLIENT_SECRET"));
    }

    #[test]
    fn test_plain_keys_are_not_sensitive() {
        let redactor = SecretRedactor::new();
        assert!(!redactor.is_sensitive("PAGE"));
        assert!(!redactor.is_sensitive("applicationId"));
        assert!(!redactor.is_sensitive("MIN_SDK"));
    }

    #[test]
    fn test_display_value_masks_secrets() {
        let redactor = SecretRedactor::new();
        let shown = redactor.display_value("KAKAO_NATIVE_APP_KEY", "abcdef1234567890");

        assert!(!shown.contains("abcdef1234567890"));
        assert_eq!(shown, "ab...90");
    }

    #[test]
    fn test_display_value_passes_plain_values() {
        let redactor = SecretRedactor::new();
        assert_eq!(
            redactor.display_value("PAGE", "com.example.app"),
            "com.example.app"
        );
    }

    #[test]
    fn test_mask_short_value_entirely() {
        assert_eq!(mask("abc"), "[REDACTED]");
        assert_eq!(mask(""), "[REDACTED]");
        assert_eq!(mask("1234567"), "[REDACTED]");
    }

    #[test]
    fn test_mask_keeps_ends_of_long_value() {
        assert_eq!(mask("abcdefgh"), "ab...gh");
    }
}
