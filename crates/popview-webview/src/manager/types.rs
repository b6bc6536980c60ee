/// Configuration for creating a new surface. Pop-ups reuse the
/// primary's config with a different URL so every surface carries the
/// same user agent and policy.
#[derive(Debug, Clone)]
pub struct SurfaceConfig {
    /// Initial URL to load. `None` starts at an empty page.
    pub url: Option<String>,
    /// Custom user agent string.
    pub user_agent: Option<String>,
    /// Whether to enable dev tools.
    pub devtools: bool,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            url: None,
            user_agent: None,
            devtools: cfg!(debug_assertions),
        }
    }
}

impl SurfaceConfig {
    /// Create a config that loads a URL.
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Default::default()
        }
    }

    /// The same config pointed at a different URL.
    pub fn for_url(&self, url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..self.clone()
        }
    }

    /// The same config with no initial URL (empty popup).
    pub fn blank(&self) -> Self {
        Self {
            url: None,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_url_sets_url() {
        let config = SurfaceConfig::with_url("https://example.com");
        assert_eq!(config.url.as_deref(), Some("https://example.com"));
    }

    #[test]
    fn for_url_keeps_policy_fields() {
        let base = SurfaceConfig {
            url: Some("https://home.example".into()),
            user_agent: Some("Agent/1.0".into()),
            devtools: true,
        };
        let popup = base.for_url("https://popup.example");
        assert_eq!(popup.url.as_deref(), Some("https://popup.example"));
        assert_eq!(popup.user_agent.as_deref(), Some("Agent/1.0"));
        assert!(popup.devtools);
    }

    #[test]
    fn blank_clears_url_only() {
        let base = SurfaceConfig {
            url: Some("https://home.example".into()),
            user_agent: Some("Agent/1.0".into()),
            devtools: false,
        };
        let popup = base.blank();
        assert_eq!(popup.url, None);
        assert_eq!(popup.user_agent.as_deref(), Some("Agent/1.0"));
    }
}
