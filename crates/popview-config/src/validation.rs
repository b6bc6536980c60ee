//! Config validation, run after parsing.

use popview_common::ConfigError;
use url::Url;

use crate::schema::PopviewConfig;

/// Validate a parsed config.
///
/// The home URL must be an absolute web URL. Everything else the app
/// encounters may be an exotic scheme, but the startup target is
/// always loaded directly by the primary surface.
pub fn validate(config: &PopviewConfig) -> Result<(), ConfigError> {
    let home = &config.startup.home_url;
    if home.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "startup.home_url must not be empty".into(),
        ));
    }
    let parsed = Url::parse(home)
        .map_err(|e| ConfigError::ValidationError(format!("startup.home_url is invalid: {e}")))?;
    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(ConfigError::ValidationError(format!(
            "startup.home_url must be http(s), got scheme '{}'",
            parsed.scheme()
        )));
    }

    if config.startup.user_agent.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "startup.user_agent must not be empty".into(),
        ));
    }

    if config.window.width <= 0.0 || config.window.height <= 0.0 {
        return Err(ConfigError::ValidationError(format!(
            "window size must be positive, got {}x{}",
            config.window.width, config.window.height
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(validate(&PopviewConfig::default()).is_ok());
    }

    #[test]
    fn empty_home_url_is_rejected() {
        let mut config = PopviewConfig::default();
        config.startup.home_url = "  ".into();
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("home_url"));
    }

    #[test]
    fn non_web_home_url_is_rejected() {
        let mut config = PopviewConfig::default();
        config.startup.home_url = "intent://host#Intent;scheme=market;end".into();
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("http(s)"));
    }

    #[test]
    fn unparseable_home_url_is_rejected() {
        let mut config = PopviewConfig::default();
        config.startup.home_url = "not a url".into();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn zero_window_size_is_rejected() {
        let mut config = PopviewConfig::default();
        config.window.height = 0.0;
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("window size"));
    }

    #[test]
    fn empty_user_agent_is_rejected() {
        let mut config = PopviewConfig::default();
        config.startup.user_agent = String::new();
        assert!(validate(&config).is_err());
    }
}
