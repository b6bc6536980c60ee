//! Configuration schema. All sections use serde defaults so a partial
//! (or missing) config file works out of the box.

use serde::{Deserialize, Serialize};

pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Demo page exercising `window.open()` pop-ups and `intent://` links.
pub const DEFAULT_HOME_URL: &str = "https://developers.kakao.com/docs/js/demos/custom-login";

/// Default user agent. Some login flows refuse to render inside an
/// embedded webview, so this deliberately reads like a plain desktop
/// browser and carries no webview marker token.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Default log filter directive.
pub const DEFAULT_LOG_DIRECTIVE: &str = "popview=info";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PopviewConfig {
    pub startup: StartupConfig,
    pub window: WindowConfig,
    pub logging: LoggingConfig,
}

/// What the primary surface loads at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StartupConfig {
    pub home_url: String,
    pub user_agent: String,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            home_url: DEFAULT_HOME_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Logical size of the host window.
    pub width: f64,
    pub height: f64,
    /// Enable devtools on every surface (also reachable via `--devtools`).
    pub devtools: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Popview".to_string(),
            width: 1024.0,
            height: 768.0,
            devtools: cfg!(debug_assertions),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive for the log subscriber, e.g. "popview=debug".
    /// `--log-level` takes precedence over this.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_DIRECTIVE.to_string(),
        }
    }
}
