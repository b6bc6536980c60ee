//! TOML config file loading and default-file creation.

use std::path::{Path, PathBuf};

use popview_common::ConfigError;
use tracing::{info, warn};

use crate::schema::PopviewConfig;
use crate::validation;

/// Load config from a specific TOML file path.
///
/// Missing fields fall back to serde defaults. After parsing, the
/// config is validated; a validation failure is logged as a warning
/// and the parsed config is returned as-is.
pub fn load_from_path(path: &Path) -> Result<PopviewConfig, ConfigError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config: PopviewConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    if let Err(e) = validation::validate(&config) {
        warn!("config validation warning: {e}; using parsed config as-is");
    }

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// On macOS: `~/Library/Application Support/popview/config.toml`
/// On Linux: `~/.config/popview/config.toml`
///
/// If the file does not exist, a default config file is created and
/// defaults are returned.
pub fn load_default() -> Result<PopviewConfig, ConfigError> {
    let path = default_config_path()?;

    match load_from_path(&path) {
        Ok(config) => Ok(config),
        Err(ConfigError::ParseError(msg)) if msg.contains("failed to read") => {
            info!("no config found at {}, creating default", path.display());
            create_default_config(&path)?;
            Ok(PopviewConfig::default())
        }
        Err(e) => Err(e),
    }
}

/// Get the platform-specific default config file path.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::ParseError("could not determine config directory".into()))?;
    Ok(config_dir.join("popview").join("config.toml"))
}

/// Create a default TOML config file with documentation comments.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ConfigError::ParseError(format!(
                "failed to create config directory {}: {e}",
                parent.display()
            ))
        })?;
    }

    std::fs::write(path, default_config_toml()).map_err(|e| {
        ConfigError::ParseError(format!(
            "failed to write default config to {}: {e}",
            path.display()
        ))
    })?;

    info!("created default config at {}", path.display());
    Ok(())
}

/// The default config file contents, with comments.
fn default_config_toml() -> String {
    let defaults = PopviewConfig::default();
    format!(
        r#"# Popview configuration.
# Any omitted setting falls back to its built-in default.

[startup]
# URL the primary surface loads at startup.
home_url = "{home_url}"
# User agent sent by every surface. The default carries no embedded-
# webview marker so login pages treat Popview as a regular browser.
user_agent = "{user_agent}"

[window]
title = "{title}"
width = {width}
height = {height}
# Open devtools on every surface.
devtools = {devtools}

[logging]
# Log filter directive; --log-level takes precedence.
level = "{log_level}"
"#,
        home_url = defaults.startup.home_url,
        user_agent = defaults.startup.user_agent,
        title = defaults.window.title,
        width = defaults.window.width,
        height = defaults.window.height,
        devtools = defaults.window.devtools,
        log_level = defaults.logging.level,
    )
}
