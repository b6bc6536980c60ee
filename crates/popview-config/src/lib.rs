//! Popview configuration system.
//!
//! TOML-based configuration with serde defaults, so partial configs
//! work out of the box. A default config file with comments is written
//! on first run.

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{
    PopviewConfig, CONFIG_SCHEMA_VERSION, DEFAULT_HOME_URL, DEFAULT_LOG_DIRECTIVE,
    DEFAULT_USER_AGENT,
};
pub use toml_loader::{create_default_config, default_config_path, load_default, load_from_path};

use popview_common::ConfigError;

/// Load config from the platform default path and validate it.
pub fn load_config() -> Result<PopviewConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}
