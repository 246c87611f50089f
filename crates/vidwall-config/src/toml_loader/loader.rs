//! Reading a config file into a `VidwallConfig`.

use std::io::ErrorKind;
use std::path::Path;

use tracing::{debug, warn};
use vidwall_common::ConfigError;

use super::paths::{default_config_path, io_error, write_default_config};
use crate::schema::VidwallConfig;
use crate::validation;

/// Parse the TOML at `path`. Missing sections and fields take defaults.
///
/// Out-of-range values are reported with a warning but kept, so a wall
/// can still start from a half-edited file; [`crate::load_config_from`]
/// is the strict variant.
pub fn load_from_path(path: &Path) -> Result<VidwallConfig, ConfigError> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(ConfigError::FileNotFound(path.to_path_buf()))
        }
        Err(e) => return Err(io_error("read", path, e)),
    };

    let config = parse(&text).map_err(|e| match e {
        ConfigError::ParseError(msg) => ConfigError::ParseError(format!("{}: {msg}", path.display())),
        other => other,
    })?;

    if let Err(e) = validation::validate(&config) {
        warn!(path = %path.display(), "{e}; keeping parsed values");
    }
    debug!(path = %path.display(), mode = %config.layout.mode, "config loaded");
    Ok(config)
}

/// Parse config text without touching the filesystem.
pub fn parse(text: &str) -> Result<VidwallConfig, ConfigError> {
    toml::from_str(text).map_err(|e| ConfigError::ParseError(e.message().to_string()))
}

/// Load the platform default config, writing the template first if the
/// file does not exist yet. The template itself is then parsed, so a
/// first launch and a later one read the same values.
pub fn load_default() -> Result<VidwallConfig, ConfigError> {
    let path = default_config_path()?;
    if write_default_config(&path)? {
        debug!(path = %path.display(), "first launch, template written");
    }
    load_from_path(&path)
}
