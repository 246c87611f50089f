//! Where the config file lives and how the default one is written.

use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::info;
use vidwall_common::ConfigError;

use super::template::default_config_toml;

const APP_DIR: &str = "vidwall";
const FILE_NAME: &str = "config.toml";

/// `<dir>/vidwall/config.toml`.
pub fn config_path_in(dir: &Path) -> PathBuf {
    dir.join(APP_DIR).join(FILE_NAME)
}

/// The config file under the platform config directory.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| config_path_in(&dir))
        .ok_or_else(|| ConfigError::ParseError("no platform config directory".into()))
}

/// Write the commented template to `path` unless a file is already there.
///
/// Returns `true` if the file was created. An existing file is never
/// touched, so a user's edits survive a racing first launch.
pub fn write_default_config(path: &Path) -> Result<bool, ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| io_error("create", parent, e))?;
    }
    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => return Ok(false),
        Err(e) => return Err(io_error("create", path, e)),
    };
    file.write_all(default_config_toml().as_bytes())
        .map_err(|e| io_error("write", path, e))?;
    info!(path = %path.display(), "wrote default config");
    Ok(true)
}

pub(super) fn io_error(action: &str, path: &Path, e: std::io::Error) -> ConfigError {
    ConfigError::ParseError(format!("cannot {action} {}: {e}", path.display()))
}
