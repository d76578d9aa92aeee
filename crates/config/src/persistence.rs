//! Locating, reading and writing configuration files.
//!
//! Files are parsed as JSON5, which also accepts plain JSON, and written back
//! as pretty-printed JSON since `serde_json5` has no serializer.
//!
//! Candidates are tried in order and the first existing file wins:
//!
//! 1. `./boxmenu.json5`, `./boxmenu.json`
//! 2. `<config dir>/boxmenu/config.json5`, `<config dir>/boxmenu/config.json`

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{ConfigError, Result};

const LOCAL_FILE_NAMES: [&str; 2] = ["boxmenu.json5", "boxmenu.json"];

const USER_CONFIG_DIR: &str = "boxmenu";

const USER_FILE_NAMES: [&str; 2] = ["config.json5", "config.json"];

/// Returns every path [`find_config_file`] probes, highest priority first.
///
/// User paths are omitted when the platform has no config directory.
#[must_use]
pub fn search_paths() -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = LOCAL_FILE_NAMES.iter().map(PathBuf::from).collect();
    if let Ok(dir) = user_config_dir() {
        paths.extend(USER_FILE_NAMES.iter().map(|name| dir.join(name)));
    }
    paths
}

/// Returns the first existing configuration file, if any.
///
/// # Examples
///
/// ```no_run
/// use boxmenu_config::persistence::find_config_file;
///
/// match find_config_file() {
///     Some(path) => println!("using {}", path.display()),
///     None => println!("using defaults"),
/// }
/// ```
#[must_use]
pub fn find_config_file() -> Option<PathBuf> {
    let found = search_paths().into_iter().find(|path| path.is_file());
    match &found {
        Some(path) => debug!(path = %path.display(), "found config file"),
        None => debug!("no config file found"),
    }
    found
}

/// Returns the per-user configuration directory, `~/.config/boxmenu` on
/// most Unix systems.
///
/// # Errors
///
/// Returns [`ConfigError::NoHomeDirectory`] if the platform config directory
/// cannot be determined.
pub fn user_config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().ok_or(ConfigError::NoHomeDirectory)?;
    Ok(base.join(USER_CONFIG_DIR))
}

/// Reads `path` and deserializes it as JSON5.
///
/// # Errors
///
/// Returns [`ConfigError::ReadFile`] if the file cannot be read and
/// [`ConfigError::ParseJson5`] if its content does not parse into `T`.
pub fn read_config_file<T: serde::de::DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    let value = serde_json5::from_str(&content)?;
    debug!(path = %path.display(), "read config file");
    Ok(value)
}

/// Serializes `value` as pretty JSON into `path`, creating missing parent
/// directories.
///
/// # Errors
///
/// Returns [`ConfigError::SerializeJson`] if serialization fails and
/// [`ConfigError::WriteFile`] if the directory or file cannot be written.
///
/// # Examples
///
/// ```no_run
/// use boxmenu_config::Config;
/// use boxmenu_config::persistence::{user_config_dir, write_config_file};
///
/// # fn main() -> boxmenu_config::Result<()> {
/// write_config_file(user_config_dir()?.join("config.json"), &Config::default())?;
/// # Ok(())
/// # }
/// ```
pub fn write_config_file<T: serde::Serialize>(path: impl AsRef<Path>, value: &T) -> Result<()> {
    let path = path.as_ref();
    let write_error = |source| ConfigError::WriteFile {
        path: path.to_path_buf(),
        source,
    };

    let content = serde_json::to_string_pretty(value)?;
    if let Some(parent) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(write_error)?;
    }
    std::fs::write(path, content).map_err(write_error)
}
