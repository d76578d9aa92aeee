//! Errors raised while locating, parsing or validating a boxmenu config.

use std::path::PathBuf;

use boxmenu_format::FormatError;

use crate::overrides::SectionKind;

/// Everything that can go wrong between a config file and a usable
/// [`Config`](crate::Config).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file exists but could not be read.
    #[error("cannot read {}: {source}", path.display())]
    ReadFile {
        /// File being read.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file or its directory could not be written.
    #[error("cannot write {}: {source}", path.display())]
    WriteFile {
        /// File being written.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid JSON5 or does not match the config shape.
    #[error("malformed config: {0}")]
    ParseJson5(#[from] serde_json5::Error),

    /// The config could not be turned into JSON.
    #[error("cannot encode config as JSON: {0}")]
    SerializeJson(#[from] serde_json::Error),

    /// The base menu style is unusable.
    #[error("invalid menu style: {0}")]
    InvalidStyle(#[from] FormatError),

    /// A section override leaves that section's style unusable.
    #[error("invalid {section} style override: {source}")]
    InvalidOverride {
        /// Section carrying the override.
        section: SectionKind,
        #[source]
        source: FormatError,
    },

    /// The platform reports no config directory.
    #[error("no user config directory on this platform")]
    NoHomeDirectory,
}

/// Result alias for config operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
