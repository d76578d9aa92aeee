//! The top-level [`Config`]: menu style, item markers, prompt and
//! per-section spacing, plus file loading.

use boxmenu_format::{DEFAULT_PROMPT, ItemMarkers, MenuStyle};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ConfigError, Result};
use crate::overrides::{SectionKind, SectionOverrides};
use crate::persistence::{find_config_file, read_config_file, write_config_file};

/// Everything needed to render a menu frame.
///
/// # Examples
///
/// ```
/// use boxmenu_config::{Config, SectionKind};
/// use boxmenu_format::{BorderStyle, MenuStyle};
///
/// let config = Config::default();
/// assert_eq!(config.style.width, 80);
/// assert_eq!(config.prompt, ">>");
///
/// // Narrower, with box-drawing borders
/// let config = Config {
///     style: MenuStyle::default().with_width(60).with_border(BorderStyle::light()),
///     ..Default::default()
/// };
/// assert_eq!(config.style_for(SectionKind::Items).width, 60);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// The base style shared by every section.
    #[serde(default)]
    pub style: MenuStyle,

    /// Marker glyphs for submenu and stay-in-menu items.
    #[serde(default)]
    pub markers: ItemMarkers,

    /// The prompt indicator.
    #[serde(default = "default_prompt")]
    pub prompt: String,

    /// Spacing that replaces the base style for individual sections.
    #[serde(default, skip_serializing_if = "SectionOverrides::is_empty")]
    pub overrides: SectionOverrides,
}

fn default_prompt() -> String {
    DEFAULT_PROMPT.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            style: MenuStyle::default(),
            markers: ItemMarkers::default(),
            prompt: default_prompt(),
            overrides: SectionOverrides::default(),
        }
    }
}

impl Config {
    /// Same as [`Config::default`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the first file reported by
    /// [`find_config_file`](crate::persistence::find_config_file), or the
    /// defaults when there is none.
    ///
    /// # Errors
    ///
    /// Fails when the discovered file is unreadable, malformed or describes
    /// an unusable style.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use boxmenu_config::Config;
    ///
    /// # fn example() -> boxmenu_config::Result<()> {
    /// let config = Config::load()?;
    /// println!("Rendering {} columns wide", config.style.width);
    /// # Ok(())
    /// # }
    /// ```
    pub fn load() -> Result<Self> {
        find_config_file().map_or_else(|| Ok(Self::default()), Self::load_from)
    }

    /// Loads and validates `path`.
    ///
    /// # Errors
    ///
    /// Fails when the file is unreadable, malformed or describes an unusable
    /// style.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use boxmenu_config::Config;
    ///
    /// # fn example() -> boxmenu_config::Result<()> {
    /// let config = Config::load_from("custom-menu.json5")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn load_from(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let path = path.as_ref();
        let config: Self = read_config_file(path)?;
        config.validate()?;
        debug!(path = %path.display(), width = config.style.width, "loaded config");
        Ok(config)
    }

    /// Writes this config to `path` as pretty JSON.
    ///
    /// # Errors
    ///
    /// Fails when the file or its parent directory cannot be written.
    pub fn save_to(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        write_config_file(path, self)
    }

    /// Returns the style to render `section` with: the base style with the
    /// section's override applied.
    ///
    /// # Examples
    ///
    /// ```
    /// use boxmenu_config::{Config, SectionKind, Spacing};
    /// use boxmenu_format::Padding;
    ///
    /// let mut config = Config::default();
    /// config.overrides.prompt = Some(Spacing {
    ///     margins: None,
    ///     padding: Some(Padding::new(0, 1, 1, 1)),
    /// });
    ///
    /// assert_eq!(config.style_for(SectionKind::Prompt).padding, Padding::new(0, 1, 1, 1));
    /// assert_eq!(config.style_for(SectionKind::Footer).padding, Padding::default());
    /// ```
    #[must_use]
    pub fn style_for(&self, section: SectionKind) -> MenuStyle {
        match self.overrides.get(section) {
            Some(spacing) => spacing.apply(&self.style),
            None => self.style.clone(),
        }
    }

    /// Validates the base style and every section override.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidStyle`] if the base style is invalid,
    /// or [`ConfigError::InvalidOverride`] naming the first section whose
    /// override leaves no room for content.
    ///
    /// # Examples
    ///
    /// ```
    /// use boxmenu_config::Config;
    ///
    /// let mut config = Config::default();
    /// assert!(config.validate().is_ok());
    ///
    /// config.style.width = 2; // Only room for the borders
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        self.style.validate()?;
        for section in SectionKind::ALL {
            if self.overrides.get(section).is_some() {
                self.style_for(section)
                    .validate()
                    .map_err(|source| ConfigError::InvalidOverride { section, source })?;
            }
        }
        Ok(())
    }
}
