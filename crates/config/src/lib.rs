//! Configuration management for boxmenu.
//!
//! This crate handles loading, validating, and persisting the menu style
//! from configuration files, falling back to built-in defaults.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`config`]: Core configuration struct and loading logic
//! - [`overrides`]: Per-section margins and padding
//! - [`persistence`]: Config file reading and writing
//! - [`error`]: Error types for configuration operations
//!
//! # Configuration Sources (Priority)
//!
//! The first file found wins:
//!
//! 1. Local config (`./boxmenu.json5` or `./boxmenu.json`)
//! 2. User config (`~/.config/boxmenu/config.json5` or `~/.config/boxmenu/config.json`)
//! 3. Built-in defaults
//!
//! # Border Format
//!
//! Borders can be specified in two formats:
//!
//! ```json5
//! {
//!   // Preset name: "ascii", "light", "heavy" or "double"
//!   style: { border: "double" },
//! }
//! ```
//!
//! ```json5
//! {
//!   // Explicit glyphs, each one column wide
//!   style: {
//!     border: {
//!       top_left: "*", top_right: "*", bottom_left: "*", bottom_right: "*",
//!       horizontal: "=", vertical: "!", junction_left: "*", junction_right: "*",
//!     },
//!   },
//! }
//! ```
//!
//! # Examples
//!
//! Loading configuration:
//!
//! ```no_run
//! use boxmenu_config::{Config, SectionKind};
//!
//! # fn example() -> boxmenu_config::Result<()> {
//! // Load from default locations
//! let config = Config::load()?;
//!
//! // Resolve the style for one section
//! let footer = config.style_for(SectionKind::Footer);
//! println!("Footer margins: {:?}", footer.margins);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod overrides;
pub mod persistence;

// Re-export primary types at crate root for convenience
pub use config::Config;
pub use error::{ConfigError, Result};
pub use overrides::{SectionKind, SectionOverrides, Spacing};
