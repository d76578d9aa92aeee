//! Box-model layout engine for bordered console menus.
//!
//! This crate turns a menu's title, body text, items, footer and prompt into
//! the exact lines to print on a fixed-width terminal. Every line it
//! produces has the same display width, whatever border glyphs are used.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`dimensions`]: Margins, padding and content width arithmetic
//! - [`border`]: Border glyph sets and the built-in presets
//! - [`align`]: Alignment and wrapping of text to an exact width
//! - [`style`]: The [`MenuStyle`] shared by all sections of a frame
//! - [`item`]: The layout view of a menu item and its markers
//! - [`section`]: The header, text, items, footer and prompt sections
//! - [`error`]: Error types for layout operations
//!
//! # Box Model
//!
//! Each section nests its content the same way, from the outside in:
//! margin, border, padding, content. Top and bottom margins are blank
//! lines, top and bottom padding are blank bordered rows.
//!
//! # Examples
//!
//! Rendering a small menu:
//!
//! ```
//! use boxmenu_format::{
//!     Align, BorderStyle, ItemsSection, MenuFooter, MenuHeader, MenuItem, MenuPrompt,
//!     MenuStyle, Section,
//! };
//!
//! let style = MenuStyle::default()
//!     .with_width(40)
//!     .with_border(BorderStyle::light());
//!
//! let header = MenuHeader::new(&style)
//!     .title("Main Menu")
//!     .title_align(Align::Center);
//! let items = ItemsSection::new(
//!     &style,
//!     vec![MenuItem::new("Open"), MenuItem::submenu("Settings")],
//! );
//! let footer = MenuFooter::new(&style);
//! let prompt = MenuPrompt::new(&style);
//!
//! let mut frame = Vec::new();
//! frame.extend(header.generate()?);
//! frame.extend(items.generate()?);
//! frame.extend(footer.generate()?);
//! frame.extend(prompt.generate()?);
//!
//! for line in &frame {
//!     println!("{line}");
//! }
//! # Ok::<(), boxmenu_format::FormatError>(())
//! ```

pub mod align;
pub mod border;
pub mod dimensions;
pub mod error;
pub mod item;
pub mod section;
pub mod style;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export primary types at crate root for convenience
pub use align::{Align, display_width, layout_line, pad, wrap};
pub use border::{BorderGlyphs, BorderKind, BorderStyle};
pub use dimensions::{BORDER_COLUMNS, Margins, Padding, border_width, inner_width, required_width};
pub use error::{FormatError, Result};
pub use item::{ItemMarkers, MarkerPrecedence, MenuItem};
pub use section::{
    DEFAULT_PROMPT, ItemsSection, MenuFooter, MenuHeader, MenuPrompt, Section, TextSection, compose,
};
pub use style::{DEFAULT_WIDTH, MenuStyle};
