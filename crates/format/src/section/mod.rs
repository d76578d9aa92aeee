//! Renderable menu sections.
//!
//! A frame is drawn by calling [`Section::generate`] on each section in
//! order and concatenating the results:
//!
//! | Section | Top edge | Bottom edge |
//! |---------|----------|-------------|
//! | [`MenuHeader`] | outer corners | junctions |
//! | [`TextSection`] | junctions (optional) | junctions (optional) |
//! | [`ItemsSection`] | junctions (optional) | junctions (optional) |
//! | [`MenuFooter`] | junctions (optional) | outer corners |
//! | [`MenuPrompt`] | none, or outer corners | none, or outer corners |
//!
//! # Example
//!
//! ```
//! use boxmenu_format::{
//!     ItemsSection, MenuFooter, MenuHeader, MenuItem, MenuPrompt, MenuStyle, Section, compose,
//! };
//!
//! let style = MenuStyle::default().with_width(30);
//! let header = MenuHeader::new(&style).title("Main");
//! let items = ItemsSection::new(&style, vec![MenuItem::new("Quit")]);
//! let footer = MenuFooter::new(&style);
//! let prompt = MenuPrompt::new(&style);
//!
//! let frame = compose(&[&header, &items, &footer, &prompt]).unwrap();
//! assert_eq!(frame[0], format!("+{}+", "-".repeat(28)));
//! assert!(frame.iter().all(|line| line.chars().count() == 30));
//! ```

mod canvas;
pub mod footer;
pub mod header;
pub mod items;
pub mod prompt;
pub mod text;

#[cfg(test)]
mod tests;

pub use footer::MenuFooter;
pub use header::MenuHeader;
pub use items::ItemsSection;
pub use prompt::{DEFAULT_PROMPT, MenuPrompt};
pub use text::TextSection;

use crate::error::Result;

/// A horizontally bounded part of a menu frame.
pub trait Section {
    /// Produces the section's lines, top to bottom.
    ///
    /// Every line is exactly as wide as the section's style. Calling this
    /// again yields the same lines.
    ///
    /// # Errors
    ///
    /// Returns an error, without producing any lines, when the style's
    /// glyphs or geometry are invalid.
    fn generate(&self) -> Result<Vec<String>>;
}

/// Generates `sections` in order and concatenates their lines.
///
/// # Errors
///
/// Returns the first section error; no lines are returned in that case.
pub fn compose(sections: &[&dyn Section]) -> Result<Vec<String>> {
    let mut frame = Vec::new();
    for section in sections {
        frame.extend(section.generate()?);
    }
    Ok(frame)
}
