//! The shared style aggregate for a menu frame.

use serde::{Deserialize, Serialize};

use crate::align::Align;
use crate::border::BorderStyle;
use crate::dimensions::{Margins, Padding, inner_width};
use crate::error::Result;

/// Default total width, in terminal columns.
pub const DEFAULT_WIDTH: usize = 80;

/// Border, spacing, width and alignment settings shared by the sections of a
/// menu.
///
/// Sections borrow a style immutably, so one instance can back any number of
/// sections and render passes.
///
/// # Examples
///
/// ```
/// use boxmenu_format::{Align, BorderStyle, Margins, MenuStyle, Padding};
///
/// let style = MenuStyle::default()
///     .with_width(60)
///     .with_border(BorderStyle::light())
///     .with_margins(Margins::new(1, 2, 0, 2))
///     .with_padding(Padding::new(0, 1, 0, 1))
///     .with_title_align(Align::Center);
///
/// assert_eq!(style.content_width().unwrap(), 52);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuStyle {
    /// Total width of every rendered line.
    pub width: usize,

    /// Glyphs used for section frames.
    pub border: BorderStyle,

    /// Space outside the border.
    pub margins: Margins,

    /// Space inside the border.
    pub padding: Padding,

    /// Default alignment of header titles.
    pub title_align: Align,

    /// Default alignment of header subtitles.
    pub subtitle_align: Align,

    /// Default alignment of body, footer and prompt text.
    pub text_align: Align,
}

impl Default for MenuStyle {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            border: BorderStyle::default(),
            margins: Margins::default(),
            padding: Padding::default(),
            title_align: Align::Left,
            subtitle_align: Align::Left,
            text_align: Align::Left,
        }
    }
}

impl MenuStyle {
    /// Creates the default style: 80 columns, ASCII borders, no spacing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy with a different total width.
    #[must_use]
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Returns a copy with a different border style.
    #[must_use]
    pub fn with_border(mut self, border: impl Into<BorderStyle>) -> Self {
        self.border = border.into();
        self
    }

    /// Returns a copy with different margins.
    #[must_use]
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    /// Returns a copy with different padding.
    #[must_use]
    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    /// Returns a copy with a different default title alignment.
    #[must_use]
    pub fn with_title_align(mut self, align: Align) -> Self {
        self.title_align = align;
        self
    }

    /// Returns a copy with a different default subtitle alignment.
    #[must_use]
    pub fn with_subtitle_align(mut self, align: Align) -> Self {
        self.subtitle_align = align;
        self
    }

    /// Returns a copy with a different default text alignment.
    #[must_use]
    pub fn with_text_align(mut self, align: Align) -> Self {
        self.text_align = align;
        self
    }

    /// Returns the columns left for content.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::InsufficientWidth`](crate::FormatError::InsufficientWidth)
    /// when the width cannot hold margins, borders and padding.
    pub fn content_width(&self) -> Result<usize> {
        inner_width(self.width, &self.margins, &self.padding)
    }

    /// Checks the border glyphs and the box geometry.
    ///
    /// # Errors
    ///
    /// Returns the first glyph or geometry problem found.
    ///
    /// # Examples
    ///
    /// ```
    /// use boxmenu_format::{Margins, MenuStyle};
    ///
    /// assert!(MenuStyle::default().validate().is_ok());
    /// assert!(MenuStyle::default().with_width(4).with_margins(Margins::uniform(1)).validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        self.border.validate()?;
        self.content_width()?;
        Ok(())
    }
}
