//! Free-form body text, such as a prologue above the items or an epilogue
//! below them.

use tracing::trace;

use super::Section;
use super::canvas::Canvas;
use crate::align::Align;
use crate::error::Result;
use crate::style::MenuStyle;

/// A block of wrapped text with independently toggled dividers.
///
/// Absent or empty text produces no content rows (padding rows included),
/// while requested dividers still render.
///
/// # Examples
///
/// ```
/// use boxmenu_format::{MenuStyle, Section, TextSection};
///
/// let style = MenuStyle::default();
/// assert!(TextSection::new(&style).generate().unwrap().is_empty());
///
/// let lines = TextSection::new(&style)
///     .show_top_border(true)
///     .show_bottom_border(true)
///     .generate()
///     .unwrap();
/// assert_eq!(lines.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct TextSection<'a> {
    style: &'a MenuStyle,
    text: Option<String>,
    text_align: Option<Align>,
    show_top_border: bool,
    show_bottom_border: bool,
}

impl<'a> TextSection<'a> {
    /// Creates an empty section with both dividers hidden.
    #[must_use]
    pub fn new(style: &'a MenuStyle) -> Self {
        Self {
            style,
            text: None,
            text_align: None,
            show_top_border: false,
            show_bottom_border: false,
        }
    }

    /// Sets the body text.
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Overrides the style's text alignment.
    #[must_use]
    pub fn text_align(mut self, align: Align) -> Self {
        self.text_align = Some(align);
        self
    }

    /// Shows or hides the divider above the text.
    #[must_use]
    pub fn show_top_border(mut self, show: bool) -> Self {
        self.show_top_border = show;
        self
    }

    /// Shows or hides the divider below the text.
    #[must_use]
    pub fn show_bottom_border(mut self, show: bool) -> Self {
        self.show_bottom_border = show;
        self
    }
}

impl Section for TextSection<'_> {
    fn generate(&self) -> Result<Vec<String>> {
        let canvas = Canvas::new(self.style)?;
        let padding = &self.style.padding;

        let mut lines = canvas.top_margin();
        if self.show_top_border {
            lines.push(canvas.divider());
        }

        if let Some(text) = self.text.as_deref().filter(|t| !t.is_empty()) {
            let align = self.text_align.unwrap_or(self.style.text_align);
            lines.extend(canvas.padding_rows(padding.top));
            lines.extend(canvas.rows(text, align));
            lines.extend(canvas.padding_rows(padding.bottom));
        }

        if self.show_bottom_border {
            lines.push(canvas.divider());
        }
        lines.extend(canvas.bottom_margin());

        trace!(lines = lines.len(), "generated text section");
        Ok(lines)
    }
}
