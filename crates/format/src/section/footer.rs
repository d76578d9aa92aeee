//! The closing edge of a menu frame.

use tracing::trace;

use super::Section;
use super::canvas::Canvas;
use crate::align::Align;
use crate::error::Result;
use crate::style::MenuStyle;

/// Caps the frame with the bottom corners.
///
/// Padding rows and optional footer text sit above the bottom edge. The
/// divider above is off by default because the section preceding the footer
/// usually draws one.
///
/// # Examples
///
/// ```
/// use boxmenu_format::{MenuFooter, MenuStyle, Padding, Section};
///
/// let style = MenuStyle::default().with_width(10).with_padding(Padding::new(1, 0, 0, 0));
/// let lines = MenuFooter::new(&style).generate().unwrap();
/// assert_eq!(lines, vec!["|        |", "+--------+"]);
/// ```
#[derive(Debug, Clone)]
pub struct MenuFooter<'a> {
    style: &'a MenuStyle,
    text: Option<String>,
    text_align: Option<Align>,
    show_top_border: bool,
}

impl<'a> MenuFooter<'a> {
    /// Creates a footer without text or top divider.
    #[must_use]
    pub fn new(style: &'a MenuStyle) -> Self {
        Self {
            style,
            text: None,
            text_align: None,
            show_top_border: false,
        }
    }

    /// Sets text shown above the bottom edge.
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

    /// Shows or hides the divider above the footer.
    #[must_use]
    pub fn show_top_border(mut self, show: bool) -> Self {
        self.show_top_border = show;
        self
    }
}

impl Section for MenuFooter<'_> {
    fn generate(&self) -> Result<Vec<String>> {
        let canvas = Canvas::new(self.style)?;
        let padding = &self.style.padding;

        let mut lines = canvas.top_margin();
        if self.show_top_border {
            lines.push(canvas.divider());
        }
        lines.extend(canvas.padding_rows(padding.top));
        if let Some(text) = self.text.as_deref().filter(|t| !t.is_empty()) {
            let align = self.text_align.unwrap_or(self.style.text_align);
            lines.extend(canvas.rows(text, align));
        }
        lines.extend(canvas.padding_rows(padding.bottom));
        lines.push(canvas.bottom_border());
        lines.extend(canvas.bottom_margin());

        trace!(lines = lines.len(), "generated footer");
        Ok(lines)
    }
}
