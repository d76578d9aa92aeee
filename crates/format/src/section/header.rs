//! The title block at the top of a menu.

use tracing::trace;

use super::Section;
use super::canvas::Canvas;
use crate::align::Align;
use crate::error::Result;
use crate::style::MenuStyle;

/// Title and subtitle inside the outer top edge of the frame.
///
/// The header opens the frame with the top corners and closes with a
/// junction divider, since other sections follow it. A blank row separates
/// the title from the subtitle when both are present. Without either, the
/// box collapses to its two edges.
///
/// # Examples
///
/// ```
/// use boxmenu_format::{MenuHeader, MenuStyle, Section};
///
/// let style = MenuStyle::default().with_width(12);
/// let lines = MenuHeader::new(&style).title("My Title").generate().unwrap();
/// assert_eq!(lines, vec!["+----------+", "|My Title  |", "+----------+"]);
/// ```
#[derive(Debug, Clone)]
pub struct MenuHeader<'a> {
    style: &'a MenuStyle,
    title: Option<String>,
    title_align: Option<Align>,
    subtitle: Option<String>,
    subtitle_align: Option<Align>,
}

impl<'a> MenuHeader<'a> {
    /// Creates a header with neither title nor subtitle.
    #[must_use]
    pub fn new(style: &'a MenuStyle) -> Self {
        Self {
            style,
            title: None,
            title_align: None,
            subtitle: None,
            subtitle_align: None,
        }
    }

    /// Sets the title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Overrides the style's title alignment.
    #[must_use]
    pub fn title_align(mut self, align: Align) -> Self {
        self.title_align = Some(align);
        self
    }

    /// Sets the subtitle.
    #[must_use]
    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Overrides the style's subtitle alignment.
    #[must_use]
    pub fn subtitle_align(mut self, align: Align) -> Self {
        self.subtitle_align = Some(align);
        self
    }
}

impl Section for MenuHeader<'_> {
    fn generate(&self) -> Result<Vec<String>> {
        let canvas = Canvas::new(self.style)?;
        let padding = &self.style.padding;

        let mut lines = canvas.top_margin();
        lines.push(canvas.top_border());
        lines.extend(canvas.padding_rows(padding.top));

        if let Some(title) = &self.title {
            let align = self.title_align.unwrap_or(self.style.title_align);
            lines.extend(canvas.rows(title, align));
        }

        if let Some(subtitle) = &self.subtitle {
            if self.title.is_some() {
                lines.extend(canvas.padding_rows(1));
            }
            let align = self.subtitle_align.unwrap_or(self.style.subtitle_align);
            lines.extend(canvas.rows(subtitle, align));
        }

        lines.extend(canvas.padding_rows(padding.bottom));
        lines.push(canvas.divider());
        lines.extend(canvas.bottom_margin());

        trace!(lines = lines.len(), "generated header");
        Ok(lines)
    }
}
