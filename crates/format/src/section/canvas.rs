//! Line primitives shared by all sections.

use tracing::debug;

use crate::align::{Align, layout_line};
use crate::border::BorderGlyphs;
use crate::error::Result;
use crate::style::MenuStyle;

/// A style whose geometry has been checked, ready to draw lines.
///
/// Every method returns lines exactly `style.width` columns wide.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Canvas<'a> {
    style: &'a MenuStyle,
    content_width: usize,
}

impl<'a> Canvas<'a> {
    /// Validates `style` and captures its content width.
    pub(crate) fn new(style: &'a MenuStyle) -> Result<Self> {
        if let Err(err) = style.validate() {
            debug!(width = style.width, error = %err, "rejecting menu style");
            return Err(err);
        }
        let content_width = style.content_width()?;
        Ok(Self {
            style,
            content_width,
        })
    }

    /// Columns strictly between the two border glyphs.
    fn span(&self) -> usize {
        self.style.padding.left + self.content_width + self.style.padding.right
    }

    /// A line of spaces the full width of the frame.
    pub(crate) fn blank_line(&self) -> String {
        " ".repeat(self.style.width)
    }

    /// `count` blank lines.
    pub(crate) fn blank_lines(&self, count: usize) -> Vec<String> {
        vec![self.blank_line(); count]
    }

    pub(crate) fn top_margin(&self) -> Vec<String> {
        self.blank_lines(self.style.margins.top)
    }

    pub(crate) fn bottom_margin(&self) -> Vec<String> {
        self.blank_lines(self.style.margins.bottom)
    }

    fn rule(&self, left: &str, right: &str) -> String {
        let margins = &self.style.margins;
        format!(
            "{}{left}{}{right}{}",
            " ".repeat(margins.left),
            self.style.border.horizontal().repeat(self.span()),
            " ".repeat(margins.right),
        )
    }

    /// The outer top edge, drawn with the top corners.
    pub(crate) fn top_border(&self) -> String {
        let border = &self.style.border;
        self.rule(border.top_left(), border.top_right())
    }

    /// The outer bottom edge, drawn with the bottom corners.
    pub(crate) fn bottom_border(&self) -> String {
        let border = &self.style.border;
        self.rule(border.bottom_left(), border.bottom_right())
    }

    /// A divider meeting the frame with the junction glyphs.
    pub(crate) fn divider(&self) -> String {
        let border = &self.style.border;
        self.rule(border.junction_left(), border.junction_right())
    }

    fn enclose(&self, content: &str, edge: &str) -> String {
        let margins = &self.style.margins;
        let padding = &self.style.padding;
        format!(
            "{}{edge}{}{content}{}{edge}{}",
            " ".repeat(margins.left),
            " ".repeat(padding.left),
            " ".repeat(padding.right),
            " ".repeat(margins.right),
        )
    }

    /// Wrapped and aligned text between vertical border glyphs.
    pub(crate) fn rows(&self, text: &str, align: Align) -> Vec<String> {
        let edge = self.style.border.vertical();
        layout_line(text, self.content_width, align)
            .iter()
            .map(|line| self.enclose(line, edge))
            .collect()
    }

    /// Wrapped and aligned text with the border columns left blank.
    pub(crate) fn open_rows(&self, text: &str, align: Align) -> Vec<String> {
        layout_line(text, self.content_width, align)
            .iter()
            .map(|line| self.enclose(line, " "))
            .collect()
    }

    /// `count` empty rows between vertical border glyphs.
    pub(crate) fn padding_rows(&self, count: usize) -> Vec<String> {
        let row = self.enclose(&" ".repeat(self.content_width), self.style.border.vertical());
        vec![row; count]
    }
}
