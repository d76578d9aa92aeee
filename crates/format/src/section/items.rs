//! The numbered list of selectable items.

use tracing::trace;

use super::Section;
use super::canvas::Canvas;
use crate::align::Align;
use crate::error::Result;
use crate::item::{ItemMarkers, MenuItem};
use crate::style::MenuStyle;

/// Narrowest column used for item numbers.
const MIN_NUMBER_WIDTH: usize = 2;

/// One numbered entry per item, in input order.
///
/// Entries read `<n> - <text>` followed by at most one marker (see
/// [`ItemMarkers`]). Long entries wrap; the list is never paginated or split
/// into columns. This section sits in the middle of a frame and does not emit
/// vertical margins, so an empty list renders only its enabled dividers.
///
/// # Examples
///
/// ```
/// use boxmenu_format::{ItemsSection, MenuItem, MenuStyle, Section};
///
/// let style = MenuStyle::default().with_width(16);
/// let items = vec![MenuItem::new("Open"), MenuItem::submenu("Tools")];
/// let lines = ItemsSection::new(&style, items).generate().unwrap();
/// assert_eq!(lines, vec!["| 1 - Open     |", "| 2 - Tools >  |"]);
/// ```
#[derive(Debug, Clone)]
pub struct ItemsSection<'a> {
    style: &'a MenuStyle,
    items: Vec<MenuItem>,
    items_align: Align,
    markers: ItemMarkers,
    show_top_border: bool,
    show_bottom_border: bool,
}

impl<'a> ItemsSection<'a> {
    /// Creates a left-aligned list with default markers and no dividers.
    #[must_use]
    pub fn new(style: &'a MenuStyle, items: Vec<MenuItem>) -> Self {
        Self {
            style,
            items,
            items_align: Align::Left,
            markers: ItemMarkers::default(),
            show_top_border: false,
            show_bottom_border: false,
        }
    }

    /// Sets the alignment of item entries.
    #[must_use]
    pub fn items_align(mut self, align: Align) -> Self {
        self.items_align = align;
        self
    }

    /// Replaces the marker glyphs and precedence.
    #[must_use]
    pub fn markers(mut self, markers: ItemMarkers) -> Self {
        self.markers = markers;
        self
    }

    /// Shows or hides the divider above the list.
    #[must_use]
    pub fn show_top_border(mut self, show: bool) -> Self {
        self.show_top_border = show;
        self
    }

    /// Shows or hides the divider below the list.
    #[must_use]
    pub fn show_bottom_border(mut self, show: bool) -> Self {
        self.show_bottom_border = show;
        self
    }

    fn number_width(&self) -> usize {
        self.items.len().to_string().len().max(MIN_NUMBER_WIDTH)
    }
}

impl Section for ItemsSection<'_> {
    fn generate(&self) -> Result<Vec<String>> {
        let canvas = Canvas::new(self.style)?;
        let padding = &self.style.padding;

        let mut lines = Vec::new();
        if self.show_top_border {
            lines.push(canvas.divider());
        }

        if !self.items.is_empty() {
            let number_width = self.number_width();
            lines.extend(canvas.padding_rows(padding.top));
            for (index, item) in self.items.iter().enumerate() {
                let label = self.markers.label(index, number_width, item);
                lines.extend(canvas.rows(&label, self.items_align));
            }
            lines.extend(canvas.padding_rows(padding.bottom));
        }

        if self.show_bottom_border {
            lines.push(canvas.divider());
        }

        trace!(
            items = self.items.len(),
            lines = lines.len(),
            "generated items section"
        );
        Ok(lines)
    }
}
