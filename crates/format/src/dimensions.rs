//! Box-model spacing and width arithmetic.
//!
//! Every section is laid out with the same nesting, from the outside in:
//!
//! ```text
//! margin | border | padding | content | padding | border | margin
//! ```
//!
//! [`inner_width`] turns a total width into the number of columns left for
//! content once the other layers are reserved.

use serde::{Deserialize, Serialize};

use crate::error::{FormatError, Result};

/// Number of columns taken by the left and right border glyphs.
pub const BORDER_COLUMNS: usize = 2;

/// Space reserved outside a section's border, in character cells.
///
/// Top and bottom margins become blank lines; left and right margins become
/// blank columns on every line.
///
/// # Examples
///
/// ```
/// use boxmenu_format::Margins;
///
/// let margins = Margins::new(1, 4, 0, 4);
/// assert_eq!(margins.horizontal(), 8);
/// assert_eq!(margins.vertical(), 1);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Margins {
    /// Blank lines above the section.
    pub top: usize,
    /// Blank columns left of the border.
    pub left: usize,
    /// Blank lines below the section.
    pub bottom: usize,
    /// Blank columns right of the border.
    pub right: usize,
}

impl Margins {
    /// Creates margins in `top, left, bottom, right` order.
    #[must_use]
    pub const fn new(top: usize, left: usize, bottom: usize, right: usize) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    /// Creates margins with the same value on all four sides.
    #[must_use]
    pub const fn uniform(value: usize) -> Self {
        Self::new(value, value, value, value)
    }

    /// Returns the left plus right margin, saturating at `usize::MAX`.
    #[must_use]
    pub const fn horizontal(&self) -> usize {
        self.left.saturating_add(self.right)
    }

    /// Returns the top plus bottom margin.
    #[must_use]
    pub const fn vertical(&self) -> usize {
        self.top.saturating_add(self.bottom)
    }
}

/// Space reserved inside a section's border, in character cells.
///
/// Top and bottom padding become blank bordered rows; left and right padding
/// become blank columns between the border and the content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Padding {
    /// Blank rows below the top border.
    pub top: usize,
    /// Blank columns right of the left border.
    pub left: usize,
    /// Blank rows above the bottom border.
    pub bottom: usize,
    /// Blank columns left of the right border.
    pub right: usize,
}

impl Padding {
    /// Creates padding in `top, left, bottom, right` order.
    #[must_use]
    pub const fn new(top: usize, left: usize, bottom: usize, right: usize) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    /// Creates padding with the same value on all four sides.
    #[must_use]
    pub const fn uniform(value: usize) -> Self {
        Self::new(value, value, value, value)
    }

    /// Returns the left plus right padding, saturating at `usize::MAX`.
    #[must_use]
    pub const fn horizontal(&self) -> usize {
        self.left.saturating_add(self.right)
    }

    /// Returns the top plus bottom padding.
    #[must_use]
    pub const fn vertical(&self) -> usize {
        self.top.saturating_add(self.bottom)
    }
}

/// Returns the columns between the outer edges of the two border glyphs,
/// borders included.
///
/// Saturates at zero; use [`inner_width`] to detect geometry errors.
#[must_use]
pub fn border_width(total_width: usize, margins: &Margins) -> usize {
    total_width.saturating_sub(margins.horizontal())
}

/// Returns the smallest total width that leaves one content column.
///
/// Saturates at `usize::MAX` for spacing no width can hold.
#[must_use]
pub fn required_width(margins: &Margins, padding: &Padding) -> usize {
    margins
        .horizontal()
        .saturating_add(BORDER_COLUMNS)
        .saturating_add(padding.horizontal())
        .saturating_add(1)
}

/// Computes the number of columns available for content.
///
/// # Errors
///
/// Returns [`FormatError::InsufficientWidth`] when margins, borders and
/// padding consume the whole width.
///
/// # Examples
///
/// ```
/// use boxmenu_format::{Margins, Padding, inner_width};
///
/// let width = inner_width(80, &Margins::new(0, 2, 0, 2), &Padding::new(1, 2, 1, 2)).unwrap();
/// assert_eq!(width, 70);
///
/// assert!(inner_width(6, &Margins::uniform(1), &Padding::uniform(1)).is_err());
/// ```
pub fn inner_width(total_width: usize, margins: &Margins, padding: &Padding) -> Result<usize> {
    let inside = border_width(total_width, margins)
        .checked_sub(BORDER_COLUMNS)
        .and_then(|span| span.checked_sub(padding.horizontal()));
    match inside {
        Some(width) if width > 0 => Ok(width),
        _ => Err(FormatError::InsufficientWidth {
            width: total_width,
            required: required_width(margins, padding),
        }),
    }
}
