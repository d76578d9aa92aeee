//! Text alignment and wrapping to an exact column width.
//!
//! Every content row of every section goes through [`layout_line`], so the
//! guarantee that all rendered lines share one width rests on this module.
//! Widths are display columns as measured by `unicode-width`, not bytes or
//! chars.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::error::FormatError;

/// Stand-in for control characters and glyphs too wide for the line.
const REPLACEMENT: &str = "\u{FFFD}";

/// Horizontal placement of text within its row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    /// Pad on the right.
    #[default]
    Left,
    /// Split the padding, the odd column going right.
    Center,
    /// Pad on the left.
    Right,
}

impl Align {
    /// Returns the lowercase name of the alignment.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Align::Left => "left",
            Align::Center => "center",
            Align::Right => "right",
        }
    }
}

impl fmt::Display for Align {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Align {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(Align::Left),
            "center" | "centre" => Ok(Align::Center),
            "right" => Ok(Align::Right),
            _ => Err(FormatError::UnknownAlign(s.to_string())),
        }
    }
}

/// Returns the number of terminal columns `text` occupies.
#[must_use]
pub fn display_width(text: &str) -> usize {
    text.width()
}

/// Pads `text` with spaces to exactly `width` columns.
///
/// Text that is already `width` columns or wider is returned unchanged;
/// callers are expected to [`wrap`] first.
///
/// # Examples
///
/// ```
/// use boxmenu_format::{Align, pad};
///
/// assert_eq!(pad("ab", 5, Align::Left), "ab   ");
/// assert_eq!(pad("ab", 5, Align::Right), "   ab");
/// assert_eq!(pad("ab", 5, Align::Center), " ab  ");
/// ```
#[must_use]
pub fn pad(text: &str, width: usize, align: Align) -> String {
    let fill = width.saturating_sub(display_width(text));
    let (left, right) = match align {
        Align::Left => (0, fill),
        Align::Right => (fill, 0),
        Align::Center => (fill / 2, fill - fill / 2),
    };

    let mut line = String::with_capacity(text.len() + fill);
    line.extend(std::iter::repeat_n(' ', left));
    line.push_str(text);
    line.extend(std::iter::repeat_n(' ', right));
    line
}

/// Splits `text` into lines of at most `width` columns.
///
/// Lines break at whitespace; a newline always starts a new line and runs of
/// other whitespace collapse to one space. Leading spaces of a paragraph are
/// kept on its first line when they leave room for text. A word wider than
/// `width` is cut between glyphs and continues on the next line; a glyph
/// keeps its combining marks and variation selectors. Control characters
/// become U+FFFD. Empty text yields a single empty line.
///
/// A `width` of zero yields a single empty line.
///
/// # Examples
///
/// ```
/// use boxmenu_format::wrap;
///
/// assert_eq!(wrap("the quick brown fox", 10), vec!["the quick", "brown fox"]);
/// assert_eq!(wrap("abcdefgh", 3), vec!["abc", "def", "gh"]);
/// ```
#[must_use]
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![String::new()];
    }

    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let indent_len = paragraph.len() - paragraph.trim_start_matches(' ').len();
        let indent = if indent_len < width {
            &paragraph[..indent_len]
        } else {
            ""
        };

        let mut current = indent.to_string();
        let mut has_words = false;

        for word in paragraph.split_whitespace() {
            let word = replace_controls(word);
            let word_width = display_width(&word);

            if has_words && display_width(&format!("{current} {word}")) <= width {
                current.push(' ');
                current.push_str(&word);
                continue;
            }

            if has_words {
                lines.push(std::mem::take(&mut current));
            } else if display_width(&current) + word_width > width && word_width <= width {
                // The indent alone would push the first word onto a second line
                current.clear();
            }

            has_words = true;
            if display_width(&current) + word_width <= width {
                current.push_str(&word);
                continue;
            }

            for glyph in glyphs(&word) {
                let glyph = if display_width(glyph) > width {
                    REPLACEMENT
                } else {
                    glyph
                };
                let mut candidate = current.clone();
                candidate.push_str(glyph);
                if !current.is_empty() && display_width(&candidate) > width {
                    lines.push(std::mem::replace(&mut current, glyph.to_string()));
                } else {
                    current = candidate;
                }
            }
        }

        lines.push(current);
    }
    lines
}

/// Replaces control characters, whose rendered width is undefined.
fn replace_controls(word: &str) -> Cow<'_, str> {
    if !word.chars().any(char::is_control) {
        return Cow::Borrowed(word);
    }
    let mut clean = String::with_capacity(word.len());
    for ch in word.chars() {
        if ch.is_control() {
            clean.push_str(REPLACEMENT);
        } else {
            clean.push(ch);
        }
    }
    Cow::Owned(clean)
}

/// Splits `word` into glyphs: a char plus the zero-width chars following it.
fn glyphs(word: &str) -> Vec<&str> {
    let mut glyphs = Vec::new();
    let mut start = 0;
    for (index, ch) in word.char_indices().skip(1) {
        if ch.width().unwrap_or(0) > 0 {
            glyphs.push(&word[start..index]);
            start = index;
        }
    }
    if start < word.len() {
        glyphs.push(&word[start..]);
    }
    glyphs
}

/// Wraps `text` to `width` and pads every resulting line to exactly `width`
/// columns with the given alignment.
///
/// # Examples
///
/// ```
/// use boxmenu_format::{Align, layout_line};
///
/// let lines = layout_line("My centered prologue.", 25, Align::Center);
/// assert_eq!(lines, vec!["  My centered prologue.  "]);
///
/// let lines = layout_line("", 4, Align::Left);
/// assert_eq!(lines, vec!["    "]);
/// ```
#[must_use]
pub fn layout_line(text: &str, width: usize, align: Align) -> Vec<String> {
    wrap(text, width)
        .iter()
        .map(|line| pad(line, width, align))
        .collect()
}


#[cfg(test)]
mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    impl Arbitrary for Align {
        type Parameters = ();
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
            prop_oneof![Just(Align::Left), Just(Align::Center), Just(Align::Right)].boxed()
        }
    }

    proptest! {
        /// Every laid out line is exactly as wide as requested.
        #[test]
        fn layout_line_is_exact_width(
            text in "([a-zA-Z0-9 .,日本語─\n\u{7}]|\u{2764}\u{FE0F}){0,120}",
            width in 1usize..60,
            align in any::<Align>(),
        ) {
            for line in layout_line(&text, width, align) {
                prop_assert_eq!(display_width(&line), width);
            }
        }

        /// Wrapping never drops non-whitespace content.
        #[test]
        fn wrap_preserves_words(text in "[a-z]{1,15}( [a-z]{1,15}){0,10}", width in 1usize..30) {
            let joined: String = wrap(&text, width).concat();
            let original: String = text.split_whitespace().collect();
            let rewrapped: String = joined.split_whitespace().collect();
            prop_assert_eq!(original, rewrapped);
        }

        /// Centering puts the smaller half of the padding on the left.
        #[test]
        fn center_splits_left_floor(text in "[a-z]{0,20}", extra in 0usize..20) {
            let width = text.len() + extra;
            let line = pad(&text, width, Align::Center);
            let left = line.len() - line.trim_start().len();
            if !text.is_empty() {
                prop_assert_eq!(left, extra / 2);
            }
            prop_assert_eq!(line.len(), width);
        }
    }
}
