//! Border glyph sets.
//!
//! A border style is nothing more than the eight glyphs needed to draw a
//! section frame:
//!
//! ```text
//! top_left     horizontal   top_right
//!    ┌────────────────────────┐
//!    │        vertical        │
//!    ├────────────────────────┤  junction_left / junction_right
//!    └────────────────────────┘
//! bottom_left               bottom_right
//! ```
//!
//! The [`BorderGlyphs`] trait describes that capability; [`BorderStyle`] is
//! the concrete, serializable glyph set carried by a
//! [`MenuStyle`](crate::MenuStyle). Four presets are built in, see
//! [`BorderKind`].
//!
//! # Serialization
//!
//! A style serializes to its preset name when it matches one, and to an
//! object with the eight glyphs otherwise:
//!
//! ```
//! use boxmenu_format::{BorderGlyphs, BorderStyle};
//!
//! let style: BorderStyle = serde_json::from_str(r#""light""#).unwrap();
//! assert_eq!(style.top_left(), "┌");
//!
//! let custom: BorderStyle = serde_json::from_str(
//!     r#"{"top_left": "*", "top_right": "*", "bottom_left": "*", "bottom_right": "*",
//!         "horizontal": "=", "vertical": "!", "junction_left": "*", "junction_right": "*"}"#,
//! ).unwrap();
//! assert_eq!(custom.horizontal(), "=");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use unicode_width::UnicodeWidthStr;

use crate::error::{FormatError, Result};

/// The capability of exposing the eight glyphs of a section frame.
///
/// Implement this to describe a custom style, then capture it into a
/// [`BorderStyle`] with [`BorderStyle::from_glyphs`].
pub trait BorderGlyphs {
    /// Top-left corner.
    fn top_left(&self) -> &str;
    /// Top-right corner.
    fn top_right(&self) -> &str;
    /// Bottom-left corner.
    fn bottom_left(&self) -> &str;
    /// Bottom-right corner.
    fn bottom_right(&self) -> &str;
    /// Horizontal line segment.
    fn horizontal(&self) -> &str;
    /// Vertical line segment.
    fn vertical(&self) -> &str;
    /// Where a divider meets the left edge of the frame.
    fn junction_left(&self) -> &str;
    /// Where a divider meets the right edge of the frame.
    fn junction_right(&self) -> &str;

    /// Returns every glyph paired with its slot name.
    fn named_glyphs(&self) -> [(&'static str, &str); 8] {
        [
            ("top_left", self.top_left()),
            ("top_right", self.top_right()),
            ("bottom_left", self.bottom_left()),
            ("bottom_right", self.bottom_right()),
            ("horizontal", self.horizontal()),
            ("vertical", self.vertical()),
            ("junction_left", self.junction_left()),
            ("junction_right", self.junction_right()),
        ]
    }
}

/// The built-in border presets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum BorderKind {
    /// Plain ASCII: `+`, `-` and `|`.
    #[default]
    Ascii,
    /// Unicode single light lines.
    Light,
    /// Unicode single heavy lines.
    Heavy,
    /// Unicode double lines.
    Double,
}

impl BorderKind {
    /// All presets, in declaration order.
    pub const ALL: [BorderKind; 4] = [
        BorderKind::Ascii,
        BorderKind::Light,
        BorderKind::Heavy,
        BorderKind::Double,
    ];

    /// Returns the preset name used in configuration files.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            BorderKind::Ascii => "ascii",
            BorderKind::Light => "light",
            BorderKind::Heavy => "heavy",
            BorderKind::Double => "double",
        }
    }

    /// Returns the glyphs in [`BorderGlyphs`] slot order.
    const fn glyphs(&self) -> [&'static str; 8] {
        match self {
            BorderKind::Ascii => ["+", "+", "+", "+", "-", "|", "+", "+"],
            BorderKind::Light => ["┌", "┐", "└", "┘", "─", "│", "├", "┤"],
            BorderKind::Heavy => ["┏", "┓", "┗", "┛", "━", "┃", "┣", "┫"],
            BorderKind::Double => ["╔", "╗", "╚", "╝", "═", "║", "╠", "╣"],
        }
    }
}

impl fmt::Display for BorderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BorderKind {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ascii" => Ok(BorderKind::Ascii),
            "light" | "unicode-light" => Ok(BorderKind::Light),
            "heavy" | "unicode-heavy" => Ok(BorderKind::Heavy),
            "double" | "double-line" => Ok(BorderKind::Double),
            _ => Err(FormatError::UnknownBorder(s.to_string())),
        }
    }
}

/// A validated set of border glyphs.
///
/// # Examples
///
/// ```
/// use boxmenu_format::{BorderGlyphs, BorderKind, BorderStyle};
///
/// let ascii = BorderStyle::ascii();
/// assert_eq!(ascii.top_left(), "+");
/// assert_eq!(ascii.kind(), Some(BorderKind::Ascii));
///
/// let light = BorderStyle::light();
/// assert_eq!(light.junction_right(), "┤");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BorderStyle {
    top_left: String,
    top_right: String,
    bottom_left: String,
    bottom_right: String,
    horizontal: String,
    vertical: String,
    junction_left: String,
    junction_right: String,
}

impl Default for BorderStyle {
    fn default() -> Self {
        Self::preset(BorderKind::default())
    }
}

impl BorderStyle {
    /// Returns the glyph set of a built-in preset.
    #[must_use]
    pub fn preset(kind: BorderKind) -> Self {
        let [tl, tr, bl, br, h, v, jl, jr] = kind.glyphs();
        Self {
            top_left: tl.to_string(),
            top_right: tr.to_string(),
            bottom_left: bl.to_string(),
            bottom_right: br.to_string(),
            horizontal: h.to_string(),
            vertical: v.to_string(),
            junction_left: jl.to_string(),
            junction_right: jr.to_string(),
        }
    }

    /// The ASCII preset.
    #[must_use]
    pub fn ascii() -> Self {
        Self::preset(BorderKind::Ascii)
    }

    /// The Unicode light-line preset.
    #[must_use]
    pub fn light() -> Self {
        Self::preset(BorderKind::Light)
    }

    /// The Unicode heavy-line preset.
    #[must_use]
    pub fn heavy() -> Self {
        Self::preset(BorderKind::Heavy)
    }

    /// The Unicode double-line preset.
    #[must_use]
    pub fn double() -> Self {
        Self::preset(BorderKind::Double)
    }

    /// Captures any glyph provider into a style.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::InvalidGlyph`] if a glyph is not exactly one
    /// column wide.
    ///
    /// # Examples
    ///
    /// ```
    /// use boxmenu_format::{BorderGlyphs, BorderStyle};
    ///
    /// struct Stars;
    ///
    /// impl BorderGlyphs for Stars {
    ///     fn top_left(&self) -> &str { "*" }
    ///     fn top_right(&self) -> &str { "*" }
    ///     fn bottom_left(&self) -> &str { "*" }
    ///     fn bottom_right(&self) -> &str { "*" }
    ///     fn horizontal(&self) -> &str { "*" }
    ///     fn vertical(&self) -> &str { "*" }
    ///     fn junction_left(&self) -> &str { "*" }
    ///     fn junction_right(&self) -> &str { "*" }
    /// }
    ///
    /// let style = BorderStyle::from_glyphs(&Stars).unwrap();
    /// assert_eq!(style.kind(), None);
    /// ```
    pub fn from_glyphs(glyphs: &impl BorderGlyphs) -> Result<Self> {
        let style = Self {
            top_left: glyphs.top_left().to_string(),
            top_right: glyphs.top_right().to_string(),
            bottom_left: glyphs.bottom_left().to_string(),
            bottom_right: glyphs.bottom_right().to_string(),
            horizontal: glyphs.horizontal().to_string(),
            vertical: glyphs.vertical().to_string(),
            junction_left: glyphs.junction_left().to_string(),
            junction_right: glyphs.junction_right().to_string(),
        };
        style.validate()?;
        Ok(style)
    }

    /// Checks that every glyph occupies exactly one terminal column.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::InvalidGlyph`] naming the first bad slot.
    pub fn validate(&self) -> Result<()> {
        for (name, glyph) in self.named_glyphs() {
            if glyph.width() != 1 {
                return Err(FormatError::InvalidGlyph {
                    name,
                    glyph: glyph.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Returns the preset this style matches, if any.
    #[must_use]
    pub fn kind(&self) -> Option<BorderKind> {
        BorderKind::ALL
            .into_iter()
            .find(|kind| self.named_glyphs().map(|(_, g)| g) == kind.glyphs())
    }
}

impl From<BorderKind> for BorderStyle {
    fn from(kind: BorderKind) -> Self {
        Self::preset(kind)
    }
}

impl BorderGlyphs for BorderStyle {
    fn top_left(&self) -> &str {
        &self.top_left
    }

    fn top_right(&self) -> &str {
        &self.top_right
    }

    fn bottom_left(&self) -> &str {
        &self.bottom_left
    }

    fn bottom_right(&self) -> &str {
        &self.bottom_right
    }

    fn horizontal(&self) -> &str {
        &self.horizontal
    }

    fn vertical(&self) -> &str {
        &self.vertical
    }

    fn junction_left(&self) -> &str {
        &self.junction_left
    }

    fn junction_right(&self) -> &str {
        &self.junction_right
    }
}

/// Object form of a custom border in configuration files.
#[derive(Deserialize)]
struct GlyphFields {
    top_left: String,
    top_right: String,
    bottom_left: String,
    bottom_right: String,
    horizontal: String,
    vertical: String,
    junction_left: String,
    junction_right: String,
}

impl BorderGlyphs for GlyphFields {
    fn top_left(&self) -> &str {
        &self.top_left
    }

    fn top_right(&self) -> &str {
        &self.top_right
    }

    fn bottom_left(&self) -> &str {
        &self.bottom_left
    }

    fn bottom_right(&self) -> &str {
        &self.bottom_right
    }

    fn horizontal(&self) -> &str {
        &self.horizontal
    }

    fn vertical(&self) -> &str {
        &self.vertical
    }

    fn junction_left(&self) -> &str {
        &self.junction_left
    }

    fn junction_right(&self) -> &str {
        &self.junction_right
    }
}

impl Serialize for BorderStyle {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // Presets round-trip through their short name
        if let Some(kind) = self.kind() {
            return serializer.serialize_str(kind.as_str());
        }

        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("BorderStyle", 8)?;
        for (name, glyph) in self.named_glyphs() {
            state.serialize_field(name, glyph)?;
        }
        state.end()
    }
}

impl<'de> Deserialize<'de> for BorderStyle {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, MapAccess, Visitor};

        struct BorderStyleVisitor;

        impl<'de> Visitor<'de> for BorderStyleVisitor {
            type Value = BorderStyle;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a border preset name or an object with the eight border glyphs")
            }

            fn visit_str<E>(self, v: &str) -> std::result::Result<Self::Value, E>
            where
                E: de::Error,
            {
                v.parse::<BorderKind>()
                    .map(BorderStyle::preset)
                    .map_err(de::Error::custom)
            }

            fn visit_map<M>(self, map: M) -> std::result::Result<Self::Value, M::Error>
            where
                M: MapAccess<'de>,
            {
                let fields = GlyphFields::deserialize(de::value::MapAccessDeserializer::new(map))?;
                BorderStyle::from_glyphs(&fields).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_any(BorderStyleVisitor)
    }
}
