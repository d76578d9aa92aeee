//! Error types for layout operations.
//!
//! Rendering is a pure computation, so the only failures are geometry and
//! glyph problems detected before any line is produced.

/// Errors that can occur while laying out a menu section.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    /// The total width cannot hold margins, borders, padding and content.
    #[error("width of {width} columns is too narrow, at least {required} columns are needed")]
    InsufficientWidth {
        /// The configured total width.
        width: usize,
        /// The smallest width that leaves one content column.
        required: usize,
    },

    /// A border glyph does not occupy exactly one terminal column.
    #[error("border glyph `{name}` must be exactly one column wide, got {glyph:?}")]
    InvalidGlyph {
        /// The glyph slot (e.g. "top_left").
        name: &'static str,
        /// The offending glyph.
        glyph: String,
    },

    /// An alignment name could not be parsed.
    #[error("unknown alignment '{0}', expected left, center or right")]
    UnknownAlign(String),

    /// A border preset name could not be parsed.
    #[error("unknown border style '{0}', expected ascii, light, heavy or double")]
    UnknownBorder(String),
}

/// A specialized Result type for layout operations.
pub type Result<T> = std::result::Result<T, FormatError>;
