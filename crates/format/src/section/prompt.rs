//! The input prompt shown below the frame.

use tracing::trace;

use super::Section;
use super::canvas::Canvas;
use crate::align::Align;
use crate::error::Result;
use crate::style::MenuStyle;

/// The default prompt indicator.
pub const DEFAULT_PROMPT: &str = ">>";

/// The prompt line.
///
/// Borderless by default: the border columns are rendered as spaces, so the
/// prompt text lines up with the menu body above it. Padding rows are blank
/// lines in that mode. With [`bordered`](Self::bordered) the prompt gets its
/// own closed box.
///
/// # Examples
///
/// ```
/// use boxmenu_format::{MenuPrompt, MenuStyle, Section};
///
/// let style = MenuStyle::default().with_width(8);
/// let lines = MenuPrompt::new(&style).generate().unwrap();
/// assert_eq!(lines, vec![" >>     "]);
/// ```
#[derive(Debug, Clone)]
pub struct MenuPrompt<'a> {
    style: &'a MenuStyle,
    prompt: String,
    prompt_align: Option<Align>,
    bordered: bool,
}

impl<'a> MenuPrompt<'a> {
    /// Creates a borderless prompt showing [`DEFAULT_PROMPT`].
    #[must_use]
    pub fn new(style: &'a MenuStyle) -> Self {
        Self {
            style,
            prompt: DEFAULT_PROMPT.to_string(),
            prompt_align: None,
            bordered: false,
        }
    }

    /// Replaces the prompt text.
    #[must_use]
    pub fn prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Overrides the style's text alignment.
    #[must_use]
    pub fn prompt_align(mut self, align: Align) -> Self {
        self.prompt_align = Some(align);
        self
    }

    /// Draws the prompt inside its own frame.
    #[must_use]
    pub fn bordered(mut self, bordered: bool) -> Self {
        self.bordered = bordered;
        self
    }
}

impl Section for MenuPrompt<'_> {
    fn generate(&self) -> Result<Vec<String>> {
        let canvas = Canvas::new(self.style)?;
        let padding = &self.style.padding;
        let align = self.prompt_align.unwrap_or(self.style.text_align);

        let mut lines = canvas.top_margin();
        if self.bordered {
            lines.push(canvas.top_border());
            lines.extend(canvas.padding_rows(padding.top));
            lines.extend(canvas.rows(&self.prompt, align));
            lines.extend(canvas.padding_rows(padding.bottom));
            lines.push(canvas.bottom_border());
        } else {
            lines.extend(canvas.blank_lines(padding.top));
            lines.extend(canvas.open_rows(&self.prompt, align));
            lines.extend(canvas.blank_lines(padding.bottom));
        }
        lines.extend(canvas.bottom_margin());

        trace!(lines = lines.len(), "generated prompt");
        Ok(lines)
    }
}
