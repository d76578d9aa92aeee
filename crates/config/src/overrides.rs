//! Per-section spacing overrides.
//!
//! Each section of a frame is spaced independently. The base
//! [`MenuStyle`] applies everywhere unless a section lists its own margins
//! or padding, for instance to make the prompt touch the footer:
//!
//! ```json5
//! {
//!   style: { margins: { left: 2, right: 2 } },
//!   overrides: {
//!     footer: { margins: { left: 2, right: 2, bottom: 0 } },
//!     prompt: { padding: { left: 1, right: 1, bottom: 1 } },
//!   }
//! }
//! ```

use std::fmt;

use boxmenu_format::{Margins, MenuStyle, Padding};
use serde::{Deserialize, Serialize};

/// The sections of a menu frame, in rendering order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    /// Title and subtitle.
    Header,
    /// Body text.
    Text,
    /// The numbered item list.
    Items,
    /// The closing edge.
    Footer,
    /// The input prompt.
    Prompt,
}

impl SectionKind {
    /// All sections, in rendering order.
    pub const ALL: [SectionKind; 5] = [
        SectionKind::Header,
        SectionKind::Text,
        SectionKind::Items,
        SectionKind::Footer,
        SectionKind::Prompt,
    ];

    /// Returns the lowercase section name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKind::Header => "header",
            SectionKind::Text => "text",
            SectionKind::Items => "items",
            SectionKind::Footer => "footer",
            SectionKind::Prompt => "prompt",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Margins and padding replacing the base style's for one section.
///
/// Unset fields keep the base value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spacing {
    /// Replacement margins.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margins: Option<Margins>,

    /// Replacement padding.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<Padding>,
}

impl Spacing {
    /// Returns `base` with this spacing applied.
    ///
    /// # Examples
    ///
    /// ```
    /// use boxmenu_config::Spacing;
    /// use boxmenu_format::{Margins, MenuStyle, Padding};
    ///
    /// let base = MenuStyle::default().with_padding(Padding::uniform(1));
    /// let spacing = Spacing { margins: Some(Margins::new(0, 2, 0, 2)), padding: None };
    ///
    /// let style = spacing.apply(&base);
    /// assert_eq!(style.margins, Margins::new(0, 2, 0, 2));
    /// assert_eq!(style.padding, Padding::uniform(1));
    /// ```
    #[must_use]
    pub fn apply(&self, base: &MenuStyle) -> MenuStyle {
        let mut style = base.clone();
        if let Some(margins) = self.margins {
            style.margins = margins;
        }
        if let Some(padding) = self.padding {
            style.padding = padding;
        }
        style
    }
}

/// Optional spacing per section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionOverrides {
    /// Header spacing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<Spacing>,

    /// Body text spacing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<Spacing>,

    /// Item list spacing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Spacing>,

    /// Footer spacing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer: Option<Spacing>,

    /// Prompt spacing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<Spacing>,
}

impl SectionOverrides {
    /// Returns the override for `kind`, if any.
    #[must_use]
    pub fn get(&self, kind: SectionKind) -> Option<&Spacing> {
        match kind {
            SectionKind::Header => self.header.as_ref(),
            SectionKind::Text => self.text.as_ref(),
            SectionKind::Items => self.items.as_ref(),
            SectionKind::Footer => self.footer.as_ref(),
            SectionKind::Prompt => self.prompt.as_ref(),
        }
    }

    /// Sets or clears the override for `kind`.
    pub fn set(&mut self, kind: SectionKind, spacing: Option<Spacing>) {
        let slot = match kind {
            SectionKind::Header => &mut self.header,
            SectionKind::Text => &mut self.text,
            SectionKind::Items => &mut self.items,
            SectionKind::Footer => &mut self.footer,
            SectionKind::Prompt => &mut self.prompt,
        };
        *slot = spacing;
    }

    /// Returns whether no section has an override.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        SectionKind::ALL.iter().all(|kind| self.get(*kind).is_none())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_by_default() {
        let overrides = SectionOverrides::default();
        assert!(overrides.is_empty());
        assert!(overrides.get(SectionKind::Prompt).is_none());
    }

    #[test]
    fn set_and_clear() {
        let mut overrides = SectionOverrides::default();
        let spacing = Spacing {
            margins: None,
            padding: Some(Padding::new(0, 1, 1, 1)),
        };

        overrides.set(SectionKind::Prompt, Some(spacing));
        assert!(!overrides.is_empty());
        assert_eq!(overrides.get(SectionKind::Prompt), Some(&spacing));
        assert!(overrides.get(SectionKind::Footer).is_none());

        overrides.set(SectionKind::Prompt, None);
        assert!(overrides.is_empty());
    }

    #[test]
    fn empty_spacing_keeps_base() {
        let base = MenuStyle::default().with_margins(Margins::uniform(3));
        assert_eq!(Spacing::default().apply(&base), base);
    }

    #[test]
    fn section_kind_names() {
        for kind in SectionKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{kind}\""));
        }
    }

    #[test]
    fn deserialize_partial_overrides() {
        let json = r#"{"footer": {"margins": {"left": 2, "right": 2}}}"#;
        let overrides: SectionOverrides = serde_json::from_str(json).unwrap();
        assert_eq!(
            overrides.footer.and_then(|s| s.margins),
            Some(Margins::new(0, 2, 0, 2))
        );
        assert!(overrides.header.is_none());
    }
}
