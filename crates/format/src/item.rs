//! The layout view of a menu item.
//!
//! Actions and callbacks live outside this crate; for rendering an item is
//! its text plus two flags that decide which marker follows it.

use serde::{Deserialize, Serialize};

/// A selectable entry, as far as layout is concerned.
///
/// # Examples
///
/// ```
/// use boxmenu_format::MenuItem;
///
/// let item = MenuItem::new("Open file");
/// assert!(!item.is_submenu());
/// assert!(item.should_exit());
///
/// let settings = MenuItem::submenu("Settings");
/// assert!(settings.is_submenu());
///
/// let refresh = MenuItem::new("Refresh").with_exit(false);
/// assert!(!refresh.should_exit());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MenuItem {
    text: String,
    #[serde(default)]
    submenu: bool,
    #[serde(default = "default_should_exit")]
    should_exit: bool,
}

fn default_should_exit() -> bool {
    true
}

impl MenuItem {
    /// Creates a plain item: no submenu, selecting it exits the menu loop.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            submenu: false,
            should_exit: true,
        }
    }

    /// Creates an item that opens a submenu.
    #[must_use]
    pub fn submenu(text: impl Into<String>) -> Self {
        Self {
            submenu: true,
            ..Self::new(text)
        }
    }

    /// Returns a copy with a different exit-on-select flag.
    #[must_use]
    pub fn with_exit(mut self, should_exit: bool) -> Self {
        self.should_exit = should_exit;
        self
    }

    /// Returns the display text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns whether the item leads to a submenu.
    #[must_use]
    pub fn is_submenu(&self) -> bool {
        self.submenu
    }

    /// Returns whether selecting the item exits the menu loop.
    #[must_use]
    pub fn should_exit(&self) -> bool {
        self.should_exit
    }
}

/// Which marker wins when an item qualifies for both.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerPrecedence {
    /// The submenu marker is shown over the stay marker.
    #[default]
    SubmenuFirst,
    /// The stay marker is shown over the submenu marker.
    StayFirst,
}

/// Marker glyphs appended to item labels.
///
/// At most one marker is shown per item.
///
/// # Examples
///
/// ```
/// use boxmenu_format::{ItemMarkers, MarkerPrecedence, MenuItem};
///
/// let markers = ItemMarkers::default();
/// let both = MenuItem::submenu("Tools").with_exit(false);
/// assert_eq!(markers.marker_for(&both), Some(">"));
///
/// let markers = ItemMarkers { precedence: MarkerPrecedence::StayFirst, ..Default::default() };
/// assert_eq!(markers.marker_for(&both), Some("*"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemMarkers {
    /// Shown after items that open a submenu.
    pub submenu: String,

    /// Shown after items that keep the menu loop running.
    pub stay: String,

    /// Which marker wins for an item that is both.
    pub precedence: MarkerPrecedence,
}

impl Default for ItemMarkers {
    fn default() -> Self {
        Self {
            submenu: ">".to_string(),
            stay: "*".to_string(),
            precedence: MarkerPrecedence::default(),
        }
    }
}

impl ItemMarkers {
    /// Returns the marker to show after `item`, if any.
    #[must_use]
    pub fn marker_for(&self, item: &MenuItem) -> Option<&str> {
        let submenu = item.is_submenu().then_some(self.submenu.as_str());
        let stay = (!item.should_exit()).then_some(self.stay.as_str());
        let marker = match self.precedence {
            MarkerPrecedence::SubmenuFirst => submenu.or(stay),
            MarkerPrecedence::StayFirst => stay.or(submenu),
        };
        marker.filter(|m| !m.is_empty())
    }

    /// Formats the label of the item at zero-based `index`.
    ///
    /// The one-based number is right-aligned to `number_width` columns.
    ///
    /// # Examples
    ///
    /// ```
    /// use boxmenu_format::{ItemMarkers, MenuItem};
    ///
    /// let markers = ItemMarkers::default();
    /// assert_eq!(markers.label(0, 2, &MenuItem::new("Open")), " 1 - Open");
    /// assert_eq!(markers.label(11, 2, &MenuItem::submenu("More")), "12 - More >");
    /// ```
    #[must_use]
    pub fn label(&self, index: usize, number_width: usize, item: &MenuItem) -> String {
        let number = index + 1;
        match self.marker_for(item) {
            Some(marker) => format!("{number:>number_width$} - {} {marker}", item.text()),
            None => format!("{number:>number_width$} - {}", item.text()),
        }
    }
}
