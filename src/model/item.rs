//! Tab item content.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Icon shown next to a tab title.
///
/// Icons are referenced by name; the host resolves and paints them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabIcon {
    /// Icon shown when the tab is not selected.
    pub name: String,
    /// Icon shown while the tab is selected, if different.
    #[serde(default)]
    pub highlighted: Option<String>,
}

impl TabIcon {
    /// Icon with no highlighted variant.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            highlighted: None,
        }
    }

    /// Add a highlighted variant.
    pub fn with_highlighted(mut self, highlighted: impl Into<String>) -> Self {
        self.highlighted = Some(highlighted.into());
        self
    }

    /// Icon name for the given selection state.
    pub fn name_for(&self, selected: bool) -> &str {
        match (&self.highlighted, selected) {
            (Some(highlighted), true) => highlighted,
            _ => &self.name,
        }
    }
}

/// One selectable entry of the tab bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabItem {
    /// Label text.
    pub title: String,
    /// Optional icon before the label.
    #[serde(default)]
    pub icon: Option<TabIcon>,
}

impl TabItem {
    /// Item with a label only.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            icon: None,
        }
    }

    /// Item with a label and an icon.
    pub fn with_icon(title: impl Into<String>, icon: TabIcon) -> Self {
        Self {
            title: title.into(),
            icon: Some(icon),
        }
    }

    /// True if the item carries an icon.
    pub fn has_icon(&self) -> bool {
        self.icon.is_some()
    }
}

impl fmt::Display for TabItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.icon {
            Some(icon) => write!(f, "[{}] {}", icon.name, self.title),
            None => f.write_str(&self.title),
        }
    }
}

impl From<&str> for TabItem {
    fn from(title: &str) -> Self {
        Self::new(title)
    }
}
