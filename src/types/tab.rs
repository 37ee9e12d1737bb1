use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use url::Url;
use uuid::Uuid;

/// What a tab is currently displaying.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TabContent {
    /// No page loaded yet.
    Empty,
    /// A loaded page with its resolved name and location.
    Page { name: String, location: Url },
}

/// A browsing context with a stable identity and replaceable content.
///
/// The id is assigned at creation and never changes; the content is rewritten
/// in place when a navigation completes. Equality compares ids only, so a tab
/// fetched before a navigation still compares equal to the same tab fetched
/// after it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tab {
    pub id: String,
    pub content: TabContent,
}

impl Tab {
    /// Creates an empty tab with a fresh unique id.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            content: TabContent::Empty,
        }
    }

    /// Creates a tab already showing a page.
    pub fn with_page(name: &str, location: Url) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            content: TabContent::Page {
                name: name.to_string(),
                location,
            },
        }
    }

    /// Name shown for this tab: the page name, or "Empty" before any load.
    pub fn display_name(&self) -> &str {
        match &self.content {
            TabContent::Empty => "Empty",
            TabContent::Page { name, .. } => name,
        }
    }

    /// Location of the displayed page, if one is loaded.
    pub fn location(&self) -> Option<&Url> {
        match &self.content {
            TabContent::Empty => None,
            TabContent::Page { location, .. } => Some(location),
        }
    }
}

impl Default for Tab {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Tab {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Tab {}

impl Hash for Tab {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
