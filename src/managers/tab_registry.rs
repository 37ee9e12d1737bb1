//! Tab registry for the browser shell.
//!
//! Ordered collection of tabs with a current pointer. Switching tabs fires a
//! single observer slot so the view layer can load the new current tab's
//! content. The observer is invoked inline; callers must not re-enter the
//! registry from inside it.

use log::{debug, warn};
use url::Url;

use crate::indexing;
use crate::types::errors::TabError;
use crate::types::tab::{Tab, TabContent};

/// Called with the new current tab after every switch.
pub type SwitchObserver = Box<dyn FnMut(&Tab)>;

/// Trait defining the tab registry interface.
pub trait TabRegistryTrait {
    fn switch_tab(&mut self, tab_id: &str) -> Result<(), TabError>;
    fn update_current_tab(&mut self, name: &str, location: Url);
    fn add_new_tab(&mut self) -> String;
    fn current_tab(&self) -> Option<&Tab>;
    fn tabs(&self) -> &[Tab];
    fn tab_count(&self) -> usize;
}

/// In-memory registry of the session's tabs.
pub struct TabRegistry {
    tabs: Vec<Tab>,
    current_index: Option<usize>,
    on_switch: Option<SwitchObserver>,
}

impl TabRegistry {
    /// Starts with a single empty tab, which is current.
    pub fn new() -> Self {
        Self::with_tabs(vec![Tab::new()], Some(0))
    }

    /// Seeds the registry with existing tabs.
    ///
    /// When `current_index` is absent or out of bounds, the first tab becomes
    /// current; an empty registry has no current tab.
    pub fn with_tabs(tabs: Vec<Tab>, current_index: Option<usize>) -> Self {
        let current_index = indexing::clamp_to_first(&tabs, current_index);
        Self {
            tabs,
            current_index,
            on_switch: None,
        }
    }

    /// Installs the single switch-observer slot, replacing any previous one.
    pub fn set_switch_observer(&mut self, observer: impl FnMut(&Tab) + 'static) {
        self.on_switch = Some(Box::new(observer));
    }

    fn find_tab_index(&self, tab_id: &str) -> Option<usize> {
        self.tabs.iter().position(|t| t.id == tab_id)
    }

    fn notify_switched(&mut self, index: usize) {
        if let Some(observer) = self.on_switch.as_mut() {
            if let Some(tab) = self.tabs.get(index) {
                observer(tab);
            }
        }
    }
}

impl Default for TabRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TabRegistryTrait for TabRegistry {
    /// Makes the tab with `tab_id` current and notifies the switch observer.
    ///
    /// Lookup is by identifier, never by content: two tabs showing the same
    /// page are still distinct. Re-selecting the already-current tab notifies
    /// again. An unknown id leaves the registry untouched and returns an
    /// error for the caller to surface.
    fn switch_tab(&mut self, tab_id: &str) -> Result<(), TabError> {
        let index = match self.find_tab_index(tab_id) {
            Some(index) => index,
            None => {
                warn!("attempted to switch to nonexistent tab: {}", tab_id);
                return Err(TabError::NotFound(tab_id.to_string()));
            }
        };

        debug!(
            "switching tabs to {} ({})",
            self.tabs[index].display_name(),
            tab_id
        );
        self.current_index = Some(index);
        self.notify_switched(index);
        Ok(())
    }

    /// Replaces the current tab's content with the loaded page, in place.
    /// The tab keeps its id and position. No-op without a current tab.
    fn update_current_tab(&mut self, name: &str, location: Url) {
        if let Some(tab) = indexing::element_at_mut(&mut self.tabs, self.current_index) {
            tab.content = TabContent::Page {
                name: name.to_string(),
                location,
            };
        }
    }

    /// Appends a fresh empty tab, switches to it, and returns its id.
    fn add_new_tab(&mut self) -> String {
        let tab = Tab::new();
        let id = tab.id.clone();
        self.tabs.push(tab);
        // The tab was just appended, so the switch cannot fail.
        let _ = self.switch_tab(&id);
        id
    }

    fn current_tab(&self) -> Option<&Tab> {
        indexing::element_at(&self.tabs, self.current_index)
    }

    fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    fn tab_count(&self) -> usize {
        self.tabs.len()
    }
}
