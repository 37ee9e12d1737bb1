//! Session coordinator: the boundary between a view layer and the core.
//!
//! Owns one history tracker and one tab registry, translates view-layer
//! events into operations on them, and hands back a directive telling the
//! view what to load next. The whole session shares a single history tracker
//! rather than one per tab.

use log::{debug, warn};
use url::Url;

use crate::managers::history_tracker::{HistoryTracker, HistoryTrackerTrait};
use crate::managers::tab_registry::{TabRegistry, TabRegistryTrait};
use crate::types::errors::TabError;
use crate::types::settings::ShellSettings;
use crate::types::tab::{Tab, TabContent};

/// What the view layer should do after an event has been applied to the core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadDirective {
    /// Begin loading the given location.
    Load(Url),
    /// Show an empty surface.
    RenderBlank,
    /// Nothing to do.
    None,
}

impl LoadDirective {
    /// Directive for displaying a tab's content.
    pub fn for_tab(tab: &Tab) -> Self {
        match &tab.content {
            TabContent::Empty => LoadDirective::RenderBlank,
            TabContent::Page { location, .. } => LoadDirective::Load(location.clone()),
        }
    }
}

/// Trait defining the events a view layer feeds into the session.
pub trait SessionCoordinatorTrait {
    fn startup(&mut self) -> LoadDirective;
    fn location_submitted(&mut self, location: Url) -> LoadDirective;
    fn page_loaded(&mut self, name: &str, location: Url);
    fn back_requested(&mut self) -> LoadDirective;
    fn forward_requested(&mut self) -> LoadDirective;
    fn tab_selected(&mut self, tab_id: &str) -> Result<LoadDirective, TabError>;
    fn new_tab_requested(&mut self) -> (String, LoadDirective);
}

/// Coordinates the history tracker and tab registry for one session.
pub struct SessionCoordinator {
    settings: ShellSettings,
    history: HistoryTracker,
    registry: TabRegistry,
}

impl SessionCoordinator {
    pub fn new(settings: ShellSettings) -> Self {
        Self {
            settings,
            history: HistoryTracker::new(),
            registry: TabRegistry::new(),
        }
    }

    pub fn settings(&self) -> &ShellSettings {
        &self.settings
    }

    pub fn history(&self) -> &HistoryTracker {
        &self.history
    }

    pub fn registry(&self) -> &TabRegistry {
        &self.registry
    }

    /// Mutable registry access, e.g. for installing a switch observer.
    pub fn registry_mut(&mut self) -> &mut TabRegistry {
        &mut self.registry
    }
}

impl SessionCoordinatorTrait for SessionCoordinator {
    /// Prepares the session and returns the first thing to display.
    fn startup(&mut self) -> LoadDirective {
        if self.settings.log_history {
            self.history.set_change_observer(|visited| {
                debug!(
                    "current history: {:?}",
                    visited.iter().map(Url::as_str).collect::<Vec<_>>()
                );
            });
        }

        match Url::parse(&self.settings.start_page) {
            Ok(location) => LoadDirective::Load(location),
            Err(err) => {
                warn!(
                    "unusable start page {:?}: {}",
                    self.settings.start_page, err
                );
                LoadDirective::RenderBlank
            }
        }
    }

    /// The user committed a location in the address field.
    fn location_submitted(&mut self, location: Url) -> LoadDirective {
        self.history.visit(location.clone());
        LoadDirective::Load(location)
    }

    /// A page finished loading with its resolved name and location.
    ///
    /// The tracker ignores a visit matching its current entry, so a load
    /// completing for the location just submitted is not double-counted.
    fn page_loaded(&mut self, name: &str, location: Url) {
        self.registry.update_current_tab(name, location.clone());
        self.history.visit(location);
    }

    fn back_requested(&mut self) -> LoadDirective {
        match self.history.go_back() {
            Some(location) => LoadDirective::Load(location),
            None => LoadDirective::None,
        }
    }

    fn forward_requested(&mut self) -> LoadDirective {
        match self.history.go_forward() {
            Some(location) => LoadDirective::Load(location),
            None => LoadDirective::None,
        }
    }

    /// The user picked a tab from the tab list.
    fn tab_selected(&mut self, tab_id: &str) -> Result<LoadDirective, TabError> {
        self.registry.switch_tab(tab_id)?;
        Ok(self
            .registry
            .current_tab()
            .map(LoadDirective::for_tab)
            .unwrap_or(LoadDirective::None))
    }

    /// The user asked for a new tab. The fresh tab is empty, so the view
    /// always gets a blank surface to show.
    fn new_tab_requested(&mut self) -> (String, LoadDirective) {
        let id = self.registry.add_new_tab();
        (id, LoadDirective::RenderBlank)
    }
}
