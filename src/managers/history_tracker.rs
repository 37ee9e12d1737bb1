//! Navigation history for the browser shell.
//!
//! Keeps the ordered list of visited locations and a cursor marking where in
//! that list the session currently is. Visiting a new location from a "back"
//! position discards the forward slice first, mirroring standard browser
//! behavior: go back a few times, click a new link, and the forward history
//! is gone.

use url::Url;

use crate::indexing;

/// Called with the full visited list after each successful mutation of it.
pub type HistoryObserver = Box<dyn FnMut(&[Url])>;

/// Trait defining the navigation history interface.
pub trait HistoryTrackerTrait {
    fn visit(&mut self, location: Url);
    fn go_back(&mut self) -> Option<Url>;
    fn go_forward(&mut self) -> Option<Url>;
    fn current_location(&self) -> Option<&Url>;
    fn visited(&self) -> &[Url];
}

/// In-memory navigation history shared by the whole session.
pub struct HistoryTracker {
    visited: Vec<Url>,
    cursor: Option<usize>,
    on_change: Option<HistoryObserver>,
}

impl HistoryTracker {
    pub fn new() -> Self {
        Self {
            visited: Vec::new(),
            cursor: None,
            on_change: None,
        }
    }

    /// Installs the single change-observer slot. The observer receives the
    /// full visited list after every mutation of it; cursor-only moves
    /// (back/forward) do not fire it.
    pub fn set_change_observer(&mut self, observer: impl FnMut(&[Url]) + 'static) {
        self.on_change = Some(Box::new(observer));
    }

    fn notify_changed(&mut self) {
        debug_assert!(
            self.visited.is_empty() || indexing::is_valid(&self.visited, self.cursor),
            "history cursor out of bounds after mutation"
        );
        if let Some(observer) = self.on_change.as_mut() {
            observer(&self.visited);
        }
    }
}

impl Default for HistoryTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryTrackerTrait for HistoryTracker {
    /// Records a visit to `location`.
    ///
    /// The first visit establishes the history. Re-visiting the location the
    /// cursor already points at is a no-op, so forward history survives a
    /// redundant load notification. Any other visit drops everything after
    /// the cursor, appends the location, and moves the cursor to it.
    fn visit(&mut self, location: Url) {
        // A misplaced cursor is recovered to the first index, not propagated.
        self.cursor = indexing::clamp_to_first(&self.visited, self.cursor);

        match self.cursor {
            Some(cursor) => {
                if indexing::element_at(&self.visited, self.cursor) == Some(&location) {
                    return;
                }
                // Truncate before appending: the forward slice must be gone
                // by the time the new location lands.
                self.visited.truncate(cursor + 1);
                self.visited.push(location);
                self.cursor = Some(self.visited.len() - 1);
            }
            None => {
                self.visited.push(location);
                self.cursor = Some(0);
            }
        }

        self.notify_changed();
    }

    /// Moves the cursor one step back and returns the location there.
    ///
    /// At the first entry the cursor stays put and the current location is
    /// returned, so repeated calls at the lower bound are idempotent. Returns
    /// `None` only for an empty history.
    fn go_back(&mut self) -> Option<Url> {
        if let Some(cursor) = self.cursor {
            if cursor > 0 {
                self.cursor = Some(cursor - 1);
            }
        }
        indexing::element_at(&self.visited, self.cursor).cloned()
    }

    /// Moves the cursor one step forward and returns the location there.
    /// No-op at the last entry, `None` for an empty history.
    fn go_forward(&mut self) -> Option<Url> {
        if let Some(cursor) = self.cursor {
            if cursor + 1 < self.visited.len() {
                self.cursor = Some(cursor + 1);
            }
        }
        indexing::element_at(&self.visited, self.cursor).cloned()
    }

    /// Location the cursor points at, or `None` before the first visit.
    fn current_location(&self) -> Option<&Url> {
        indexing::element_at(&self.visited, self.cursor)
    }

    /// Every recorded location in visit order.
    fn visited(&self) -> &[Url] {
        &self.visited
    }
}
