//! Filter/selection state machine for the group directory
//!
//! This is the core of the application: a pure, synchronous state machine
//! that owns the search text, district filter, selection, result set, and
//! notification. Every user intent is applied through one of the methods
//! below, and each method leaves the state fully consistent before it
//! returns — no field ever refers to a group outside the relevant filtered
//! set, and the map flag is reset by every filter-changing transition.
//!
//! The rendering layer never mutates this state directly; it dispatches
//! actions that the application component translates into these calls.

use crate::constants::{
    NOTIF_DISTRICT_ONLY, NOTIF_NAME_ONLY, NOTIF_NO_FILTERS, NOTIF_NO_RESULTS,
};
use crate::groups::{Group, GroupStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Warning,
    Error,
}

/// A transient, dismissible user-facing message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    /// Monotonically increasing; guards the delayed auto-dismiss so a stale
    /// expiry cannot erase a newer notification
    pub id: u64,
}

/// Directory widget state over an injected, immutable group dataset
#[derive(Debug)]
pub struct Directory {
    store: GroupStore,
    search_text: String,
    district: String,
    selected: Option<usize>,
    search_mode: bool,
    results: Vec<usize>,
    map_visible: bool,
    notification: Option<Notification>,
    next_notification_id: u64,
}

impl Directory {
    pub fn new(store: GroupStore) -> Self {
        Self {
            store,
            search_text: String::new(),
            district: String::new(),
            selected: None,
            search_mode: false,
            results: Vec::new(),
            map_visible: false,
            notification: None,
            next_notification_id: 0,
        }
    }

    pub fn store(&self) -> &GroupStore {
        &self.store
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn district(&self) -> &str {
        &self.district
    }

    pub fn search_mode(&self) -> bool {
        self.search_mode
    }

    pub fn map_visible(&self) -> bool {
        self.map_visible
    }

    pub fn selected_group(&self) -> Option<&Group> {
        self.selected.and_then(|index| self.store.get(index))
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    /// Update the search text; no filtering happens until an explicit search
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    /// Run the search over name and district filters.
    ///
    /// Returns the id of the notification this submission raised, if any,
    /// so the caller can schedule its auto-dismiss. With no filters at all
    /// the search is refused with an error and nothing else changes; with a
    /// single filter a warning is raised and the search proceeds. An empty
    /// result set raises the no-results warning (superseding the earlier
    /// one) but still becomes the current result set.
    pub fn submit_search(&mut self) -> Option<u64> {
        self.close_notification();

        let text = self.search_text.trim().to_string();
        let mut raised = None;

        if text.is_empty() && self.district.is_empty() {
            return Some(self.raise(NotificationKind::Error, NOTIF_NO_FILTERS));
        } else if self.district.is_empty() {
            raised = Some(self.raise(NotificationKind::Warning, NOTIF_NAME_ONLY));
        } else if text.is_empty() {
            raised = Some(self.raise(NotificationKind::Warning, NOTIF_DISTRICT_ONLY));
        }

        let needle = text.to_lowercase();
        let results: Vec<usize> = self
            .store
            .groups()
            .iter()
            .enumerate()
            .filter(|(_, group)| {
                let name_matches =
                    needle.is_empty() || group.name.to_lowercase().contains(&needle);
                let district_matches =
                    self.district.is_empty() || group.district == self.district;
                name_matches && district_matches
            })
            .map(|(index, _)| index)
            .collect();

        if results.is_empty() {
            raised = Some(self.raise(NotificationKind::Warning, NOTIF_NO_RESULTS));
        }

        self.results = results;
        self.search_mode = true;
        self.selected = None;
        self.map_visible = false;
        raised
    }

    /// Change the district filter.
    ///
    /// A non-empty code immediately shows the district's groups and clears
    /// the search text; an empty code exits search-mode entirely.
    pub fn select_district(&mut self, code: &str) {
        self.close_notification();
        self.district = code.to_string();
        self.selected = None;
        self.map_visible = false;

        if code.is_empty() {
            self.search_mode = false;
            self.results.clear();
        } else {
            self.search_text.clear();
            self.results = self.district_indices();
            self.search_mode = true;
        }
    }

    /// Select a single group by id, resolved only within the currently
    /// district-filtered subset. An empty id means "show all": it re-enters
    /// search-mode with the full district-filtered set. An id that does not
    /// resolve simply clears the selection.
    pub fn select_group(&mut self, id: &str) {
        self.close_notification();
        self.map_visible = false;

        if id.is_empty() {
            self.results = self.district_indices();
            self.search_mode = true;
            self.selected = None;
            return;
        }

        self.selected = self
            .district_indices()
            .into_iter()
            .find(|&index| self.store.groups()[index].id == id);
        self.search_mode = false;
        self.results.clear();
    }

    /// Select the group and reveal the map panel.
    ///
    /// Returns whether the map was actually shown, so the caller knows to
    /// schedule the deferred bring-into-view.
    pub fn show_map(&mut self, id: &str) -> bool {
        match self.store.groups().iter().position(|group| group.id == id) {
            Some(index) => {
                self.selected = Some(index);
                self.map_visible = true;
                true
            }
            None => false,
        }
    }

    /// Collapse the map panel without touching the filters or selection
    pub fn hide_map(&mut self) {
        self.map_visible = false;
    }

    /// The rendered list: search results in search-mode, otherwise the
    /// selected group alone, otherwise nothing
    pub fn visible(&self) -> Vec<&Group> {
        if self.search_mode {
            self.results
                .iter()
                .filter_map(|&index| self.store.get(index))
                .collect()
        } else if let Some(index) = self.selected {
            self.store.get(index).into_iter().collect()
        } else {
            Vec::new()
        }
    }

    /// Groups matching the current district filter (all groups when no
    /// district is selected), in source order
    pub fn district_filtered(&self) -> Vec<&Group> {
        self.district_indices()
            .into_iter()
            .filter_map(|index| self.store.get(index))
            .collect()
    }

    fn district_indices(&self) -> Vec<usize> {
        self.store
            .groups()
            .iter()
            .enumerate()
            .filter(|(_, group)| self.district.is_empty() || group.district == self.district)
            .map(|(index, _)| index)
            .collect()
    }

    fn raise(&mut self, kind: NotificationKind, message: &str) -> u64 {
        self.next_notification_id += 1;
        let id = self.next_notification_id;
        self.notification = Some(Notification {
            kind,
            message: message.to_string(),
            id,
        });
        id
    }

    /// Delayed auto-dismiss: clears the banner only if the displayed
    /// notification still carries the id the dismissal was scheduled with
    pub fn expire_notification(&mut self, id: u64) {
        if self.notification.as_ref().is_some_and(|n| n.id == id) {
            self.notification = None;
        }
    }

    /// Manual close: clears regardless of id
    pub fn close_notification(&mut self) {
        self.notification = None;
    }
}
