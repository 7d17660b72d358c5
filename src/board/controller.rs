//! Board controller: owns the loaded data and the single current grid.
//!
//! Every input change (dataset, grouping, ordering) rebuilds the grid
//! synchronously, so there is never more than one computation in flight.

use std::fmt;
use std::sync::Arc;

use super::grid::{GridMap, build_grid};
use super::users::UserIndex;
use crate::error::BoardError;
use crate::prefs::{PreferenceStore, Preferences};
use crate::types::{Dataset, Grouping, Ordering, Ticket};

#[derive(Clone)]
pub struct BoardController {
    store: Arc<dyn PreferenceStore>,
    preferences: Preferences,
    tickets: Vec<Ticket>,
    users: UserIndex,
    grid: GridMap,
    loading: bool,
    fetch_error: Option<String>,
    generation: u64,
}

impl fmt::Debug for BoardController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoardController")
            .field("preferences", &self.preferences)
            .field("tickets", &self.tickets.len())
            .field("users", &self.users.len())
            .field("columns", &self.grid.len())
            .field("loading", &self.loading)
            .field("fetch_error", &self.fetch_error)
            .field("generation", &self.generation)
            .finish()
    }
}

impl BoardController {
    /// Create a controller with explicit starting preferences.
    ///
    /// The controller starts in the loading state with no data.
    pub fn new(store: Arc<dyn PreferenceStore>, preferences: Preferences) -> Self {
        Self {
            store,
            preferences,
            tickets: Vec::new(),
            users: UserIndex::default(),
            grid: GridMap::default(),
            loading: true,
            fetch_error: None,
            generation: 0,
        }
    }

    /// Create a controller from stored preferences.
    ///
    /// Unrecognized stored values are replaced by defaults and returned so
    /// the caller can report them.
    pub fn from_store(store: Arc<dyn PreferenceStore>) -> (Self, Vec<BoardError>) {
        let (preferences, problems) = Preferences::load_or_default(store.as_ref());
        (Self::new(store, preferences), problems)
    }

    /// Mark a fetch as started and return its generation
    pub fn begin_load(&mut self) -> u64 {
        self.generation += 1;
        self.loading = true;
        self.fetch_error = None;
        self.generation
    }

    /// Install a fetched dataset. Returns `false` for a stale generation.
    pub fn apply_dataset(&mut self, generation: u64, dataset: Dataset) -> bool {
        if generation != self.generation {
            tracing::debug!(generation, current = self.generation, "dropping stale dataset");
            return false;
        }
        self.users = UserIndex::build(&dataset.users);
        self.tickets = dataset.tickets;
        self.rebuild();
        self.loading = false;
        self.fetch_error = None;
        true
    }

    /// Record a failed fetch, keeping whatever was loaded before.
    /// Returns `false` for a stale generation.
    pub fn apply_fetch_failure(&mut self, generation: u64, error: &BoardError) -> bool {
        if generation != self.generation {
            return false;
        }
        tracing::warn!("failed to fetch tickets or users: {error}");
        self.loading = false;
        self.fetch_error = Some(error.to_string());
        true
    }

    /// Change the grouping, persist it and rebuild the grid
    pub fn set_grouping(&mut self, grouping: Grouping) {
        if self.preferences.grouping == grouping {
            return;
        }
        self.preferences.grouping = grouping;
        if let Err(e) = Preferences::save_grouping(self.store.as_ref(), grouping) {
            tracing::warn!("failed to save grouping preference: {e}");
        }
        self.rebuild();
    }

    /// Change the ordering, persist it and rebuild the grid
    pub fn set_ordering(&mut self, ordering: Ordering) {
        if self.preferences.ordering == ordering {
            return;
        }
        self.preferences.ordering = ordering;
        if let Err(e) = Preferences::save_ordering(self.store.as_ref(), ordering) {
            tracing::warn!("failed to save ordering preference: {e}");
        }
        self.rebuild();
    }

    fn rebuild(&mut self) {
        self.grid = build_grid(
            &self.tickets,
            self.preferences.grouping,
            self.preferences.ordering,
        );
        tracing::debug!(
            grouping = %self.preferences.grouping,
            ordering = %self.preferences.ordering,
            columns = self.grid.len(),
            "rebuilt grid"
        );
    }

    pub fn grid(&self) -> &GridMap {
        &self.grid
    }

    pub fn users(&self) -> &UserIndex {
        &self.users
    }

    pub fn grouping(&self) -> Grouping {
        self.preferences.grouping
    }

    pub fn ordering(&self) -> Ordering {
        self.preferences.ordering
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn fetch_error(&self) -> Option<&str> {
        self.fetch_error.as_deref()
    }
}
