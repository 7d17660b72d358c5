//! Display preference persistence.
//!
//! The board only talks to the [`PreferenceStore`] port. The file-backed
//! store is used by the binary; the in-memory store backs tests and
//! `--no-save` sessions.

mod file;
mod memory;

pub use file::FilePreferenceStore;
pub use memory::MemoryPreferenceStore;

use std::str::FromStr;

use crate::error::{BoardError, Result};
use crate::types::{Grouping, Ordering};

/// Durable key-value storage for display preferences
pub trait PreferenceStore: Send + Sync {
    /// Read a value, `None` when the key was never written
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a value. Not transactional.
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// The keys the board persists
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferenceKey {
    Grouping,
    Ordering,
}

impl PreferenceKey {
    pub const ALL: [PreferenceKey; 2] = [PreferenceKey::Grouping, PreferenceKey::Ordering];

    pub fn as_str(&self) -> &'static str {
        match self {
            PreferenceKey::Grouping => "grouping",
            PreferenceKey::Ordering => "ordering",
        }
    }
}

impl FromStr for PreferenceKey {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "grouping" => Ok(PreferenceKey::Grouping),
            "ordering" => Ok(PreferenceKey::Ordering),
            _ => Err(BoardError::Config(format!(
                "unknown preference '{s}', expected 'grouping' or 'ordering'"
            ))),
        }
    }
}

/// Current grouping and ordering choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Preferences {
    pub grouping: Grouping,
    pub ordering: Ordering,
}

impl Preferences {
    /// Load preferences, failing on values outside the recognized set.
    ///
    /// Absent keys and unreadable stores fall back to the defaults
    /// (`status` / `priority`).
    pub fn load(store: &dyn PreferenceStore) -> Result<Self> {
        let grouping = match read_key(store, PreferenceKey::Grouping) {
            Some(value) => value.parse::<Grouping>()?,
            None => Grouping::default(),
        };
        let ordering = match read_key(store, PreferenceKey::Ordering) {
            Some(value) => value.parse::<Ordering>()?,
            None => Ordering::default(),
        };
        Ok(Self { grouping, ordering })
    }

    /// Load preferences, replacing each unrecognized value with its default.
    ///
    /// Returns the preferences together with the errors for every value that
    /// was rejected, so callers can tell the user about them.
    pub fn load_or_default(store: &dyn PreferenceStore) -> (Self, Vec<BoardError>) {
        let mut problems = Vec::new();

        let grouping = read_key(store, PreferenceKey::Grouping)
            .map(|value| value.parse::<Grouping>())
            .transpose()
            .unwrap_or_else(|e| {
                problems.push(e);
                None
            })
            .unwrap_or_default();
        let ordering = read_key(store, PreferenceKey::Ordering)
            .map(|value| value.parse::<Ordering>())
            .transpose()
            .unwrap_or_else(|e| {
                problems.push(e);
                None
            })
            .unwrap_or_default();

        for problem in &problems {
            tracing::warn!("ignoring stored preference: {problem}");
        }

        (Self { grouping, ordering }, problems)
    }

    /// Persist the grouping choice
    pub fn save_grouping(store: &dyn PreferenceStore, grouping: Grouping) -> Result<()> {
        store.set(PreferenceKey::Grouping.as_str(), grouping.as_str())
    }

    /// Persist the ordering choice
    pub fn save_ordering(store: &dyn PreferenceStore, ordering: Ordering) -> Result<()> {
        store.set(PreferenceKey::Ordering.as_str(), ordering.as_str())
    }

    /// Validate `value` for `key` and persist it.
    ///
    /// Returns the canonical spelling that was written. Only `key` is
    /// touched, so a corrupt value under the other key does not get in the
    /// way.
    pub fn save_named(
        store: &dyn PreferenceStore,
        key: PreferenceKey,
        value: &str,
    ) -> Result<&'static str> {
        match key {
            PreferenceKey::Grouping => {
                let grouping: Grouping = value.parse()?;
                Self::save_grouping(store, grouping)?;
                Ok(grouping.as_str())
            }
            PreferenceKey::Ordering => {
                let ordering: Ordering = value.parse()?;
                Self::save_ordering(store, ordering)?;
                Ok(ordering.as_str())
            }
        }
    }

    pub fn value_of(&self, key: PreferenceKey) -> &'static str {
        match key {
            PreferenceKey::Grouping => self.grouping.as_str(),
            PreferenceKey::Ordering => self.ordering.as_str(),
        }
    }
}

fn read_key(store: &dyn PreferenceStore, key: PreferenceKey) -> Option<String> {
    match store.get(key.as_str()) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!("cannot read preference '{}': {e}", key.as_str());
            None
        }
    }
}
