use std::collections::HashMap;

use parking_lot::Mutex;

use super::PreferenceStore;
use crate::error::Result;

/// Process-local preference store
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with initial values
    pub fn with_values<'a>(values: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let store = Self::new();
        {
            let mut map = store.values.lock();
            for (key, value) in values {
                map.insert(key.to_string(), value.to_string());
            }
        }
        store
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.values.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_then_get() {
        let store = MemoryPreferenceStore::new();
        store.set("grouping", "priority").unwrap();
        assert_eq!(store.get("grouping").unwrap().as_deref(), Some("priority"));
    }

    #[test]
    fn test_absent_key() {
        let store = MemoryPreferenceStore::new();
        assert_eq!(store.get("ordering").unwrap(), None);
    }

    #[test]
    fn test_with_values() {
        let store = MemoryPreferenceStore::with_values([("ordering", "title")]);
        assert_eq!(store.get("ordering").unwrap().as_deref(), Some("title"));
    }
}
