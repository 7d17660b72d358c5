use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::PreferenceStore;
use crate::error::{BoardError, Result};
use crate::paths;

/// Preferences kept as a flat YAML map on disk
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Store at the default location under the board root
    pub fn at_default_path() -> Self {
        Self::new(paths::preferences_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        Ok(serde_yaml_ng::from_str(&content)?)
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    /// Write one value, keeping the others. A file that is not a YAML map
    /// is replaced instead of blocking every write.
    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut values = match self.read_all() {
            Ok(values) => values,
            Err(BoardError::YamlParse(e)) => {
                tracing::warn!(
                    path = %self.path.display(),
                    "discarding unreadable preferences file: {e}"
                );
                BTreeMap::new()
            }
            Err(e) => return Err(e),
        };
        values.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_yaml_ng::to_string(&values)?)?;
        tracing::debug!(path = %self.path.display(), key, value, "saved preference");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_round_trip_on_disk() {
        let dir = TempDir::new().unwrap();
        let store = FilePreferenceStore::new(dir.path().join("nested/preferences.yaml"));

        assert_eq!(store.get("grouping").unwrap(), None);
        store.set("grouping", "user").unwrap();
        store.set("ordering", "title").unwrap();

        let reopened = FilePreferenceStore::new(store.path());
        assert_eq!(reopened.get("grouping").unwrap().as_deref(), Some("user"));
        assert_eq!(reopened.get("ordering").unwrap().as_deref(), Some("title"));
    }

    #[test]
    fn test_set_overwrites_previous_value() {
        let dir = TempDir::new().unwrap();
        let store = FilePreferenceStore::new(dir.path().join("preferences.yaml"));
        store.set("grouping", "user").unwrap();
        store.set("grouping", "priority").unwrap();
        assert_eq!(store.get("grouping").unwrap().as_deref(), Some("priority"));
    }

    #[test]
    fn test_empty_file_reads_as_absent() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("preferences.yaml");
        fs::write(&path, "").unwrap();
        let store = FilePreferenceStore::new(&path);
        assert_eq!(store.get("grouping").unwrap(), None);
    }

    #[test]
    fn test_garbage_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("preferences.yaml");
        fs::write(&path, "- just\n- a list\n").unwrap();
        let store = FilePreferenceStore::new(&path);
        assert!(store.get("grouping").is_err());
    }

    #[test]
    fn test_set_replaces_garbage_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("preferences.yaml");
        fs::write(&path, "- just\n- a list\n").unwrap();
        let store = FilePreferenceStore::new(&path);

        store.set("grouping", "user").unwrap();
        assert_eq!(store.get("grouping").unwrap().as_deref(), Some("user"));
        assert_eq!(store.get("ordering").unwrap(), None);
    }
}
