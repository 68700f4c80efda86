use crate::error::{BasketError, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::marker::PhantomData;
use std::mem::discriminant;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// A preference record persisted as one whole-object JSON blob.
pub trait Snapshot: Serialize + DeserializeOwned + Default {
    /// Storage key; doubles as the file stem. Bump the suffix on breaking changes.
    const KEY: &'static str;
}

/// Reads and writes a single [`Snapshot`] under the state directory.
///
/// Loading never fails: a missing, unreadable or malformed file yields the
/// defaults, and a usable file is merged field by field over them.
pub struct SnapshotStore<T: Snapshot> {
    path: PathBuf,
    _marker: PhantomData<T>,
}

impl<T: Snapshot> SnapshotStore<T> {
    pub fn new(state_dir: &Path) -> Self {
        Self {
            path: state_dir.join(format!("{}.json", T::KEY)),
            _marker: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> T {
        self.load_over(T::default())
    }

    /// Stored fields laid over `defaults`. Fields that are missing, or whose
    /// JSON kind differs from the default's, keep the value from `defaults`.
    pub fn load_over(&self, defaults: T) -> T {
        if !self.path.exists() {
            tracing::debug!(key = T::KEY, "No stored snapshot, using defaults");
            return defaults;
        }

        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!(key = T::KEY, error = %e, "Failed to read snapshot, using defaults");
                return defaults;
            }
        };

        let stored: Value = match serde_json::from_str(&content) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key = T::KEY, error = %e, "Malformed snapshot, using defaults");
                return defaults;
            }
        };
        let Some(stored) = stored.as_object() else {
            tracing::warn!(key = T::KEY, "Snapshot is not an object, using defaults");
            return defaults;
        };

        let mut merged = match serde_json::to_value(&defaults) {
            Ok(Value::Object(map)) => map,
            _ => return defaults,
        };
        for (field, value) in stored {
            let usable = merged
                .get(field)
                .is_none_or(|d| d.is_null() || discriminant(d) == discriminant(value));
            if usable {
                merged.insert(field.clone(), value.clone());
            } else {
                tracing::warn!(key = T::KEY, field = %field, "Ignoring stored field of the wrong type");
            }
        }

        match serde_json::from_value(Value::Object(merged)) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                tracing::warn!(key = T::KEY, error = %e, "Malformed snapshot, using defaults");
                defaults
            }
        }
    }

    pub fn save(&self, snapshot: &T) -> Result<()> {
        let content = serde_json::to_string_pretty(snapshot)?;
        self.atomic_write(&content)?;
        tracing::debug!(key = T::KEY, path = %self.path.display(), "Saved snapshot");
        Ok(())
    }

    /// Overwrites the stored snapshot with defaults and returns them.
    pub fn reset(&self) -> Result<T> {
        let defaults = T::default();
        self.save(&defaults)?;
        tracing::info!(key = T::KEY, "Reset snapshot to defaults");
        Ok(defaults)
    }

    /// Write to a temp file in the same directory, then rename over the target
    fn atomic_write(&self, content: &str) -> Result<()> {
        let target_dir = self
            .path
            .parent()
            .ok_or_else(|| BasketError::Storage("Snapshot path has no parent directory".to_string()))?;
        std::fs::create_dir_all(target_dir)?;

        let mut temp_file = NamedTempFile::new_in(target_dir)
            .map_err(|e| BasketError::Storage(format!("Failed to create temp file: {}", e)))?;

        use std::io::Write;
        temp_file
            .write_all(content.as_bytes())
            .map_err(|e| BasketError::Storage(format!("Failed to write to temp file: {}", e)))?;

        temp_file
            .as_file()
            .sync_all()
            .map_err(|e| BasketError::Storage(format!("Failed to sync temp file: {}", e)))?;

        temp_file
            .persist(&self.path)
            .map_err(|e| BasketError::Storage(format!("Failed to persist temp file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BasketPersona, ProduceSort, Theme};
    use crate::storage::BasketPrefs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_loads_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let store: SnapshotStore<BasketPrefs> = SnapshotStore::new(temp_dir.path());
        assert_eq!(store.load(), BasketPrefs::default());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_save_then_load() {
        let temp_dir = TempDir::new().unwrap();
        let store: SnapshotStore<BasketPrefs> = SnapshotStore::new(&temp_dir.path().join("state"));

        let prefs = BasketPrefs {
            theme: Theme::Light,
            persona: BasketPersona::Focus,
            sort: ProduceSort::Az,
            market_id: "pike".to_string(),
        };
        store.save(&prefs).unwrap();

        assert!(store.path().ends_with("market_basket_v1.json"));
        assert_eq!(store.load(), prefs);
    }

    #[test]
    fn test_malformed_file_falls_back_to_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let store: SnapshotStore<BasketPrefs> = SnapshotStore::new(temp_dir.path());
        std::fs::write(store.path(), "{ this is not json").unwrap();
        assert_eq!(store.load(), BasketPrefs::default());
    }

    #[test]
    fn test_load_over_fills_missing_and_mistyped_fields() {
        let temp_dir = TempDir::new().unwrap();
        let store: SnapshotStore<BasketPrefs> = SnapshotStore::new(temp_dir.path());
        let defaults = BasketPrefs {
            market_id: "miami".to_string(),
            ..Default::default()
        };

        std::fs::write(store.path(), r#"{"theme":"light"}"#).unwrap();
        let prefs = store.load_over(defaults.clone());
        assert_eq!(prefs.theme, Theme::Light);
        assert_eq!(prefs.market_id, "miami");

        std::fs::write(store.path(), r#"{"marketId":7,"sort":"az"}"#).unwrap();
        let prefs = store.load_over(defaults.clone());
        assert_eq!(prefs.sort, ProduceSort::Az);
        assert_eq!(prefs.market_id, "miami");

        std::fs::write(store.path(), "[1, 2, 3]").unwrap();
        assert_eq!(store.load_over(defaults.clone()), defaults);

        std::fs::write(store.path(), "{ broken").unwrap();
        assert_eq!(store.load_over(defaults.clone()), defaults);
    }

    #[test]
    fn test_reset_overwrites_stored_state() {
        let temp_dir = TempDir::new().unwrap();
        let store: SnapshotStore<BasketPrefs> = SnapshotStore::new(temp_dir.path());
        let prefs = BasketPrefs {
            market_id: "miami".to_string(),
            ..Default::default()
        };
        store.save(&prefs).unwrap();

        let reset = store.reset().unwrap();
        assert_eq!(reset, BasketPrefs::default());
        assert_eq!(store.load().market_id, "austin");
    }
}
