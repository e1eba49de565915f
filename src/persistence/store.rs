//! Key/value save slots holding ordered string lists.
use anyhow::{Context, Result};
use bevy::prelude::*;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

/// Durable slot store. `set` overwrites; last write wins.
pub trait SaveStore: Send + Sync + 'static {
    fn get(&self, key: &str) -> Result<Option<Vec<String>>>;
    fn set(&mut self, key: &str, values: &[String]) -> Result<()>;
}

/// Store backed by a single RON file: `{ "key": ["a", "b"] }`.
#[derive(Debug, Clone)]
pub struct FileSaveStore {
    path: PathBuf,
}

impl FileSaveStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<Option<BTreeMap<String, Vec<String>>>> {
        let txt = match fs::read_to_string(&self.path) {
            Ok(txt) => txt,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e).with_context(|| format!("read save file {}", self.path.display()))
            }
        };
        let map = ron::from_str(&txt)
            .with_context(|| format!("parse save file {}", self.path.display()))?;
        Ok(Some(map))
    }
}

impl SaveStore for FileSaveStore {
    fn get(&self, key: &str) -> Result<Option<Vec<String>>> {
        Ok(self.read_all()?.and_then(|mut map| map.remove(key)))
    }

    fn set(&mut self, key: &str, values: &[String]) -> Result<()> {
        // A corrupt file is replaced rather than blocking every future save.
        let mut map = match self.read_all() {
            Ok(map) => map.unwrap_or_default(),
            Err(e) => {
                warn!(target: "persistence", "discarding unreadable save file: {e:#}");
                BTreeMap::new()
            }
        };
        map.insert(key.to_string(), values.to_vec());
        let body = ron::ser::to_string_pretty(&map, ron::ser::PrettyConfig::default())
            .context("serialize save slots")?;
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)
                .with_context(|| format!("create save dir {}", dir.display()))?;
        }
        let tmp = self.path.with_extension("ron.tmp");
        fs::write(&tmp, body).with_context(|| format!("write {}", tmp.display()))?;
        fs::rename(&tmp, &self.path)
            .with_context(|| format!("replace {}", self.path.display()))?;
        Ok(())
    }
}

/// Volatile store, used by tests and when no save path is configured.
#[derive(Debug, Clone, Default)]
pub struct MemorySaveStore {
    slots: HashMap<String, Vec<String>>,
    pub writes: usize,
}

impl MemorySaveStore {
    pub fn with_slot(key: &str, values: &[&str]) -> Self {
        let mut store = Self::default();
        store
            .slots
            .insert(key.to_string(), values.iter().map(|s| s.to_string()).collect());
        store
    }
}

impl SaveStore for MemorySaveStore {
    fn get(&self, key: &str) -> Result<Option<Vec<String>>> {
        Ok(self.slots.get(key).cloned())
    }

    fn set(&mut self, key: &str, values: &[String]) -> Result<()> {
        self.slots.insert(key.to_string(), values.to_vec());
        self.writes += 1;
        Ok(())
    }
}

/// The store the garden reads at bootstrap and writes after each growth.
#[derive(Resource, Deref, DerefMut)]
pub struct GardenStore(pub Box<dyn SaveStore>);

impl GardenStore {
    pub fn new(store: impl SaveStore) -> Self {
        Self(Box::new(store))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_store_round_trip_and_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileSaveStore::new(dir.path().join("nested/save.ron"));
        assert_eq!(store.get("tree_names").unwrap(), None);

        let first = vec!["mango1".to_string(), "magyi2".to_string()];
        store.set("tree_names", &first).unwrap();
        store.set("other", &["x".to_string()]).unwrap();
        assert_eq!(store.get("tree_names").unwrap(), Some(first));

        let second = vec!["mango2".to_string(), "magyi2".to_string()];
        store.set("tree_names", &second).unwrap();
        assert_eq!(store.get("tree_names").unwrap(), Some(second));
        assert_eq!(store.get("other").unwrap(), Some(vec!["x".to_string()]));
        assert!(!dir.path().join("nested/save.ron.tmp").exists());
    }

    #[test]
    fn corrupt_file_errors_on_get_and_is_replaced_on_set() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("save.ron");
        fs::write(&path, "not ron {{{").unwrap();
        let mut store = FileSaveStore::new(&path);
        assert!(store.get("tree_names").is_err());
        store.set("tree_names", &["mango1".to_string()]).unwrap();
        assert_eq!(
            store.get("tree_names").unwrap(),
            Some(vec!["mango1".to_string()])
        );
    }

    #[test]
    fn memory_store_counts_writes() {
        let mut store = MemorySaveStore::with_slot("k", &["a1"]);
        assert_eq!(store.get("k").unwrap(), Some(vec!["a1".to_string()]));
        store.set("k", &["a2".to_string()]).unwrap();
        assert_eq!(store.writes, 1);
    }
}
