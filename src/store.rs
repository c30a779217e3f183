//! Persistence gateway: load, save and list presentations by identifier

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::codec;
use crate::config::StorageConfig;
use crate::error::{EntityKind, Error, Result};
use crate::model::{DocumentSummary, Presentation};

/// Keyed storage of presentation records
pub trait Store {
    fn load(&self, id: &str) -> Result<Presentation>;
    fn save(&mut self, presentation: &Presentation) -> Result<()>;
    /// Summaries of every stored presentation, ordered by identifier
    fn list(&self) -> Result<Vec<DocumentSummary>>;
}

/// One pretty-printed `<id>.json` file per presentation
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open the store at `config.dir`, creating it when configured to
    pub fn open(config: &StorageConfig) -> Result<Self> {
        let dir = config.dir.clone();
        if config.create {
            std::fs::create_dir_all(&dir)
                .map_err(|e| Error::persistence(dir.display().to_string(), e))?;
        }
        log::info!("using presentation store at {}", dir.display());
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, id: &str) -> Result<PathBuf> {
        if id.is_empty() || id.contains(['/', '\\']) || id.starts_with('.') {
            return Err(Error::not_found(EntityKind::Presentation, id));
        }
        Ok(self.dir.join(format!("{id}.json")))
    }
}

impl Store for FileStore {
    fn load(&self, id: &str) -> Result<Presentation> {
        let path = self.path(id)?;
        let text = match std::fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(Error::not_found(EntityKind::Presentation, id))
            }
            Err(e) => return Err(Error::persistence(id, e)),
        };
        log::debug!("loaded {}", path.display());
        codec::from_json(&text)
    }

    fn save(&mut self, presentation: &Presentation) -> Result<()> {
        let id = presentation.id();
        let path = self.path(id)?;
        let text = codec::to_json(presentation)?;
        std::fs::write(&path, text).map_err(|e| Error::persistence(id, e))?;
        log::info!("saved {} ({} slides)", path.display(), presentation.len());
        Ok(())
    }

    fn list(&self) -> Result<Vec<DocumentSummary>> {
        let entries = std::fs::read_dir(&self.dir)
            .map_err(|e| Error::persistence(self.dir.display().to_string(), e))?;
        let mut paths: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.extension().and_then(|e| e.to_str()) == Some("json"))
            .collect();
        paths.sort();

        let mut summaries = Vec::with_capacity(paths.len());
        for path in paths {
            let loaded = std::fs::read_to_string(&path)
                .map_err(|e| Error::persistence(path.display().to_string(), e))
                .and_then(|text| codec::from_json(&text));
            match loaded {
                Ok(presentation) => summaries.push(presentation.summary()),
                Err(e) => log::warn!("skipping {}: {}", path.display(), e),
            }
        }
        Ok(summaries)
    }
}

/// In-process store holding encoded trees
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: BTreeMap<String, Value>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Store for MemoryStore {
    fn load(&self, id: &str) -> Result<Presentation> {
        let tree = self
            .records
            .get(id)
            .ok_or_else(|| Error::not_found(EntityKind::Presentation, id))?;
        codec::from_tree(tree.clone())
    }

    fn save(&mut self, presentation: &Presentation) -> Result<()> {
        self.records
            .insert(presentation.id().to_string(), codec::to_tree(presentation));
        Ok(())
    }

    fn list(&self) -> Result<Vec<DocumentSummary>> {
        let mut summaries = Vec::new();
        for (id, tree) in &self.records {
            match codec::from_tree(tree.clone()) {
                Ok(presentation) => summaries.push(presentation.summary()),
                Err(e) => log::warn!("skipping unreadable record {}: {}", id, e),
            }
        }
        Ok(summaries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(dir: &Path) -> StorageConfig {
        StorageConfig {
            dir: dir.to_path_buf(),
            create: true,
        }
    }

    #[test]
    fn test_memory_round_trip() {
        let mut store = MemoryStore::new();
        let mut p = Presentation::with_id("m1");
        p.title = "Memory".into();
        p.new_slide(None);
        store.save(&p).unwrap();
        assert_eq!(store.load("m1").unwrap(), p);
        assert_eq!(store.list().unwrap()[0].title, "Memory");
    }

    #[test]
    fn test_memory_list_skips_unreadable() {
        let mut store = MemoryStore::new();
        store.save(&Presentation::with_id("good")).unwrap();
        store
            .records
            .insert("broken".into(), serde_json::json!({"id": "broken", "slides": "nope"}));
        let summaries = store.list().unwrap();
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].id, "good");
        assert!(store.load("broken").is_err());
    }

    #[test]
    fn test_memory_missing() {
        assert!(matches!(
            MemoryStore::new().load("nope"),
            Err(Error::NotFound { kind: EntityKind::Presentation, .. })
        ));
    }

    #[test]
    fn test_file_store_creates_dir() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("nested").join("decks");
        let store = FileStore::open(&config(&dir)).unwrap();
        assert!(store.dir().is_dir());
    }

    #[test]
    fn test_file_store_without_create_needs_dir() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("absent");
        let store = FileStore::open(&StorageConfig {
            dir,
            create: false,
        })
        .unwrap();
        assert!(matches!(store.list(), Err(Error::Persistence { .. })));
    }

    #[test]
    fn test_file_store_rejects_path_ids() {
        let root = tempfile::tempdir().unwrap();
        let store = FileStore::open(&config(root.path())).unwrap();
        assert!(matches!(store.load("../etc/passwd"), Err(Error::NotFound { .. })));
    }

    #[test]
    fn test_list_skips_unreadable() {
        let root = tempfile::tempdir().unwrap();
        let mut store = FileStore::open(&config(root.path())).unwrap();
        store.save(&Presentation::with_id("good")).unwrap();
        std::fs::write(root.path().join("broken.json"), "{ not json").unwrap();
        let ids: Vec<_> = store.list().unwrap().into_iter().map(|s| s.id).collect();
        assert_eq!(ids, vec!["good"]);
    }
}
