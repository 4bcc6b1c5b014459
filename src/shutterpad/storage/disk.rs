use super::{FileStorage, PreferenceStore, StoredFile};
use crate::error::{GalleryError, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

const PREFS_FILENAME: &str = "prefs.json";

/// File storage rooted at the application's private data directory.
pub struct DiskStorage {
    root: PathBuf,
}

impl DiskStorage {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn ensure_root(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(GalleryError::Io)?;
        }
        Ok(())
    }

    /// Records address files either by bare name (relative to the root) or
    /// by full URI, depending on the runtime that created them. Accept both.
    fn resolve(&self, name: &str) -> PathBuf {
        let name = name.strip_prefix("file://").unwrap_or(name);
        let path = Path::new(name);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }
}

impl FileStorage for DiskStorage {
    fn write(&mut self, name: &str, bytes: &[u8]) -> Result<StoredFile> {
        self.ensure_root()?;
        let path = self.root.join(name);
        fs::write(&path, bytes).map_err(GalleryError::Io)?;
        Ok(StoredFile {
            uri: path.to_string_lossy().into_owned(),
        })
    }

    fn read(&self, name: &str) -> Result<Vec<u8>> {
        let path = self.resolve(name);
        if !path.exists() {
            return Err(GalleryError::FileNotFound(name.to_string()));
        }
        fs::read(&path).map_err(GalleryError::Io)
    }

    fn read_uri(&self, uri: &str) -> Result<Vec<u8>> {
        self.read(uri)
    }

    fn delete(&mut self, name: &str) -> Result<()> {
        let path = self.resolve(name);
        if !path.exists() {
            return Err(GalleryError::FileNotFound(name.to_string()));
        }
        fs::remove_file(&path).map_err(GalleryError::Io)
    }
}

/// Key-value preferences persisted as one JSON object in `prefs.json`.
///
/// Every `set` reads the file, replaces the key, and rewrites the whole
/// object. Whole-value semantics only.
pub struct DiskPreferences {
    path: PathBuf,
}

impl DiskPreferences {
    pub fn new(dir: &Path) -> Self {
        Self {
            path: dir.join(PREFS_FILENAME),
        }
    }

    fn load(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(&self.path).map_err(GalleryError::Io)?;
        serde_json::from_str(&content).map_err(GalleryError::Serialization)
    }

    fn store(&self, values: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(GalleryError::Io)?;
            }
        }
        let content = serde_json::to_string_pretty(values).map_err(GalleryError::Serialization)?;
        fs::write(&self.path, content).map_err(GalleryError::Io)
    }
}

impl PreferenceStore for DiskPreferences {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.load()?.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut values = self.load()?;
        values.insert(key.to_string(), value.to_string());
        self.store(&values)
    }
}
