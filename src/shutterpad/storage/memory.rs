use super::{FileStorage, PreferenceStore, StoredFile};
use crate::error::{GalleryError, Result};
use std::collections::{HashMap, HashSet};

/// In-memory file storage for testing. Does NOT persist data.
#[derive(Default)]
pub struct MemoryStorage {
    files: HashMap<String, Vec<u8>>,
    external: HashMap<String, Vec<u8>>,
    failing_deletes: HashSet<String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register bytes reachable through `read_uri`, standing in for a
    /// capture result parked outside the managed directory.
    pub fn stage_external(&mut self, uri: &str, bytes: &[u8]) {
        self.external.insert(uri.to_string(), bytes.to_vec());
    }

    /// Drop a managed file, simulating bytes that went missing on disk.
    pub fn lose(&mut self, name: &str) {
        self.files.remove(name);
    }

    /// Make the next deletes of `name` fail with a storage error.
    pub fn fail_delete(&mut self, name: &str) {
        self.failing_deletes.insert(name.to_string());
    }

    pub fn contains(&self, name: &str) -> bool {
        self.files.contains_key(name)
    }
}

impl FileStorage for MemoryStorage {
    fn write(&mut self, name: &str, bytes: &[u8]) -> Result<StoredFile> {
        self.files.insert(name.to_string(), bytes.to_vec());
        Ok(StoredFile {
            uri: name.to_string(),
        })
    }

    fn read(&self, name: &str) -> Result<Vec<u8>> {
        self.files
            .get(name)
            .cloned()
            .ok_or_else(|| GalleryError::FileNotFound(name.to_string()))
    }

    fn read_uri(&self, uri: &str) -> Result<Vec<u8>> {
        self.external
            .get(uri)
            .or_else(|| self.files.get(uri))
            .cloned()
            .ok_or_else(|| GalleryError::FileNotFound(uri.to_string()))
    }

    fn delete(&mut self, name: &str) -> Result<()> {
        if self.failing_deletes.contains(name) {
            return Err(GalleryError::Storage(format!(
                "injected delete fault for {}",
                name
            )));
        }
        if self.files.remove(name).is_none() {
            return Err(GalleryError::FileNotFound(name.to_string()));
        }
        Ok(())
    }
}

/// In-memory preference store for testing.
#[derive(Default)]
pub struct MemoryPreferences {
    values: HashMap<String, String>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a value directly, bypassing the trait.
    pub fn preset(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_uri_sees_external_and_managed_files() {
        let mut storage = MemoryStorage::new();
        storage.stage_external("blob:cam/1", b"external");
        storage.write("managed.jpeg", b"managed").unwrap();

        assert_eq!(storage.read_uri("blob:cam/1").unwrap(), b"external");
        assert_eq!(storage.read_uri("managed.jpeg").unwrap(), b"managed");
        assert!(matches!(
            storage.read_uri("missing"),
            Err(GalleryError::FileNotFound(_))
        ));
    }

    #[test]
    fn delete_fault_injection() {
        let mut storage = MemoryStorage::new();
        storage.write("a.jpeg", b"bytes").unwrap();
        storage.fail_delete("a.jpeg");

        assert!(matches!(
            storage.delete("a.jpeg"),
            Err(GalleryError::Storage(_))
        ));
        assert!(storage.contains("a.jpeg"));
    }
}
