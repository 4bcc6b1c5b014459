//! # Storage Layer
//!
//! The two persistence collaborators the gallery depends on, abstracted
//! behind traits:
//!
//! - [`FileStorage`]: image bytes, addressed by file name within the
//!   application's private data directory. The original interface carried a
//!   location parameter on every call; here the location is fixed when the
//!   handle is constructed, since only the data directory is ever used.
//! - [`PreferenceStore`]: whole-value key/value persistence. One `set`
//!   replaces the entire named value; there is no structured query.
//!
//! ## Implementations
//!
//! - [`disk::DiskStorage`] / [`disk::DiskPreferences`]: production,
//!   file-backed. Preferences live as a single JSON object in `prefs.json`.
//! - [`memory::MemoryStorage`] / [`memory::MemoryPreferences`]: in-memory
//!   for testing. No persistence, fast, isolated.
//!
//! Forwarding impls over `Rc<RefCell<_>>` let a caller keep a handle to a
//! collaborator the gallery owns.

use crate::error::Result;
use std::cell::RefCell;
use std::rc::Rc;

pub mod disk;
pub mod memory;

/// Handle to a file written into the managed data directory.
#[derive(Debug, Clone)]
pub struct StoredFile {
    /// Full URI of the written file.
    pub uri: String,
}

/// File persistence for image bytes.
pub trait FileStorage {
    /// Write bytes under `name` in the managed directory.
    fn write(&mut self, name: &str, bytes: &[u8]) -> Result<StoredFile>;

    /// Read a file from the managed directory.
    fn read(&self, name: &str) -> Result<Vec<u8>>;

    /// Read bytes addressed by a capture-result URI, which may point outside
    /// the managed directory (a native temp path or a web-accessible URL).
    fn read_uri(&self, uri: &str) -> Result<Vec<u8>>;

    /// Delete a file from the managed directory.
    fn delete(&mut self, name: &str) -> Result<()>;
}

/// Whole-value key/value persistence.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

impl<F: FileStorage> FileStorage for Rc<RefCell<F>> {
    fn write(&mut self, name: &str, bytes: &[u8]) -> Result<StoredFile> {
        self.borrow_mut().write(name, bytes)
    }

    fn read(&self, name: &str) -> Result<Vec<u8>> {
        self.borrow().read(name)
    }

    fn read_uri(&self, uri: &str) -> Result<Vec<u8>> {
        self.borrow().read_uri(uri)
    }

    fn delete(&mut self, name: &str) -> Result<()> {
        self.borrow_mut().delete(name)
    }
}

impl<P: PreferenceStore> PreferenceStore for Rc<RefCell<P>> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.borrow().get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.borrow_mut().set(key, value)
    }
}
