//! File-backed storage for record collections and image blobs.
//!
//! `FileStore` is stateless — it owns no records, just a root directory. Each
//! named collection lives in `{root}/{name}.json` as a pretty-printed array;
//! image payloads live under `{root}/images/{file_name}`. Saves go through a
//! temp file and a rename so a crash mid-write never leaves a half-written
//! document in place of a good one.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

const IMAGES_DIR: &str = "images";

/// Storage failure, classified so repositories can treat a missing file as an
/// empty collection while surfacing real I/O problems.
#[derive(Debug)]
pub enum StorageError {
    /// The named document or image has never been written.
    NotFound(String),
    Io(io::Error),
    Serde(serde_json::Error),
}

impl StorageError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StorageError::NotFound(_))
    }
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::NotFound(name) => write!(f, "no stored data named '{}'", name),
            StorageError::Io(e) => write!(f, "storage I/O error: {}", e),
            StorageError::Serde(e) => write!(f, "storage (de)serialization error: {}", e),
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StorageError::NotFound(_) => None,
            StorageError::Io(e) => Some(e),
            StorageError::Serde(e) => Some(e),
        }
    }
}

impl From<io::Error> for StorageError {
    fn from(e: io::Error) -> Self {
        StorageError::Io(e)
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(e: serde_json::Error) -> Self {
        StorageError::Serde(e)
    }
}

/// Generic load/save primitive for structured records plus a parallel pair
/// for opaque JPEG payloads.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `root`, creating the directory tree if needed.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let root = root.into();
        fs::create_dir_all(root.join(IMAGES_DIR))?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn document_path(&self, name: &str) -> PathBuf {
        self.root.join(format!("{}.json", name))
    }

    /// Serialize `value` to the named document, replacing any prior content.
    /// The write lands in a temp file first and is renamed into place, so
    /// readers never observe a partial document.
    pub fn save<T: Serialize>(&self, value: &T, name: &str) -> Result<(), StorageError> {
        let path = self.document_path(name);
        let tmp = self.root.join(format!("{}.json.tmp", name));
        let data = serde_json::to_vec_pretty(value)?;
        fs::write(&tmp, &data)?;
        fs::rename(&tmp, &path)?;
        debug!(name, bytes = data.len(), "saved document");
        Ok(())
    }

    /// Deserialize the named document. `NotFound` when it has never been
    /// written — repositories treat that as an empty collection.
    pub fn load<T: DeserializeOwned>(&self, name: &str) -> Result<T, StorageError> {
        let path = self.document_path(name);
        let data = match fs::read(&path) {
            Ok(data) => data,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(StorageError::NotFound(name.to_string()));
            }
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_slice(&data)?)
    }

    /// Remove the named document. Deleting a name that was never written is
    /// not an error.
    pub fn delete(&self, name: &str) -> Result<(), StorageError> {
        match fs::remove_file(self.document_path(name)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Store an opaque JPEG payload under the image sub-namespace and return
    /// the key it was stored under.
    pub fn save_image(&self, bytes: &[u8], file_name: &str) -> Result<String, StorageError> {
        let path = self.root.join(IMAGES_DIR).join(file_name);
        fs::write(&path, bytes)?;
        debug!(file_name, bytes = bytes.len(), "saved image");
        Ok(file_name.to_string())
    }

    pub fn load_image(&self, file_name: &str) -> Result<Vec<u8>, StorageError> {
        let path = self.root.join(IMAGES_DIR).join(file_name);
        match fs::read(&path) {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(StorageError::NotFound(file_name.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Idempotent, like [`FileStore::delete`].
    pub fn delete_image(&self, file_name: &str) -> Result<(), StorageError> {
        match fs::remove_file(self.root.join(IMAGES_DIR).join(file_name)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
