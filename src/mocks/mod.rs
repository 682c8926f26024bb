//! Test doubles for dependency injection
//!
//! In-memory implementations of the record file and the credential cache for
//! isolated testing.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use parking_lot::{Mutex, RwLock};

use crate::codec;
use crate::traits::{Credential, CredentialError, CredentialStore, RecordError, RecordStore};

// ============================================================================
// InMemoryRecordStore
// ============================================================================

/// In-memory record file for testing
///
/// Keeps the encoded text in a String so tests can assert on the exact lines
/// a writer produced.
#[derive(Clone)]
pub struct InMemoryRecordStore {
    path: PathBuf,
    contents: Arc<Mutex<Option<String>>>,
}

impl InMemoryRecordStore {
    /// Create a store with no backing "file" yet
    pub fn new() -> Self {
        Self {
            path: PathBuf::from("memory://record"),
            contents: Arc::new(Mutex::new(None)),
        }
    }

    /// Create a store whose file already holds `contents`
    pub fn with_contents(contents: &str) -> Self {
        let store = Self::new();
        *store.contents.lock() = Some(contents.to_string());
        store
    }

    /// Raw text written so far (empty if never written)
    pub fn contents(&self) -> String {
        self.contents.lock().clone().unwrap_or_default()
    }

    /// Whether anything has created the "file"
    pub fn exists(&self) -> bool {
        self.contents.lock().is_some()
    }
}

impl Default for InMemoryRecordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStore for InMemoryRecordStore {
    fn write_record(&self, data: &HashMap<String, String>, truncate: bool) -> Result<(), RecordError> {
        if data.is_empty() {
            return Ok(());
        }
        let mut contents = self.contents.lock();
        let text = contents.get_or_insert_with(String::new);
        if truncate {
            text.clear();
        }
        for (key, value) in data {
            text.push_str(&codec::encode_line(key, value));
        }
        Ok(())
    }

    fn read_record(&self) -> Result<HashMap<String, String>, RecordError> {
        let contents = self.contents.lock();
        let Some(text) = contents.as_deref() else {
            return Err(RecordError::Io {
                path: self.path.clone(),
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            });
        };
        codec::parse_record(text).ok_or_else(|| RecordError::EmptyContent {
            path: self.path.clone(),
        })
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

// ============================================================================
// StaticCredentialStore
// ============================================================================

/// Credential cache with no backing file
///
/// `record_secret_key` validates like the real store, then swaps the pair in
/// memory.
pub struct StaticCredentialStore {
    credential: RwLock<Credential>,
}

impl StaticCredentialStore {
    pub fn new() -> Self {
        Self {
            credential: RwLock::new(Credential::default()),
        }
    }

    pub fn with_credential(access_key: &str, secret_key: &str) -> Self {
        Self {
            credential: RwLock::new(Credential::new(access_key, secret_key)),
        }
    }
}

impl Default for StaticCredentialStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialStore for StaticCredentialStore {
    fn access_key(&self) -> String {
        self.credential.read().access_key.clone()
    }

    fn secret_key(&self) -> String {
        self.credential.read().secret_key.clone()
    }

    fn credential(&self) -> Credential {
        self.credential.read().clone()
    }

    fn record_secret_key(&self, access_key: &str, secret_key: &str) -> Result<(), CredentialError> {
        if access_key.is_empty() || secret_key.is_empty() {
            return Err(CredentialError::EmptyKey);
        }
        *self.credential.write() = Credential::new(access_key, secret_key);
        Ok(())
    }
}
