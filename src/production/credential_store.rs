//! Credential cache kept in step with the cert file.
//!
//! The cache's write lock is held across the cert-file write and the cache
//! update, so readers observe either the old pair or the new one, and the
//! file never holds a pair the cache has not also taken.

use std::collections::HashMap;
use std::sync::Arc;
use parking_lot::RwLock;

use crate::codec::{ACCESS_KEY_NAME, SECRET_KEY_NAME};
use crate::traits::{Credential, CredentialError, CredentialStore, RecordStore};

pub struct CachedCredentialStore {
    cert: Arc<dyn RecordStore>,
    cache: RwLock<Credential>,
}

impl CachedCredentialStore {
    /// Create an empty cache backed by the given cert record
    pub fn new(cert: Arc<dyn RecordStore>) -> Self {
        Self {
            cert,
            cache: RwLock::new(Credential::default()),
        }
    }

    /// Reload the cache from the cert file.
    ///
    /// Both keys must be present and non-empty, otherwise the cache is left
    /// as it was.
    pub fn restore_from_file(&self) -> Result<(), CredentialError> {
        let mut cache = self.cache.write();
        let mut record = self.cert.read_record()?;

        let access_key = record.remove(ACCESS_KEY_NAME).unwrap_or_default();
        let secret_key = record.remove(SECRET_KEY_NAME).unwrap_or_default();
        if access_key.is_empty() || secret_key.is_empty() {
            tracing::warn!(file = %self.cert.path().display(), "cert file is missing a key");
            return Err(CredentialError::EmptyKey);
        }

        tracing::info!(access_key = %access_key, "Restored credential from cert file");
        *cache = Credential::new(access_key, secret_key);
        Ok(())
    }
}

impl CredentialStore for CachedCredentialStore {
    fn access_key(&self) -> String {
        self.cache.read().access_key.clone()
    }

    fn secret_key(&self) -> String {
        self.cache.read().secret_key.clone()
    }

    fn credential(&self) -> Credential {
        self.cache.read().clone()
    }

    fn record_secret_key(&self, access_key: &str, secret_key: &str) -> Result<(), CredentialError> {
        if access_key.is_empty() || secret_key.is_empty() {
            tracing::warn!(
                access_key_empty = access_key.is_empty(),
                secret_key_empty = secret_key.is_empty(),
                "Rejected credential with empty key"
            );
            return Err(CredentialError::EmptyKey);
        }

        let keys = HashMap::from([
            (ACCESS_KEY_NAME.to_string(), access_key.to_string()),
            (SECRET_KEY_NAME.to_string(), secret_key.to_string()),
        ]);

        let mut cache = self.cache.write();
        self.cert.write_record(&keys, true)?;
        *cache = Credential::new(access_key, secret_key);

        tracing::info!(access_key = %access_key, file = %self.cert.path().display(), "Recorded credential");
        Ok(())
    }
}
