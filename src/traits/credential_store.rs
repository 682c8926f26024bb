//! Credential storage trait for the cached access/secret key pair

use std::fmt;
use thiserror::Error;

use super::RecordError;

#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("accessKey or secretKey is empty")]
    EmptyKey,
    #[error("Record error: {0}")]
    Record(#[from] RecordError),
}

/// Access/secret key pair. Both fields are empty until a pair is recorded.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credential {
    pub access_key: String,
    pub secret_key: String,
}

impl Credential {
    pub fn new(access_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            access_key: access_key.into(),
            secret_key: secret_key.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.access_key.is_empty() && self.secret_key.is_empty()
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("access_key", &self.access_key)
            .field("secret_key", &"<redacted>")
            .finish()
    }
}

/// Trait for the process credential cache
///
/// Production: `CachedCredentialStore` synced to the cert file
/// Testing: `StaticCredentialStore` or the generated mock
#[cfg_attr(test, mockall::automock)]
pub trait CredentialStore: Send + Sync {
    /// Cached access key, empty if none recorded
    fn access_key(&self) -> String;

    /// Cached secret key, empty if none recorded
    fn secret_key(&self) -> String;

    /// Both keys read under one lock acquisition
    fn credential(&self) -> Credential;

    /// Persist a new pair to the cert file and cache it.
    /// Rejects empty keys before any I/O.
    fn record_secret_key(&self, access_key: &str, secret_key: &str) -> Result<(), CredentialError>;
}
