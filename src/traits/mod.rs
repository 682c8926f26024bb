//! Trait definitions for dependency injection
//!
//! File access and the credential cache sit behind traits so the signer and
//! the identity store can be tested without touching the user's home.

mod credential_store;
mod record_store;

pub use credential_store::{Credential, CredentialError, CredentialStore};
pub use record_store::{RecordError, RecordStore};

#[cfg(test)]
pub use credential_store::MockCredentialStore;
#[cfg(test)]
pub use record_store::MockRecordStore;
