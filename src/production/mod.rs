//! Production implementations of traits

mod credential_store;
mod file_record_store;

pub use credential_store::CachedCredentialStore;
pub use file_record_store::FileRecordStore;
