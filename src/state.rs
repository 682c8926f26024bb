//! Application state management

use std::sync::Arc;

use crate::app_identity::AppIdentityStore;
use crate::config::AuthPaths;
use crate::production::{CachedCredentialStore, FileRecordStore};
use crate::signer::Signer;
use crate::traits::{CredentialStore, RecordStore};

/// Shared components, wired once per process and passed by `Arc`
pub struct AuthState {
    pub credentials: Arc<CachedCredentialStore>,
    pub signer: Arc<Signer>,
    pub app_identity: Arc<AppIdentityStore>,
}

impl AuthState {
    /// Build the state with file-backed records at `paths`
    pub fn new_production(paths: &AuthPaths) -> Self {
        tracing::info!(
            cert_file = %paths.cert_file.display(),
            app_file = %paths.app_file.display(),
            "Initializing AuthState"
        );
        Self::new_with(
            Arc::new(FileRecordStore::new(&paths.cert_file)),
            Arc::new(FileRecordStore::new(&paths.app_file)),
        )
    }

    /// Build the state over arbitrary record stores
    pub fn new_with(cert: Arc<dyn RecordStore>, app: Arc<dyn RecordStore>) -> Self {
        let credentials = Arc::new(CachedCredentialStore::new(cert));
        let signer = Arc::new(Signer::new(credentials.clone() as Arc<dyn CredentialStore>));
        let app_identity = Arc::new(AppIdentityStore::new(app));
        Self {
            credentials,
            signer,
            app_identity,
        }
    }
}
