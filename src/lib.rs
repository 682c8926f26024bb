//! ChaosAuth - local access/secret key store with request signing
//!
//! This library keeps an access/secret key pair cached in memory and on disk,
//! signs payloads with the secret key, and verifies received signatures. An
//! application identity record is persisted with the same key-value format.

pub mod app_identity;
pub mod codec;
pub mod config;
pub mod mocks;
pub mod production;
pub mod signer;
pub mod traits;

mod state;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub use app_identity::{AppIdentity, AppIdentityStore};
pub use config::AuthPaths;
pub use signer::Signer;
pub use state::AuthState;

/// Directory for the rolling log file; stdout only when unset
pub const LOG_DIR_ENV: &str = "CHAOS_LOG_DIR";

/// Initialize logging to stdout and, if `CHAOS_LOG_DIR` is set, a daily file.
///
/// The returned guard flushes the file writer and must live as long as the
/// process logs.
pub fn init_logging() -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("chaosauth_lib=info,chaosauth=info"));

    let (file_layer, guard) = match std::env::var_os(LOG_DIR_ENV) {
        Some(dir) => {
            let file_appender = rolling::daily(dir, "chaosauth.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(file_layer)
        .init();

    guard
}
