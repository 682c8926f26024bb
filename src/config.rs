//! Locations of the cert and application record files

use std::ffi::OsString;
use std::path::PathBuf;
use thiserror::Error;

pub const CERT_FILE_NAME: &str = ".chaos.cert";
pub const APP_FILE_NAME: &str = ".chaos.app";

/// Replaces the cert file path when set
pub const CERT_FILE_ENV: &str = "CHAOS_CERT_FILE";
/// Replaces the application file path when set
pub const APP_FILE_ENV: &str = "CHAOS_APP_FILE";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot find home directory (no HOME environment variable)")]
    NoHomeInEnvironment,
    #[error("Cannot determine current directory: {0}")]
    NoCurrentDirectory(#[source] std::io::Error),
}

pub fn current_directory() -> Result<PathBuf, ConfigError> {
    std::env::current_dir().map_err(ConfigError::NoCurrentDirectory)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthPaths {
    pub cert_file: PathBuf,
    pub app_file: PathBuf,
}

impl AuthPaths {
    pub fn new(cert_file: impl Into<PathBuf>, app_file: impl Into<PathBuf>) -> Self {
        Self {
            cert_file: cert_file.into(),
            app_file: app_file.into(),
        }
    }

    /// Resolve from the process environment: `$HOME/.chaos.cert` and
    /// `<cwd>/.chaos.app`, unless overridden
    pub fn resolve() -> Result<Self, ConfigError> {
        Self::resolve_with(|name| std::env::var_os(name), current_directory)
    }

    /// Resolution with injected lookups. A directory is only consulted when
    /// its file has no override.
    pub fn resolve_with(
        env: impl Fn(&str) -> Option<OsString>,
        current_dir: impl FnOnce() -> Result<PathBuf, ConfigError>,
    ) -> Result<Self, ConfigError> {
        let cert_file = match env(CERT_FILE_ENV) {
            Some(path) => PathBuf::from(path),
            None => {
                let home = env("HOME").ok_or(ConfigError::NoHomeInEnvironment)?;
                PathBuf::from(home).join(CERT_FILE_NAME)
            }
        };
        let app_file = match env(APP_FILE_ENV) {
            Some(path) => PathBuf::from(path),
            None => current_dir()?.join(APP_FILE_NAME),
        };

        tracing::debug!(
            cert_file = %cert_file.display(),
            app_file = %app_file.display(),
            "Resolved record file paths"
        );
        Ok(Self { cert_file, app_file })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<OsString> {
        let vars: HashMap<String, OsString> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), OsString::from(v)))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_default_locations() {
        let paths = AuthPaths::resolve_with(
            env_from(&[("HOME", "/home/tester")]),
            || Ok(PathBuf::from("/work")),
        )
        .unwrap();

        assert_eq!(paths.cert_file, PathBuf::from("/home/tester/.chaos.cert"));
        assert_eq!(paths.app_file, PathBuf::from("/work/.chaos.app"));
    }

    #[test]
    fn test_overrides_win() {
        let paths = AuthPaths::resolve_with(
            env_from(&[(CERT_FILE_ENV, "/tmp/c"), (APP_FILE_ENV, "/tmp/a")]),
            || panic!("current directory should not be consulted"),
        )
        .unwrap();

        assert_eq!(paths, AuthPaths::new("/tmp/c", "/tmp/a"));
    }

    #[test]
    fn test_missing_home() {
        let err = AuthPaths::resolve_with(env_from(&[]), || Ok(PathBuf::from("/work"))).unwrap_err();

        assert!(matches!(err, ConfigError::NoHomeInEnvironment));
    }

    #[test]
    fn test_current_directory_failure() {
        let err = AuthPaths::resolve_with(env_from(&[("HOME", "/home/tester")]), || {
            Err(ConfigError::NoCurrentDirectory(std::io::Error::from(
                std::io::ErrorKind::NotFound,
            )))
        })
        .unwrap_err();

        assert!(matches!(err, ConfigError::NoCurrentDirectory(_)));
    }
}
