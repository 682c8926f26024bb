//! Key-value record file trait

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Empty content in {path}")]
    EmptyContent { path: PathBuf },
}

/// Trait for a single key-value record file
///
/// Production: `FileRecordStore` on disk
/// Testing: `InMemoryRecordStore` or the generated mock
#[cfg_attr(test, mockall::automock)]
pub trait RecordStore: Send + Sync {
    /// Write one `key=value` line per entry, truncating or appending.
    /// An empty record succeeds without touching the file.
    fn write_record(&self, data: &HashMap<String, String>, truncate: bool) -> Result<(), RecordError>;

    /// Decode the whole file, later occurrences of a key winning
    fn read_record(&self) -> Result<HashMap<String, String>, RecordError>;

    /// Location of the backing file
    fn path(&self) -> &Path;
}
