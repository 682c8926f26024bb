//! On-disk key-value record file
//!
//! Each instance owns one file path and one reader/writer lock, so writes to
//! the same file are serialized while the cert and app files never contend.

use std::collections::HashMap;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use parking_lot::RwLock;

use crate::codec;
use crate::traits::{RecordError, RecordStore};

pub struct FileRecordStore {
    path: PathBuf,
    lock: RwLock<()>,
}

impl FileRecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: RwLock::new(()),
        }
    }

    fn io_error(&self, source: std::io::Error) -> RecordError {
        RecordError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl RecordStore for FileRecordStore {
    fn write_record(&self, data: &HashMap<String, String>, truncate: bool) -> Result<(), RecordError> {
        if data.is_empty() {
            return Ok(());
        }
        let _guard = self.lock.write();

        let mut options = OpenOptions::new();
        options.create(true);
        if truncate {
            options.write(true).truncate(true);
        } else {
            options.append(true);
        }
        let mut file = options.open(&self.path).map_err(|e| {
            tracing::error!(file = %self.path.display(), error = %e, "record data to file failed");
            self.io_error(e)
        })?;

        for (key, value) in data {
            if let Err(e) = file.write_all(codec::encode_line(key, value).as_bytes()) {
                tracing::error!(
                    file = %self.path.display(),
                    key = %key,
                    value = %value,
                    error = %e,
                    "write data to file failed"
                );
                return Err(self.io_error(e));
            }
        }

        tracing::debug!(file = %self.path.display(), entries = data.len(), truncate, "Record written");
        Ok(())
    }

    fn read_record(&self) -> Result<HashMap<String, String>, RecordError> {
        let content = {
            let _guard = self.lock.read();
            std::fs::read_to_string(&self.path).map_err(|e| {
                tracing::debug!(file = %self.path.display(), error = %e, "read record file failed");
                self.io_error(e)
            })?
        };

        let record = codec::parse_record(&content).ok_or_else(|| RecordError::EmptyContent {
            path: self.path.clone(),
        })?;
        tracing::debug!(file = %self.path.display(), entries = record.len(), "Record read");
        Ok(record)
    }

    fn path(&self) -> &Path {
        &self.path
    }
}
