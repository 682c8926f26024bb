//! Application identity record (instance id and group)

use std::collections::HashMap;
use std::sync::Arc;
use serde::Serialize;

use crate::codec::{APP_GROUP_KEY_NAME, APP_INSTANCE_KEY_NAME};
use crate::traits::{RecordError, RecordStore};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppIdentity {
    pub app_instance: String,
    pub app_group: String,
}

pub struct AppIdentityStore {
    record: Arc<dyn RecordStore>,
}

impl AppIdentityStore {
    pub fn new(record: Arc<dyn RecordStore>) -> Self {
        Self { record }
    }

    /// Write the identity pair; `truncate = false` appends, leaving the new
    /// pair to win on the next read
    pub fn record_application_to_file(
        &self,
        app_instance: &str,
        app_group: &str,
        truncate: bool,
    ) -> Result<(), RecordError> {
        let keys = HashMap::from([
            (APP_INSTANCE_KEY_NAME.to_string(), app_instance.to_string()),
            (APP_GROUP_KEY_NAME.to_string(), app_group.to_string()),
        ]);
        self.record.write_record(&keys, truncate)?;
        tracing::info!(app_instance = %app_instance, app_group = %app_group, truncate, "Recorded application");
        Ok(())
    }

    /// Read the identity pair. Unknown keys are ignored and a missing key
    /// reads as an empty string.
    pub fn read_app_info_from_file(&self) -> Result<AppIdentity, RecordError> {
        let mut record = self.record.read_record()?;
        Ok(AppIdentity {
            app_instance: record.remove(APP_INSTANCE_KEY_NAME).unwrap_or_default(),
            app_group: record.remove(APP_GROUP_KEY_NAME).unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::InMemoryRecordStore;
    use crate::traits::MockRecordStore;

    fn identity(instance: &str, group: &str) -> AppIdentity {
        AppIdentity {
            app_instance: instance.to_string(),
            app_group: group.to_string(),
        }
    }

    #[test]
    fn test_record_then_read() {
        let store = AppIdentityStore::new(Arc::new(InMemoryRecordStore::new()));

        store.record_application_to_file("i1", "g1", true).unwrap();

        assert_eq!(store.read_app_info_from_file().unwrap(), identity("i1", "g1"));
    }

    #[test]
    fn test_append_last_occurrence_wins() {
        let record = Arc::new(InMemoryRecordStore::new());
        let store = AppIdentityStore::new(record.clone());

        store.record_application_to_file("i1", "g1", true).unwrap();
        store.record_application_to_file("i2", "g2", false).unwrap();

        assert_eq!(record.contents().lines().count(), 4);
        assert_eq!(store.read_app_info_from_file().unwrap(), identity("i2", "g2"));
    }

    #[test]
    fn test_truncate_replaces_previous_pair() {
        let record = Arc::new(InMemoryRecordStore::new());
        let store = AppIdentityStore::new(record.clone());

        store.record_application_to_file("i1", "g1", true).unwrap();
        store.record_application_to_file("i2", "g2", true).unwrap();

        assert_eq!(record.contents().lines().count(), 2);
        assert_eq!(store.read_app_info_from_file().unwrap(), identity("i2", "g2"));
    }

    #[test]
    fn test_missing_keys_default_to_empty() {
        let store = AppIdentityStore::new(Arc::new(InMemoryRecordStore::with_contents(
            "appGroup=g1\nother=ignored\nnoise\n",
        )));

        assert_eq!(store.read_app_info_from_file().unwrap(), identity("", "g1"));
    }

    #[test]
    fn test_empty_file_is_error() {
        let store = AppIdentityStore::new(Arc::new(InMemoryRecordStore::with_contents(" \n ")));

        assert!(matches!(
            store.read_app_info_from_file(),
            Err(RecordError::EmptyContent { .. })
        ));
    }

    #[test]
    fn test_truncate_flag_is_passed_through() {
        let mut record = MockRecordStore::new();
        record
            .expect_write_record()
            .withf(|data, truncate| {
                !*truncate
                    && data.get("appInstance").map(String::as_str) == Some("i1")
                    && data.get("appGroup").map(String::as_str) == Some("g1")
            })
            .times(1)
            .returning(|_, _| Ok(()));
        let store = AppIdentityStore::new(Arc::new(record));

        store.record_application_to_file("i1", "g1", false).unwrap();
    }

    #[test]
    fn test_serializes_with_record_key_names() {
        let json = serde_json::to_value(identity("i1", "g1")).unwrap();

        assert_eq!(json, serde_json::json!({"appInstance": "i1", "appGroup": "g1"}));
    }
}
