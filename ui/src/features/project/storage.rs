use gloo_storage::{LocalStorage, Storage};

use crate::features::project::form_validation::clamp_project;
use crate::features::project::types::ProjectData;
use crate::services::errors::{StorageError, StorageResult};

/// Persists the project record in localStorage so a reload keeps the user's work
#[derive(Clone, Debug, PartialEq)]
pub struct ProjectStore {
    storage_key: String,
    max_chars: usize,
}

impl ProjectStore {
    pub fn new(storage_key: &str, max_chars: usize) -> Self {
        Self {
            storage_key: storage_key.to_string(),
            max_chars,
        }
    }

    pub fn save(&self, data: &ProjectData) -> StorageResult<()> {
        LocalStorage::set(&self.storage_key, data)
            .map_err(|e| StorageError::backend("save project", e))
    }

    /// Ok(None) when nothing has been saved yet. Attributes over the cap,
    /// from an older or hand-edited record, are cut back to it.
    pub fn load(&self) -> StorageResult<Option<ProjectData>> {
        let raw = match LocalStorage::raw().get_item(&self.storage_key) {
            Ok(Some(raw)) => raw,
            Ok(None) | Err(_) => return Ok(None),
        };

        serde_json::from_str(&raw)
            .map(|data| Some(clamp_project(data, self.max_chars)))
            .map_err(|e| StorageError::Corrupt {
                key: self.storage_key.clone(),
                reason: e.to_string(),
            })
    }

    pub fn clear(&self) {
        LocalStorage::delete(&self.storage_key);
    }
}
