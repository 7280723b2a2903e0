use gloo_storage::{LocalStorage, Storage};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use super::types::User;
use crate::services::errors::{StorageError, StorageResult};

/// Receives the token and user after a successful sign in or registration.
/// Everything after that (storage, expiry, logout) is the holder's business.
pub trait SessionHolder {
    fn login(&self, token: String, user: User);
}

/// What gets persisted for a signed-in user
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StoredSession {
    pub token: String,
    pub user: User,
}

/// localStorage-backed session storage
#[derive(Clone, Debug, PartialEq)]
pub struct SessionManager {
    storage_key: String,
}

impl SessionManager {
    pub fn new(storage_key: &str) -> Self {
        Self {
            storage_key: storage_key.to_string(),
        }
    }

    pub fn store_session(&self, session: &StoredSession) -> StorageResult<()> {
        LocalStorage::set(&self.storage_key, session)
            .map_err(|e| StorageError::backend("store session", e))?;

        info!("Session stored for {}", session.user.display_name());
        Ok(())
    }

    /// Ok(None) when nobody is signed in
    pub fn get_session(&self) -> StorageResult<Option<StoredSession>> {
        let raw = match LocalStorage::raw().get_item(&self.storage_key) {
            Ok(Some(raw)) => raw,
            Ok(None) | Err(_) => return Ok(None),
        };

        let session: StoredSession =
            serde_json::from_str(&raw).map_err(|e| StorageError::Corrupt {
                key: self.storage_key.clone(),
                reason: e.to_string(),
            })?;

        if session.token.is_empty() {
            warn!("Stored session has no token, discarding");
            self.clear_session();
            return Ok(None);
        }

        Ok(Some(session))
    }

    pub fn clear_session(&self) {
        LocalStorage::delete(&self.storage_key);
        info!("Session cleared");
    }
}

impl SessionHolder for SessionManager {
    fn login(&self, token: String, user: User) {
        if let Err(e) = self.store_session(&StoredSession { token, user }) {
            error!("Failed to store session: {}", e);
        }
    }
}
