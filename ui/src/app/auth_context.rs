use dioxus::prelude::*;
use std::rc::Rc;

use crate::services::client::{AuthApi, HttpAuthClient, SessionHolder, SessionManager, StoredSession, User};
use crate::services::config::get_global_config;
use crate::{console_error, console_info, console_warn};

/// Shared auth services, provided once at the root of the app
#[derive(Clone)]
pub struct AuthContext {
    pub api: Rc<dyn AuthApi>,
    pub store: SessionManager,
    /// The signed-in user, if any. Components re-render when it changes.
    pub current: Signal<Option<StoredSession>>,
}

impl AuthContext {
    pub fn is_signed_in(&self) -> bool {
        self.current.read().is_some()
    }

    pub fn user(&self) -> Option<User> {
        self.current.read().as_ref().map(|session| session.user.clone())
    }

    pub fn logout(&self) {
        self.store.clear_session();
        let mut current = self.current;
        current.set(None);
        console_info!("[Auth] Signed out");
    }
}

impl SessionHolder for AuthContext {
    fn login(&self, token: String, user: User) {
        let session = StoredSession { token, user };
        if let Err(e) = self.store.store_session(&session) {
            // Still signed in for this page, just not after a reload
            console_error!("[Auth] Failed to persist session: {}", e);
        }
        let mut current = self.current;
        current.set(Some(session));
    }
}

/// Create the auth context (restoring any stored session) and provide it to
/// every component below the caller
pub fn use_auth_provider() -> AuthContext {
    use_context_provider(|| {
        let config = get_global_config();
        let store = SessionManager::new(&config.storage.session);

        let restored = match store.get_session() {
            Ok(session) => session,
            Err(e) => {
                console_warn!("[Auth] Discarding stored session: {}", e);
                store.clear_session();
                None
            }
        };

        AuthContext {
            api: Rc::new(HttpAuthClient::with_config(config)),
            store,
            current: Signal::new(restored),
        }
    })
}
