use tracing::{info, instrument, warn};

use crate::features::auth::types::*;
use crate::services::client::{AuthApi, LoginRequest, RegisterRequest, SessionHolder};

/// Performs the redirect after a successful sign in
pub trait Navigator {
    fn navigate(&self, path: &str);
}

impl<F: Fn(&str)> Navigator for F {
    fn navigate(&self, path: &str) {
        self(path)
    }
}

/// Where to go after signing in: the page the user originally asked for, or the root.
///
/// Only same-site paths are accepted. Anything else (a full URL, a
/// protocol-relative `//host` or `/\host`) falls back to the root.
pub fn redirect_target(requested: Option<&str>) -> String {
    match requested.map(str::trim) {
        Some(path) if is_local_path(path) => path.to_string(),
        _ => "/".to_string(),
    }
}

fn is_local_path(path: &str) -> bool {
    path.starts_with('/') && !path.starts_with("//") && !path.starts_with("/\\")
}

pub fn login_request(credentials: &Credentials) -> LoginRequest {
    LoginRequest {
        email: credentials.email.trim().to_string(),
        password: credentials.password.clone(),
    }
}

pub fn register_request(credentials: &Credentials) -> RegisterRequest {
    RegisterRequest {
        email: credentials.email.trim().to_string(),
        password: credentials.password.clone(),
        first_name: credentials.first_name.clone(),
        last_name: credentials.last_name.clone(),
        org: credentials.organisation.clone(),
    }
}

/// Runs the mode's remote call and hands the result on.
///
/// On success the session holder gets the token and user exactly once, then
/// the navigator is sent to `redirect_to`. On failure neither is touched and
/// the returned string is ready to show on the panel. Credentials are expected
/// to have passed `validate` already.
#[instrument(skip(credentials, api, session, navigator), err)]
pub async fn submit(
    mode: AuthMode,
    credentials: &Credentials,
    api: &dyn AuthApi,
    session: &dyn SessionHolder,
    navigator: &dyn Navigator,
    redirect_to: &str,
) -> Result<(), String> {
    let result = match mode {
        AuthMode::Register => api.register(register_request(credentials)).await,
        AuthMode::Login => api.login(login_request(credentials)).await,
    };

    match result {
        Ok(response) => {
            info!("Authenticated, redirecting to {}", redirect_to);
            session.login(response.token, response.user);
            navigator.navigate(redirect_to);
            Ok(())
        }
        Err(e) => {
            warn!("Authentication failed: {}", e);
            Err(e.display_message())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::client::{AuthResponse, ClientError, ClientResult, User};
    use async_trait::async_trait;
    use serde_json::json;
    use std::cell::RefCell;

    /// Records every call and answers with a canned result
    struct MockApi {
        result: ClientResult<AuthResponse>,
        logins: RefCell<Vec<LoginRequest>>,
        registrations: RefCell<Vec<RegisterRequest>>,
    }

    impl MockApi {
        fn answering(result: ClientResult<AuthResponse>) -> Self {
            Self {
                result,
                logins: RefCell::new(Vec::new()),
                registrations: RefCell::new(Vec::new()),
            }
        }
    }

    #[async_trait(?Send)]
    impl AuthApi for MockApi {
        async fn login(&self, request: LoginRequest) -> ClientResult<AuthResponse> {
            self.logins.borrow_mut().push(request);
            self.result.clone()
        }

        async fn register(&self, request: RegisterRequest) -> ClientResult<AuthResponse> {
            self.registrations.borrow_mut().push(request);
            self.result.clone()
        }
    }

    #[derive(Default)]
    struct RecordingSession {
        logins: RefCell<Vec<(String, User)>>,
    }

    impl SessionHolder for RecordingSession {
        fn login(&self, token: String, user: User) {
            self.logins.borrow_mut().push((token, user));
        }
    }

    fn ada() -> User {
        User {
            email: "ada@engines.org".to_string(),
            first_name: Some("Ada".to_string()),
            ..User::default()
        }
    }

    fn accepted() -> ClientResult<AuthResponse> {
        Ok(AuthResponse {
            token: "token-123".to_string(),
            user: ada(),
        })
    }

    fn login_credentials() -> Credentials {
        Credentials {
            email: "  ada@engines.org ".to_string(),
            password: " secret ".to_string(),
            ..Credentials::default()
        }
    }

    #[tokio::test]
    async fn test_login_success_hands_over_session_and_redirects() {
        let api = MockApi::answering(accepted());
        let session = RecordingSession::default();
        let visited = RefCell::new(Vec::<String>::new());
        let navigator = |path: &str| visited.borrow_mut().push(path.to_string());

        let result = submit(
            AuthMode::Login,
            &login_credentials(),
            &api,
            &session,
            &navigator,
            "/projects/7",
        )
        .await;

        assert_eq!(result, Ok(()));
        assert_eq!(session.logins.borrow().len(), 1);
        assert_eq!(session.logins.borrow()[0], ("token-123".to_string(), ada()));
        assert_eq!(*visited.borrow(), vec!["/projects/7".to_string()]);

        // Email trimmed, password sent as typed
        let logins = api.logins.borrow();
        assert_eq!(logins.len(), 1);
        assert_eq!(logins[0].email, "ada@engines.org");
        assert_eq!(logins[0].password, " secret ");
        assert!(api.registrations.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_register_uses_register_call() {
        let api = MockApi::answering(accepted());
        let session = RecordingSession::default();
        let visited = RefCell::new(Vec::<String>::new());
        let navigator = |path: &str| visited.borrow_mut().push(path.to_string());

        let credentials = Credentials {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@engines.org".to_string(),
            organisation: "Analytical Engines".to_string(),
            password: "difference".to_string(),
            confirm: "difference".to_string(),
        };

        let result = submit(AuthMode::Register, &credentials, &api, &session, &navigator, "/").await;

        assert_eq!(result, Ok(()));
        assert!(api.logins.borrow().is_empty());
        let registrations = api.registrations.borrow();
        assert_eq!(registrations.len(), 1);
        assert_eq!(registrations[0].org, "Analytical Engines");
        assert_eq!(registrations[0].first_name, "Ada");
        assert_eq!(session.logins.borrow().len(), 1);
        assert_eq!(*visited.borrow(), vec!["/".to_string()]);
    }

    #[tokio::test]
    async fn test_failure_reports_api_message_and_touches_nothing() {
        let api = MockApi::answering(Err(ClientError::Rejected {
            status: 401,
            body: Some(json!({"error": {"message": "Invalid email or password"}})),
        }));
        let session = RecordingSession::default();
        let visited = RefCell::new(Vec::<String>::new());
        let navigator = |path: &str| visited.borrow_mut().push(path.to_string());

        let result = submit(AuthMode::Login, &login_credentials(), &api, &session, &navigator, "/").await;

        assert_eq!(result, Err("Invalid email or password".to_string()));
        assert!(session.logins.borrow().is_empty());
        assert!(visited.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_failure_without_envelope_uses_fallbacks() {
        let api = MockApi::answering(Err(ClientError::Network {
            message: String::new(),
        }));
        let session = RecordingSession::default();
        let navigator = |_: &str| {};

        let result = submit(AuthMode::Login, &login_credentials(), &api, &session, &navigator, "/").await;
        assert_eq!(result, Err("Something went wrong.".to_string()));
    }

    #[test]
    fn test_redirect_target_defaults_to_root() {
        assert_eq!(redirect_target(None), "/");
        assert_eq!(redirect_target(Some("")), "/");
        assert_eq!(redirect_target(Some("  ")), "/");
        assert_eq!(redirect_target(Some("/projects")), "/projects");
        assert_eq!(redirect_target(Some("/projects/7?tab=aim")), "/projects/7?tab=aim");
    }

    #[test]
    fn test_redirect_target_stays_on_site() {
        assert_eq!(redirect_target(Some("https://evil.example/phish")), "/");
        assert_eq!(redirect_target(Some("javascript:alert(1)")), "/");
        assert_eq!(redirect_target(Some("//evil.example")), "/");
        assert_eq!(redirect_target(Some("/\\evil.example")), "/");
        assert_eq!(redirect_target(Some("projects")), "/");
    }
}
