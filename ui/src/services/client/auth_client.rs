use async_trait::async_trait;
use reqwest::Client;

use super::errors::ClientResult;
use super::types::*;
use crate::services::config::{get_global_config, AppConfig};

/// The remote authentication API
#[async_trait(?Send)]
pub trait AuthApi {
    /// Sign in with an existing account
    async fn login(&self, request: LoginRequest) -> ClientResult<AuthResponse>;

    /// Create an account and sign in to it
    async fn register(&self, request: RegisterRequest) -> ClientResult<AuthResponse>;
}

/// `AuthApi` over HTTP with JSON bodies
#[derive(Clone)]
pub struct HttpAuthClient {
    pub(crate) http_client: Client,
    pub(crate) config: AppConfig,
}

impl HttpAuthClient {
    pub fn new() -> Self {
        Self::with_config(get_global_config())
    }

    pub fn with_config(config: AppConfig) -> Self {
        Self {
            http_client: Client::new(),
            config,
        }
    }
}

impl Default for HttpAuthClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl AuthApi for HttpAuthClient {
    async fn login(&self, request: LoginRequest) -> ClientResult<AuthResponse> {
        crate::services::client::auth::login_impl(self, request).await
    }

    async fn register(&self, request: RegisterRequest) -> ClientResult<AuthResponse> {
        crate::services::client::auth::register_impl(self, request).await
    }
}
