use tracing::{info, instrument};

use crate::services::client::auth::post_for_session;
use crate::services::client::auth_client::HttpAuthClient;
use crate::services::client::errors::ClientResult;
use crate::services::client::types::*;

const LOGIN_PATH: &str = "auth/login";

/// Sign in with email and password
#[instrument(skip(client, request), fields(email = %request.email), err)]
pub async fn login_impl(client: &HttpAuthClient, request: LoginRequest) -> ClientResult<AuthResponse> {
    info!("Signing in at {}", client.config.endpoint(LOGIN_PATH));

    let response = post_for_session(client, LOGIN_PATH, &request).await?;

    info!("Signed in as {}", response.user.display_name());
    Ok(response)
}
