use tracing::{info, instrument};

use crate::services::client::auth::post_for_session;
use crate::services::client::auth_client::HttpAuthClient;
use crate::services::client::errors::ClientResult;
use crate::services::client::types::*;

const REGISTER_PATH: &str = "auth/register";

/// Create an account. The API signs the new account in and answers with a session.
#[instrument(skip(client, request), fields(email = %request.email, org = %request.org), err)]
pub async fn register_impl(
    client: &HttpAuthClient,
    request: RegisterRequest,
) -> ClientResult<AuthResponse> {
    info!("Registering account at {}", client.config.endpoint(REGISTER_PATH));

    let response = post_for_session(client, REGISTER_PATH, &request).await?;

    info!("Account created for {}", response.user.display_name());
    Ok(response)
}
