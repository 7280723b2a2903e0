//! Calls to the remote authentication API

mod account;
mod login;

pub use account::register_impl;
pub use login::login_impl;

use serde::Serialize;
use tracing::warn;

use super::auth_client::HttpAuthClient;
use super::errors::{ClientError, ClientResult};
use super::types::AuthResponse;

/// POST a JSON body and decode the `{token, user}` answer.
///
/// Non-success statuses keep the response body (parsed as JSON when possible)
/// so the caller can pull the API's own message out of it.
pub(crate) async fn post_for_session<B: Serialize>(
    client: &HttpAuthClient,
    path: &str,
    body: &B,
) -> ClientResult<AuthResponse> {
    let url = client.config.endpoint(path);

    let response = client
        .http_client
        .post(&url)
        .header("Content-Type", "application/json")
        .json(body)
        .send()
        .await
        .map_err(|e| ClientError::Network {
            message: format!("Failed to call {}: {}", path, e),
        })?;

    let status = response.status();
    if !status.is_success() {
        let text = response.text().await.unwrap_or_default();
        let body = serde_json::from_str(&text).ok();
        warn!("{} rejected with status {}", path, status.as_u16());
        return Err(ClientError::Rejected {
            status: status.as_u16(),
            body,
        });
    }

    let session: AuthResponse = response
        .json()
        .await
        .map_err(|e| ClientError::InvalidResponse {
            message: format!("Failed to parse response: {}", e),
        })?;

    if session.token.is_empty() {
        return Err(ClientError::InvalidResponse {
            message: "Authentication succeeded but no token was provided".to_string(),
        });
    }

    Ok(session)
}
