use serde_json::Value;
use thiserror::Error;

/// Shown when a failure carries no usable text at all
pub const GENERIC_FAILURE: &str = "Something went wrong.";

/// Client-side auth operation errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClientError {
    /// The request never produced a response
    #[error("{message}")]
    Network { message: String },

    /// The API answered with a non-success status. `body` is the parsed JSON
    /// body when there was one.
    #[error("Request failed with status code {status}")]
    Rejected { status: u16, body: Option<Value> },

    /// A success status with a body we could not use
    #[error("Invalid response format: {message}")]
    InvalidResponse { message: String },
}

impl ClientError {
    /// Message from the API's `{"error": {"message": "..."}}` envelope, if the
    /// body has exactly that shape.
    pub fn envelope_message(&self) -> Option<&str> {
        match self {
            ClientError::Rejected {
                body: Some(body), ..
            } => body
                .get("error")?
                .as_object()?
                .get("message")?
                .as_str(),
            _ => None,
        }
    }

    /// Best-effort text for the login panel: the API's own message, then the
    /// error's description, then a fixed fallback.
    pub fn display_message(&self) -> String {
        if let Some(message) = self.envelope_message() {
            return message.to_string();
        }

        let description = self.to_string();
        if description.trim().is_empty() {
            GENERIC_FAILURE.to_string()
        } else {
            description
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::InvalidResponse {
            message: err.to_string(),
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
