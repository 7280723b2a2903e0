// Client-side access to the remote authentication API
//
// - auth_client: the `AuthApi` seam and its HTTP implementation
// - auth: sign-in and registration calls
// - session: the session holder that keeps the token and user afterwards

pub mod auth;
pub mod auth_client;
pub mod errors;
pub mod session;
pub mod types;

// Re-export core types for easy access
pub use types::{AuthResponse, LoginRequest, RegisterRequest, User};

pub use errors::{ClientError, ClientResult, GENERIC_FAILURE};

pub use auth_client::{AuthApi, HttpAuthClient};
pub use session::{SessionHolder, SessionManager, StoredSession};
