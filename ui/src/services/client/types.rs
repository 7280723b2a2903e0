use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body of the sign-in call
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body of the registration call
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub org: String,
}

/// Account as returned by the API. Fields the UI does not know about are kept
/// in `extra` so the session holder stores the user unchanged.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub org: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl User {
    /// First and last name when known, otherwise the email address
    pub fn display_name(&self) -> String {
        let name = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        if name.is_empty() {
            self.email.clone()
        } else {
            name
        }
    }
}

/// Successful response of both auth calls
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_register_request_uses_api_keys() {
        let request = RegisterRequest {
            email: "ada@engines.org".to_string(),
            password: "difference".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            org: "Analytical Engines".to_string(),
        };

        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["firstName"], "Ada");
        assert_eq!(body["lastName"], "Lovelace");
        assert_eq!(body["org"], "Analytical Engines");
        assert!(body.get("first_name").is_none());
    }

    #[test]
    fn test_auth_response_keeps_unknown_user_fields() {
        let response: AuthResponse = serde_json::from_value(json!({
            "token": "abc.def.ghi",
            "user": {
                "id": 42,
                "email": "ada@engines.org",
                "firstName": "Ada",
                "role": "admin"
            }
        }))
        .unwrap();

        assert_eq!(response.token, "abc.def.ghi");
        assert_eq!(response.user.id, Some(json!(42)));
        assert_eq!(response.user.first_name.as_deref(), Some("Ada"));
        assert_eq!(response.user.last_name, None);
        assert_eq!(response.user.extra.get("role"), Some(&json!("admin")));

        let round = serde_json::to_value(&response.user).unwrap();
        assert_eq!(round["role"], "admin");
    }

    #[test]
    fn test_display_name() {
        let mut user = User {
            email: "ada@engines.org".to_string(),
            ..User::default()
        };
        assert_eq!(user.display_name(), "ada@engines.org");

        user.first_name = Some("Ada".to_string());
        assert_eq!(user.display_name(), "Ada");

        user.last_name = Some("Lovelace".to_string());
        assert_eq!(user.display_name(), "Ada Lovelace");
    }
}
