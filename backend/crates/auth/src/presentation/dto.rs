//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entity::user::User;

// ============================================================================
// Register
// ============================================================================

/// Register request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    /// Optional display name; defaults to the email local part
    #[serde(default)]
    pub user_name: Option<String>,
}

// ============================================================================
// Login
// ============================================================================

/// Login request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

// ============================================================================
// Responses
// ============================================================================

/// Public view of a user - credential material is structurally absent
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserView {
    pub id: Uuid,
    pub email: String,
    pub user_name: String,
}

impl From<&User> for UserView {
    fn from(user: &User) -> Self {
        Self {
            id: *user.user_id.as_uuid(),
            email: user.email.as_str().to_string(),
            user_name: user.user_name.as_str().to_string(),
        }
    }
}

/// Register/login response: the token plus a sanitized user view
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    pub user: UserView,
}

/// "Who am I" response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeResponse {
    pub user: UserView,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::{email::Email, user_name::UserName};

    #[test]
    fn test_user_view_is_camel_case_and_sanitized() {
        let user = User::new(
            Email::new("a@example.com").unwrap(),
            UserName::new("a").unwrap(),
        );
        let value = serde_json::to_value(UserView::from(&user)).unwrap();

        assert!(value.get("userName").is_some());
        assert!(value.get("email").is_some());
        // No credential-shaped fields exist on the view
        assert!(value.get("password").is_none());
        assert!(value.get("passwordHash").is_none());
    }
}
