//! Login, registration, and password-recovery shapes.

use counterline_core::{AccountId, RoleId};
use serde::{Deserialize, Serialize};

/// `POST /auth/login` body.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// `POST /auth/login` response.
///
/// `account_status` stays a raw string; parse through
/// [`counterline_core::AccountStatus`] at decision points.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
    pub role_id: RoleId,
    pub account_status: String,
}

/// `POST /user/register` body.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// Account echo from `POST /auth/register`.
#[derive(Debug, Clone, Deserialize)]
pub struct Account {
    pub pk_account: AccountId,
    pub username: String,
    pub role_id: RoleId,
    pub status: String,
}

/// `POST /user/change-password` body.
#[derive(Debug, Clone, Serialize)]
pub struct ChangePasswordRequest {
    pub old_password: String,
    pub new_password: String,
}

/// `POST /user/verify-identity` body: the recovery challenge is the
/// username plus the phone number on file.
#[derive(Debug, Clone, Serialize)]
pub struct VerifyIdentityRequest {
    pub username: String,
    pub phone: String,
}

/// `POST /user/reset-password` body.
#[derive(Debug, Clone, Serialize)]
pub struct ResetPasswordRequest {
    pub username: String,
    pub phone: String,
    pub new_password: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn login_response_deserializes() {
        let json = r#"{
            "access_token": "eyJhbGciOi",
            "token_type": "bearer",
            "role_id": 18,
            "account_status": "ACTIVE"
        }"#;
        let response: LoginResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.role_id, RoleId::EMPLOYEE);
        assert_eq!(response.account_status, "ACTIVE");
    }

    #[test]
    fn register_request_omits_empty_optionals() {
        let request = RegisterRequest {
            username: "janedoe1".to_string(),
            password: "hunter22".to_string(),
            name: "Jane Doe".to_string(),
            phone: None,
            address: None,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("phone").is_none());
        assert!(json.get("address").is_none());
    }
}
