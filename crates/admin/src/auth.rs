//! Back-office sign-in with the role gate.
//!
//! Only admin and employee accounts may enter; a customer account is
//! refused after a successful password check and its token is never
//! stored. On success the token lands in the admin session slot and the
//! role is recorded for permission checks in the panel.

use counterline_client::models::LoginRequest;
use counterline_client::{ApiClient, SessionKind};
use counterline_core::RoleId;
use secrecy::{ExposeSecret, SecretString};
use tracing::{info, instrument, warn};

use crate::error::AdminError;

/// Admin-panel sign-in/sign-out flow.
#[derive(Debug, Clone)]
pub struct BackOfficeAuth {
    client: ApiClient,
}

impl BackOfficeAuth {
    #[must_use]
    pub const fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Validate credentials, sign in, and gate on the account's role.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::Validation`] before any request if the
    /// credentials fail local checks, [`AdminError::AccessDenied`] (with
    /// no token stored) for accounts without back-office access, and the
    /// API error otherwise.
    #[instrument(skip(self, password), fields(username))]
    pub async fn login(
        &self,
        username: &str,
        password: &SecretString,
    ) -> Result<RoleId, AdminError> {
        let request = require_credentials(username, password)?;
        let response = self.client.login(&request).await?;

        if !response.role_id.has_back_office_access() {
            warn!(role_id = %response.role_id, "customer account refused at admin login");
            return Err(AdminError::AccessDenied(
                "Access denied. Only Admin and Employee accounts can access the admin panel."
                    .to_string(),
            ));
        }

        let session = self.client.session();
        session.set_token(SessionKind::Admin, SecretString::from(response.access_token));
        session.set_role(response.role_id);
        info!(role_id = %response.role_id, "back-office session opened");
        Ok(response.role_id)
    }

    /// The signed-in role, when one is recorded.
    #[must_use]
    pub fn role(&self) -> Option<RoleId> {
        self.client.session().role()
    }

    /// End the admin session; returns the login route to send the user
    /// to.
    pub fn logout(&self) -> String {
        let session = self.client.session();
        session.clear_token(SessionKind::Admin);
        session.clear_role();
        session.login_route(SessionKind::Admin)
    }
}

/// Trim and validate a username/password pair, producing the login body.
fn require_credentials(
    username: &str,
    password: &SecretString,
) -> Result<LoginRequest, AdminError> {
    let username = username.trim();
    let password = password.expose_secret().trim();

    if username.is_empty() {
        return Err(AdminError::validation("Username is required."));
    }
    if username.len() < 6 {
        return Err(AdminError::validation(
            "Username must be at least 6 characters.",
        ));
    }
    if username.len() > 50 {
        return Err(AdminError::validation(
            "Username must not exceed 50 characters.",
        ));
    }
    if password.is_empty() {
        return Err(AdminError::validation("Password is required."));
    }
    if password.len() < 6 {
        return Err(AdminError::validation(
            "Password must be at least 6 characters.",
        ));
    }

    Ok(LoginRequest {
        username: username.to_string(),
        password: password.to_string(),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::from(s.to_string())
    }

    #[test]
    fn credentials_are_trimmed_and_validated() {
        let request = require_credentials("  manager1  ", &secret("hunter22")).unwrap();
        assert_eq!(request.username, "manager1");
        assert_eq!(request.password, "hunter22");
    }

    #[test]
    fn short_credentials_are_rejected() {
        assert!(require_credentials("adm", &secret("hunter22")).is_err());
        assert!(require_credentials("manager1", &secret("abc")).is_err());
    }

    #[test]
    fn empty_username_names_the_field() {
        let err = require_credentials("", &secret("hunter22")).unwrap_err();
        assert!(matches!(err, AdminError::Validation(msg)
            if msg == "Username is required."));
    }
}
