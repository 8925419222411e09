//! Customer login, registration, and logout.
//!
//! The role gate runs in both directions: back-office accounts (admin,
//! employee) are refused here with an access-denied message and no token
//! is stored, mirroring the admin area refusing customer accounts.

use counterline_client::models::{RegisterRequest, UserProfile};
use counterline_client::{ApiClient, SessionKind};
use counterline_core::RoleId;
use secrecy::SecretString;
use tracing::{instrument, warn};

use crate::error::{StorefrontError, require_credentials};

/// Customer sign-in/sign-up flow.
#[derive(Debug, Clone)]
pub struct CustomerAuth {
    client: ApiClient,
}

impl CustomerAuth {
    #[must_use]
    pub const fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Validate credentials, sign in, and store the token under the
    /// customer slot.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::Validation`] before any request if the
    /// credentials fail local checks, [`StorefrontError::AccessDenied`]
    /// (with no token stored) if the account is a back-office account,
    /// and the API error otherwise.
    #[instrument(skip(self, password), fields(username))]
    pub async fn login(
        &self,
        username: &str,
        password: &SecretString,
    ) -> Result<RoleId, StorefrontError> {
        let request = require_credentials(username, password)?;
        let response = self.client.login(&request).await?;

        if response.role_id.has_back_office_access() {
            warn!(role_id = %response.role_id, "back-office account refused at customer login");
            return Err(StorefrontError::AccessDenied(
                "Admin and Employee accounts cannot login to customer area. \
                 Please use admin login."
                    .to_string(),
            ));
        }

        self.client
            .session()
            .set_token(SessionKind::Customer, SecretString::from(response.access_token));
        Ok(response.role_id)
    }

    /// Validate the registration form and create the account.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::Validation`] before any request if the
    /// form fails local checks, and the API error otherwise.
    #[instrument(skip(self, form), fields(username = %form.username))]
    pub async fn register(&self, form: &RegistrationForm) -> Result<UserProfile, StorefrontError> {
        let request = form.validate()?;
        Ok(self.client.register(&request).await?)
    }

    /// End the customer session; returns the login route to send the
    /// user to.
    pub fn logout(&self) -> String {
        self.client.session().clear_token(SessionKind::Customer);
        self.client.session().login_route(SessionKind::Customer)
    }
}

/// Registration form state. Phone and address are optional; everything
/// else must be at least six characters.
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    pub username: String,
    pub password: String,
    pub confirm_password: String,
    pub name: String,
    pub phone: String,
    pub address: String,
}

impl RegistrationForm {
    /// Run the client-side checks and produce the request body.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::Validation`] naming the first failing
    /// field.
    pub fn validate(&self) -> Result<RegisterRequest, StorefrontError> {
        let required = [
            ("Username", &self.username),
            ("Password", &self.password),
            ("Confirm Password", &self.confirm_password),
            ("Full Name", &self.name),
        ];
        for (label, value) in required {
            if value.len() < 6 {
                return Err(StorefrontError::Validation(format!(
                    "{label} must be at least 6 characters."
                )));
            }
        }

        if self.password != self.confirm_password {
            return Err(StorefrontError::Validation(
                "Passwords do not match".to_string(),
            ));
        }
        if self.password.len() > 50 {
            return Err(StorefrontError::Validation(
                "Password is too long. Maximum 50 characters allowed.".to_string(),
            ));
        }
        if !self.phone.is_empty() && self.phone.len() < 9 {
            return Err(StorefrontError::Validation(
                "Phone number must be at least 9 digits.".to_string(),
            ));
        }

        Ok(RegisterRequest {
            username: self.username.clone(),
            password: self.password.clone(),
            name: self.name.clone(),
            phone: (!self.phone.is_empty()).then(|| self.phone.clone()),
            address: (!self.address.is_empty()).then(|| self.address.clone()),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn valid_form() -> RegistrationForm {
        RegistrationForm {
            username: "janedoe1".to_string(),
            password: "hunter22".to_string(),
            confirm_password: "hunter22".to_string(),
            name: "Jane Doe".to_string(),
            phone: String::new(),
            address: String::new(),
        }
    }

    #[test]
    fn valid_form_builds_request() {
        let request = valid_form().validate().unwrap();
        assert_eq!(request.username, "janedoe1");
        assert!(request.phone.is_none());
        assert!(request.address.is_none());
    }

    #[test]
    fn short_required_field_names_the_label() {
        let form = RegistrationForm {
            name: "Jane".to_string(),
            ..valid_form()
        };
        let err = form.validate().unwrap_err();
        assert!(matches!(err, StorefrontError::Validation(msg)
            if msg == "Full Name must be at least 6 characters."));
    }

    #[test]
    fn password_mismatch_is_rejected() {
        let form = RegistrationForm {
            confirm_password: "hunter23".to_string(),
            ..valid_form()
        };
        let err = form.validate().unwrap_err();
        assert!(matches!(err, StorefrontError::Validation(msg)
            if msg == "Passwords do not match"));
    }

    #[test]
    fn overlong_password_is_rejected() {
        let long = "x".repeat(51);
        let form = RegistrationForm {
            password: long.clone(),
            confirm_password: long,
            ..valid_form()
        };
        assert!(form.validate().is_err());
    }

    #[test]
    fn short_phone_is_rejected_but_empty_is_fine() {
        let form = RegistrationForm {
            phone: "12345".to_string(),
            ..valid_form()
        };
        assert!(form.validate().is_err());

        assert!(valid_form().validate().is_ok());
    }

    #[test]
    fn provided_phone_and_address_are_kept() {
        let form = RegistrationForm {
            phone: "0901234567".to_string(),
            address: "12 Elm St".to_string(),
            ..valid_form()
        };
        let request = form.validate().unwrap();
        assert_eq!(request.phone.as_deref(), Some("0901234567"));
        assert_eq!(request.address.as_deref(), Some("12 Elm St"));
    }
}
