//! Profile editing, password change, and password recovery.

use counterline_client::ApiClient;
use counterline_client::models::{
    ApiMessage, ChangePasswordRequest, ProfileUpdate, ResetPasswordRequest, UserProfile,
    VerifyIdentityRequest,
};
use secrecy::{ExposeSecret, SecretString};
use tracing::instrument;

use crate::error::StorefrontError;

/// Fetch and edit the signed-in customer's profile.
#[derive(Debug, Clone)]
pub struct ProfileFlow {
    client: ApiClient,
}

impl ProfileFlow {
    #[must_use]
    pub const fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the session is expired.
    #[instrument(skip(self))]
    pub async fn fetch(&self) -> Result<UserProfile, StorefrontError> {
        Ok(self.client.profile().await?)
    }

    /// Update name, phone, or address. The name, when given, must not be
    /// blank.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a blank name, or the API error.
    #[instrument(skip(self, update))]
    pub async fn update(&self, update: &ProfileUpdate) -> Result<UserProfile, StorefrontError> {
        if update
            .name
            .as_deref()
            .is_some_and(|name| name.trim().is_empty())
        {
            return Err(StorefrontError::Validation(
                "Name cannot be empty.".to_owned(),
            ));
        }
        Ok(self.client.update_profile(update).await?)
    }

    /// Change the password after validating the form locally.
    ///
    /// # Errors
    ///
    /// Returns a validation error before any request if the form fails
    /// local checks, or the API error (a wrong old password surfaces as
    /// an API error with the backend's message).
    #[instrument(skip(self, form))]
    pub async fn change_password(
        &self,
        form: &ChangePasswordForm,
    ) -> Result<ApiMessage, StorefrontError> {
        let request = form.validate()?;
        Ok(self.client.change_password(&request).await?)
    }
}

/// Change-password form state.
#[derive(Debug, Clone)]
pub struct ChangePasswordForm {
    pub old_password: SecretString,
    pub new_password: SecretString,
    pub confirm_password: SecretString,
}

impl ChangePasswordForm {
    /// Run the client-side checks and produce the request body.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::Validation`] naming the first failing
    /// check.
    pub fn validate(&self) -> Result<ChangePasswordRequest, StorefrontError> {
        let old = self.old_password.expose_secret();
        let new = self.new_password.expose_secret();
        let confirm = self.confirm_password.expose_secret();

        if old.is_empty() {
            return Err(StorefrontError::Validation(
                "Current password is required.".to_owned(),
            ));
        }
        if new.len() < 6 {
            return Err(StorefrontError::Validation(
                "New password must be at least 6 characters.".to_owned(),
            ));
        }
        if new.len() > 50 {
            return Err(StorefrontError::Validation(
                "Password is too long. Maximum 50 characters allowed.".to_owned(),
            ));
        }
        if new != confirm {
            return Err(StorefrontError::Validation(
                "Passwords do not match".to_owned(),
            ));
        }

        Ok(ChangePasswordRequest {
            old_password: old.to_owned(),
            new_password: new.to_owned(),
        })
    }
}

/// Two-step password recovery: verify the username/phone pair on file,
/// then set the new password with the same pair.
#[derive(Debug, Clone)]
pub struct PasswordRecovery {
    client: ApiClient,
}

impl PasswordRecovery {
    #[must_use]
    pub const fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Step one: check the username/phone pair before showing the
    /// new-password form.
    ///
    /// # Errors
    ///
    /// Returns a validation error for blank fields, or the API error if
    /// the pair does not match an account.
    #[instrument(skip(self), fields(username))]
    pub async fn verify_identity(
        &self,
        username: &str,
        phone: &str,
    ) -> Result<ApiMessage, StorefrontError> {
        let (username, phone) = Self::require_identity(username, phone)?;
        let request = VerifyIdentityRequest { username, phone };
        Ok(self.client.verify_identity(&request).await?)
    }

    /// Step two: set the new password. The backend re-verifies the pair.
    ///
    /// # Errors
    ///
    /// Returns a validation error before any request if a field fails
    /// local checks, or the API error.
    #[instrument(skip(self, new_password), fields(username))]
    pub async fn reset_password(
        &self,
        username: &str,
        phone: &str,
        new_password: &SecretString,
    ) -> Result<ApiMessage, StorefrontError> {
        let (username, phone) = Self::require_identity(username, phone)?;
        let new_password = new_password.expose_secret();
        if new_password.len() < 6 {
            return Err(StorefrontError::Validation(
                "New password must be at least 6 characters.".to_owned(),
            ));
        }

        let request = ResetPasswordRequest {
            username,
            phone,
            new_password: new_password.to_owned(),
        };
        Ok(self.client.reset_password(&request).await?)
    }

    fn require_identity(username: &str, phone: &str) -> Result<(String, String), StorefrontError> {
        let username = username.trim();
        let phone = phone.trim();
        if username.is_empty() {
            return Err(StorefrontError::Validation(
                "Username is required.".to_owned(),
            ));
        }
        if phone.is_empty() {
            return Err(StorefrontError::Validation(
                "Phone number is required.".to_owned(),
            ));
        }
        Ok((username.to_owned(), phone.to_owned()))
    }
}
