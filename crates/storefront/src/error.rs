//! Storefront flow errors.

use counterline_client::ApiError;
use thiserror::Error;

/// Errors surfaced by storefront flows to the hosting UI.
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// A form failed client-side validation; no request was made.
    #[error("{0}")]
    Validation(String),

    /// The signed-in account is not allowed in the customer area.
    #[error("{0}")]
    AccessDenied(String),

    /// The flow needs an authenticated customer session.
    #[error("Please login to continue")]
    NeedsLogin,

    /// The backend rejected a cart mutation for lack of stock.
    #[error("Not enough stock available!")]
    OutOfStock,

    /// Any other API failure, passed through for the view to surface.
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl StorefrontError {
    fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

pub(crate) use validation::require_credentials;

pub(crate) mod validation {
    use counterline_client::models::LoginRequest;
    use secrecy::{ExposeSecret, SecretString};

    use super::StorefrontError;

    /// Trim and validate a username/password pair, producing the login
    /// body. Mirrors the backend's account rules so obviously bad input
    /// never leaves the client.
    pub fn require_credentials(
        username: &str,
        password: &SecretString,
    ) -> Result<LoginRequest, StorefrontError> {
        let username = username.trim();
        let password = password.expose_secret().trim();

        if username.is_empty() {
            return Err(StorefrontError::validation("Username is required."));
        }
        if username.len() < 6 {
            return Err(StorefrontError::validation(
                "Username must be at least 6 characters.",
            ));
        }
        if username.len() > 50 {
            return Err(StorefrontError::validation(
                "Username must not exceed 50 characters.",
            ));
        }
        if password.is_empty() {
            return Err(StorefrontError::validation("Password is required."));
        }
        if password.len() < 6 {
            return Err(StorefrontError::validation(
                "Password must be at least 6 characters.",
            ));
        }

        Ok(LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        })
    }
}
