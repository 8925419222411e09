//! Admin flow errors.

use counterline_client::ApiError;
use thiserror::Error;

/// Errors surfaced by back-office flows to the hosting UI.
#[derive(Debug, Error)]
pub enum AdminError {
    /// A form failed client-side validation; no request was made.
    #[error("{0}")]
    Validation(String),

    /// The signed-in account has no back-office access.
    #[error("{0}")]
    AccessDenied(String),

    /// The backend rejected a stock-consuming operation.
    #[error("Not enough stock available!")]
    OutOfStock,

    /// Any other API failure, passed through for the view to surface.
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl AdminError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}
