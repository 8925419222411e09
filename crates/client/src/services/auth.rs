//! Authentication endpoint.

use tracing::instrument;

use crate::error::ApiError;
use crate::http::ApiClient;
use crate::models::{LoginRequest, LoginResponse};

impl ApiClient {
    /// Exchange credentials for a bearer token.
    ///
    /// A `401` here means bad credentials or an inactive account and is
    /// returned as a plain [`ApiError::Api`]; the login endpoint never
    /// evicts a stored token. Storing the returned token (and applying the
    /// role gate) is the caller's job.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the credentials are
    /// rejected.
    #[instrument(skip(self, request), fields(username = %request.username, request_id))]
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        self.post("/auth/login", request, "login response").await
    }
}
