//! Customer account endpoints under `/user`.

use counterline_core::OrderId;
use tracing::instrument;

use crate::error::ApiError;
use crate::http::ApiClient;
use crate::models::{
    ApiMessage, ChangePasswordRequest, Order, OrderLine, ProfileUpdate, RegisterRequest,
    ResetPasswordRequest, UserOrderCreate, UserProfile, VerifyIdentityRequest,
};

impl ApiClient {
    /// Register a new customer account.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the username is taken, or
    /// the body fails server-side validation.
    #[instrument(skip(self, request), fields(username = %request.username, request_id))]
    pub async fn register(&self, request: &RegisterRequest) -> Result<UserProfile, ApiError> {
        self.post("/user/register", request, "register response")
            .await
    }

    /// The signed-in customer's profile.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the session is expired.
    #[instrument(skip(self), fields(request_id))]
    pub async fn profile(&self) -> Result<UserProfile, ApiError> {
        self.get("/user/profile", "profile response").await
    }

    /// Update the signed-in customer's profile.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the session is expired.
    #[instrument(skip(self, update), fields(request_id))]
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<UserProfile, ApiError> {
        self.put("/user/profile", update, "profile response").await
    }

    /// The signed-in customer's order history, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the session is expired.
    #[instrument(skip(self), fields(request_id))]
    pub async fn my_orders(&self) -> Result<Vec<Order>, ApiError> {
        self.get("/user/orders", "order list").await
    }

    /// One of the signed-in customer's orders.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the order is not theirs.
    #[instrument(skip(self), fields(order_id = %id, request_id))]
    pub async fn my_order(&self, id: OrderId) -> Result<Order, ApiError> {
        self.get(&format!("/user/orders/{id}"), "order").await
    }

    /// The lines of one of the signed-in customer's orders.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the order is not theirs.
    #[instrument(skip(self), fields(order_id = %id, request_id))]
    pub async fn my_order_items(&self, id: OrderId) -> Result<Vec<OrderLine>, ApiError> {
        self.get(&format!("/user/orders/{id}/items"), "order lines")
            .await
    }

    /// Place an order from the current cart contents. The backend builds
    /// the lines server-side and clears the cart on success.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the cart is empty, or stock
    /// ran out since the cart was filled.
    #[instrument(skip(self, request), fields(request_id))]
    pub async fn place_order(&self, request: &UserOrderCreate) -> Result<Order, ApiError> {
        self.post("/user/orders", request, "order").await
    }

    /// Cancel one of the signed-in customer's orders.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the order is already
    /// finalized.
    #[instrument(skip(self), fields(order_id = %id, request_id))]
    pub async fn cancel_my_order(&self, id: OrderId) -> Result<Order, ApiError> {
        self.post_empty(&format!("/user/orders/{id}/cancel"), "order")
            .await
    }

    /// Confirm an order arrived, moving it to its final completed state.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the order is not in a
    /// confirmable state.
    #[instrument(skip(self), fields(order_id = %id, request_id))]
    pub async fn confirm_received(&self, id: OrderId) -> Result<Order, ApiError> {
        self.post_empty(&format!("/user/orders/{id}/confirm-received"), "order")
            .await
    }

    /// Change the signed-in customer's password.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the old password is wrong.
    #[instrument(skip(self, request), fields(request_id))]
    pub async fn change_password(
        &self,
        request: &ChangePasswordRequest,
    ) -> Result<ApiMessage, ApiError> {
        self.post("/user/change-password", request, "message").await
    }

    /// Verify a username/phone pair before a password reset.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the pair does not match
    /// any account.
    #[instrument(skip(self, request), fields(username = %request.username, request_id))]
    pub async fn verify_identity(
        &self,
        request: &VerifyIdentityRequest,
    ) -> Result<ApiMessage, ApiError> {
        self.post("/user/verify-identity", request, "message").await
    }

    /// Reset a password after a successful identity check.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the identity pair no
    /// longer verifies.
    #[instrument(skip(self, request), fields(username = %request.username, request_id))]
    pub async fn reset_password(
        &self,
        request: &ResetPasswordRequest,
    ) -> Result<ApiMessage, ApiError> {
        self.post("/user/reset-password", request, "message").await
    }
}
