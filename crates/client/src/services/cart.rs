//! Cart endpoints for the signed-in customer.

use counterline_core::CartItemId;
use tracing::instrument;

use crate::error::ApiError;
use crate::http::ApiClient;
use crate::models::{CartAdd, CartItem, CartQuantityUpdate};

impl ApiClient {
    /// The signed-in customer's cart lines.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the session is expired.
    #[instrument(skip(self), fields(request_id))]
    pub async fn cart(&self) -> Result<Vec<CartItem>, ApiError> {
        self.get("/cart", "cart").await
    }

    /// Add a variation to the cart, merging into an existing line for the
    /// same variation server-side.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the session is expired, or
    /// there is not enough stock.
    #[instrument(skip(self), fields(variation_id = %request.variation_id, quantity = request.quantity, request_id))]
    pub async fn add_to_cart(&self, request: &CartAdd) -> Result<CartItem, ApiError> {
        self.post("/cart/", request, "cart item").await
    }

    /// Set a cart line's quantity.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the line is gone, or there
    /// is not enough stock for the new quantity.
    #[instrument(skip(self), fields(cart_item_id = %id, quantity, request_id))]
    pub async fn update_cart_item(
        &self,
        id: CartItemId,
        quantity: i32,
    ) -> Result<CartItem, ApiError> {
        self.put(
            &format!("/cart/{id}"),
            &CartQuantityUpdate { quantity },
            "cart item",
        )
        .await
    }

    /// Remove a cart line.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the line is gone.
    #[instrument(skip(self), fields(cart_item_id = %id, request_id))]
    pub async fn remove_cart_item(&self, id: CartItemId) -> Result<(), ApiError> {
        self.delete(&format!("/cart/{id}")).await
    }

    /// Empty the cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the session is expired.
    #[instrument(skip(self), fields(request_id))]
    pub async fn clear_cart(&self) -> Result<(), ApiError> {
        self.delete("/cart/clear").await
    }
}
