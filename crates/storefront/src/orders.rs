//! The signed-in customer's order history.

use counterline_client::ApiClient;
use counterline_client::models::{Order, OrderDetail};
use counterline_core::{OrderId, OrderStatus};
use tracing::instrument;

use crate::error::StorefrontError;

/// Read and act on the customer's own orders.
#[derive(Debug, Clone)]
pub struct OrderHistory {
    client: ApiClient,
}

impl OrderHistory {
    #[must_use]
    pub const fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// All of the customer's orders, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the session is expired.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Order>, StorefrontError> {
        Ok(self.client.my_orders().await?)
    }

    /// One order together with its lines.
    ///
    /// # Errors
    ///
    /// Returns an error if either request fails or the order is not the
    /// customer's.
    #[instrument(skip(self), fields(order_id = %id))]
    pub async fn detail(&self, id: OrderId) -> Result<OrderDetail, StorefrontError> {
        let order = self.client.my_order(id).await?;
        let lines = self.client.my_order_items(id).await?;
        Ok(OrderDetail { order, lines })
    }

    /// Cancel an order that has not been finalized. The current status is
    /// checked first so a completed or already-cancelled order never
    /// produces a cancel request.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the order can no longer be cancelled,
    /// or the API error.
    #[instrument(skip(self), fields(order_id = %id))]
    pub async fn cancel(&self, id: OrderId) -> Result<Order, StorefrontError> {
        let order = self.client.my_order(id).await?;
        if !order.parsed_status().is_some_and(OrderStatus::is_cancellable) {
            return Err(StorefrontError::Validation(
                "This order can no longer be cancelled.".to_owned(),
            ));
        }
        Ok(self.client.cancel_my_order(id).await?)
    }

    /// Confirm an in-flight order arrived, completing it. Orders already
    /// in a final state are rejected locally.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the order is already finalized, or
    /// the API error.
    #[instrument(skip(self), fields(order_id = %id))]
    pub async fn confirm_received(&self, id: OrderId) -> Result<Order, StorefrontError> {
        let order = self.client.my_order(id).await?;
        if order.parsed_status().is_none_or(OrderStatus::is_final) {
            return Err(StorefrontError::Validation(
                "This order cannot be confirmed.".to_owned(),
            ));
        }
        Ok(self.client.confirm_received(id).await?)
    }
}
