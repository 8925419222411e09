//! Admin order endpoints under `/admin/orders`.

use counterline_core::OrderId;
use serde::Serialize;
use tracing::instrument;

use crate::error::ApiError;
use crate::http::ApiClient;
use crate::models::{Order, OrderCreate, OrderDetail, OrderLine, OrderStatistics, OrderUpdate};

/// Query parameters for the admin order listing.
#[derive(Debug, Clone, Default, Serialize)]
pub struct OrderListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl ApiClient {
    /// List orders with an optional status filter.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the session is expired.
    #[instrument(skip(self), fields(request_id))]
    pub async fn orders(&self, params: &OrderListParams) -> Result<Vec<Order>, ApiError> {
        self.get_query("/admin/orders/", params, "order list").await
    }

    /// Aggregate order/revenue counters for the dashboard.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the session is expired.
    #[instrument(skip(self), fields(request_id))]
    pub async fn order_statistics(&self) -> Result<OrderStatistics, ApiError> {
        self.get("/admin/orders/statistics", "order statistics")
            .await
    }

    /// Get an order by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the order is gone.
    #[instrument(skip(self), fields(order_id = %id, request_id))]
    pub async fn order(&self, id: OrderId) -> Result<Order, ApiError> {
        self.get(&format!("/admin/orders/{id}"), "order").await
    }

    /// The lines of an order.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the order is gone.
    #[instrument(skip(self), fields(order_id = %id, request_id))]
    pub async fn order_lines(&self, id: OrderId) -> Result<Vec<OrderLine>, ApiError> {
        self.get(&format!("/admin/orders/{id}/lines"), "order lines")
            .await
    }

    /// An order together with its lines.
    ///
    /// # Errors
    ///
    /// Returns an error if either request fails.
    #[instrument(skip(self), fields(order_id = %id, request_id))]
    pub async fn order_detail(&self, id: OrderId) -> Result<OrderDetail, ApiError> {
        let order = self.order(id).await?;
        let lines = self.order_lines(id).await?;
        Ok(OrderDetail { order, lines })
    }

    /// Create an order with explicit lines (the POS path; the backend
    /// decrements stock per line).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or a line exceeds available
    /// stock.
    #[instrument(skip(self, body), fields(lines = body.order_lines.len(), request_id))]
    pub async fn create_order(&self, body: &OrderCreate) -> Result<Order, ApiError> {
        self.post("/admin/orders/", body, "order").await
    }

    /// Update an order's status, note, or payment date.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the order is finalized.
    #[instrument(skip(self, body), fields(order_id = %id, request_id))]
    pub async fn update_order(&self, id: OrderId, body: &OrderUpdate) -> Result<Order, ApiError> {
        self.put(&format!("/admin/orders/{id}"), body, "order").await
    }

    /// Cancel an order, restoring its stock server-side.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the order is already
    /// cancelled.
    #[instrument(skip(self), fields(order_id = %id, request_id))]
    pub async fn cancel_order(&self, id: OrderId) -> Result<Order, ApiError> {
        self.post_empty(&format!("/admin/orders/{id}/cancel"), "order")
            .await
    }

    /// Delete an order outright.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the order is gone.
    #[instrument(skip(self), fields(order_id = %id, request_id))]
    pub async fn delete_order(&self, id: OrderId) -> Result<(), ApiError> {
        self.delete(&format!("/admin/orders/{id}")).await
    }
}
