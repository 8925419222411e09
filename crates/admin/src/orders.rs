//! The admin order workbench.
//!
//! Status moves only forward: pending to processing to completed. The
//! next step is computed from the parsed current status and anything
//! else is refused locally, matching the backend's own transition rules.

use counterline_client::ApiClient;
use counterline_client::models::{Order, OrderDetail, OrderStatistics, OrderUpdate};
use counterline_core::{OrderId, OrderStatus};
use tracing::{info, instrument};

use crate::error::AdminError;
use crate::listing::{OrderFilter, Pagination};

/// Order listing, detail, and lifecycle actions for the panel.
#[derive(Debug, Clone)]
pub struct OrderWorkbench {
    client: ApiClient,
}

impl OrderWorkbench {
    #[must_use]
    pub const fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// One page of orders, optionally filtered by status.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the session is expired.
    #[instrument(skip(self, filter))]
    pub async fn list(
        &self,
        filter: &OrderFilter,
        page: Pagination,
    ) -> Result<Vec<Order>, AdminError> {
        Ok(self.client.orders(&filter.params(page)).await?)
    }

    /// Aggregate counters for the dashboard.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the session is expired.
    #[instrument(skip(self))]
    pub async fn statistics(&self) -> Result<OrderStatistics, AdminError> {
        Ok(self.client.order_statistics().await?)
    }

    /// An order together with its lines.
    ///
    /// # Errors
    ///
    /// Returns an error if either request fails or the order is gone.
    #[instrument(skip(self), fields(order_id = %id))]
    pub async fn detail(&self, id: OrderId) -> Result<OrderDetail, AdminError> {
        Ok(self.client.order_detail(id).await?)
    }

    /// Move an order one step forward in its lifecycle.
    ///
    /// # Errors
    ///
    /// Returns a validation error when the order is finalized or its
    /// status is unrecognized, or the API error.
    #[instrument(skip(self), fields(order_id = %order.id))]
    pub async fn advance(&self, order: &Order) -> Result<Order, AdminError> {
        let Some(next) = order.parsed_status().and_then(next_status) else {
            return Err(AdminError::Validation(format!(
                "Order status '{}' cannot be advanced.",
                order.status
            )));
        };

        let update = OrderUpdate {
            status: Some(next.as_wire().to_owned()),
            ..OrderUpdate::default()
        };
        let updated = self.client.update_order(order.id, &update).await?;
        info!(order_id = %order.id, status = %next, "order advanced");
        Ok(updated)
    }

    /// Cancel an order that is not yet finalized.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a finalized order, or the API
    /// error.
    #[instrument(skip(self), fields(order_id = %order.id))]
    pub async fn cancel(&self, order: &Order) -> Result<Order, AdminError> {
        if !order
            .parsed_status()
            .is_some_and(OrderStatus::is_cancellable)
        {
            return Err(AdminError::Validation(
                "This order can no longer be cancelled.".to_owned(),
            ));
        }
        Ok(self.client.cancel_order(order.id).await?)
    }

    /// Delete an order outright. Meant for abandoned drafts; the listing
    /// should confirm with the operator first.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the order is gone.
    #[instrument(skip(self), fields(order_id = %id))]
    pub async fn delete(&self, id: OrderId) -> Result<(), AdminError> {
        self.client.delete_order(id).await?;
        Ok(())
    }
}

/// The one legal forward transition from a status, if any.
const fn next_status(status: OrderStatus) -> Option<OrderStatus> {
    match status {
        OrderStatus::Pending => Some(OrderStatus::Processing),
        OrderStatus::Processing => Some(OrderStatus::Completed),
        OrderStatus::Completed | OrderStatus::Cancelled => None,
    }
}
