//! The cart board: local mirror of the server cart with optimistic
//! quantity updates.
//!
//! A quantity change applies to the local list first and the PUT goes out
//! after, so the UI never waits on the round trip. If the backend rejects
//! the change the pre-mutation snapshot is restored exactly and the error
//! is surfaced, with stock rejections mapped to their own variant. There
//! is no concurrency guard: two rapid changes to the same line race and
//! the later response wins, which is acceptable for the single-user,
//! single-view usage this models.

use counterline_client::ApiClient;
use counterline_client::models::{CartAdd, CartItem};
use counterline_core::{CartItemId, Money, VariationId};
use tracing::{debug, instrument, warn};

use crate::error::StorefrontError;

/// Where the most recent optimistic mutation ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MutationPhase {
    /// No mutation has run yet.
    #[default]
    Idle,
    /// Local state is ahead of the server; the request is in flight.
    Pending,
    /// The server accepted the optimistic state.
    Committed,
    /// The server rejected it; local state was restored from the
    /// snapshot.
    RolledBack,
}

/// Cart view model for the signed-in customer.
#[derive(Debug, Clone)]
pub struct CartBoard {
    client: ApiClient,
    items: Vec<CartItem>,
    phase: MutationPhase,
}

impl CartBoard {
    #[must_use]
    pub const fn new(client: ApiClient) -> Self {
        Self {
            client,
            items: Vec::new(),
            phase: MutationPhase::Idle,
        }
    }

    /// The current local cart lines.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Number of lines in the cart.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Sum of line subtotals, computed in [`Money`].
    #[must_use]
    pub fn total(&self) -> Money {
        self.items.iter().map(CartItem::subtotal).sum()
    }

    /// Outcome of the most recent optimistic mutation.
    #[must_use]
    pub const fn phase(&self) -> MutationPhase {
        self.phase
    }

    /// Replace the local lines with the server's authoritative list.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails; local state is unchanged.
    #[instrument(skip(self))]
    pub async fn refresh(&mut self) -> Result<(), StorefrontError> {
        self.items = self.client.cart().await?;
        Ok(())
    }

    /// Add a variation to the cart. Requires an authenticated customer
    /// session; unauthenticated callers get [`StorefrontError::NeedsLogin`]
    /// without a request being made.
    ///
    /// # Errors
    ///
    /// Returns `NeedsLogin` when unauthenticated (locally or per the
    /// backend), `OutOfStock` on a stock rejection, or the API error.
    #[instrument(skip(self), fields(variation_id = %variation_id, quantity))]
    pub async fn add(
        &mut self,
        variation_id: VariationId,
        quantity: i32,
    ) -> Result<(), StorefrontError> {
        if !self.client.session().is_authenticated() {
            return Err(StorefrontError::NeedsLogin);
        }

        let request = CartAdd {
            variation_id,
            quantity,
        };
        match self.client.add_to_cart(&request).await {
            // The server may have merged into an existing line; re-fetch
            // rather than guess.
            Ok(_) => self.refresh().await,
            Err(e) if e.is_stock_conflict() => Err(StorefrontError::OutOfStock),
            Err(counterline_client::ApiError::SessionExpired { .. }) => {
                Err(StorefrontError::NeedsLogin)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Optimistically set a line's quantity. A target of zero or below
    /// routes to [`Self::remove`] and never issues an update request.
    ///
    /// # Errors
    ///
    /// Returns `OutOfStock` when the backend rejects for stock (local
    /// state restored to the pre-mutation snapshot), or the API error
    /// (likewise restored).
    #[instrument(skip(self), fields(cart_item_id = %id, new_quantity))]
    pub async fn change_quantity(
        &mut self,
        id: CartItemId,
        new_quantity: i32,
    ) -> Result<(), StorefrontError> {
        if new_quantity <= 0 {
            return self.remove(id).await;
        }

        let snapshot = self.items.clone();
        for item in &mut self.items {
            if item.id == id {
                item.quantity = new_quantity;
            }
        }
        self.phase = MutationPhase::Pending;

        match self.client.update_cart_item(id, new_quantity).await {
            Ok(_) => {
                self.phase = MutationPhase::Committed;
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "quantity update rejected, restoring snapshot");
                self.items = snapshot;
                self.phase = MutationPhase::RolledBack;
                if e.is_stock_conflict() {
                    Err(StorefrontError::OutOfStock)
                } else {
                    Err(e.into())
                }
            }
        }
    }

    /// Remove a line, server first, then locally.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails; local state is unchanged.
    #[instrument(skip(self), fields(cart_item_id = %id))]
    pub async fn remove(&mut self, id: CartItemId) -> Result<(), StorefrontError> {
        self.client.remove_cart_item(id).await?;
        self.items.retain(|item| item.id != id);
        debug!(remaining = self.items.len(), "cart line removed");
        Ok(())
    }

    /// Empty the cart, server first, then locally.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails; local state is unchanged.
    #[instrument(skip(self))]
    pub async fn clear(&mut self) -> Result<(), StorefrontError> {
        self.client.clear_cart().await?;
        self.items.clear();
        Ok(())
    }

    /// Drop the local lines without a request. Used after checkout, when
    /// the backend has already cleared the server-side cart.
    pub(crate) fn clear_local(&mut self) {
        self.items.clear();
        self.phase = MutationPhase::Idle;
    }

    #[cfg(test)]
    pub(crate) fn with_items(client: ApiClient, items: Vec<CartItem>) -> Self {
        Self {
            client,
            items,
            phase: MutationPhase::Idle,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use counterline_client::{ClientConfig, SessionStore};
    use std::str::FromStr;

    fn item(id: i32, quantity: i32, price: &str) -> CartItem {
        serde_json::from_value(serde_json::json!({
            "PK_CartItem": id,
            "Customer_id": 1,
            "Quantity": quantity,
            "Status": "active",
            "VariationID": id * 10,
            "Price": f64::from_str(price).unwrap(),
        }))
        .unwrap()
    }

    fn board(items: Vec<CartItem>) -> CartBoard {
        let config = ClientConfig::default();
        CartBoard::with_items(ApiClient::new(&config, SessionStore::new()), items)
    }

    #[test]
    fn total_sums_line_subtotals_in_decimal() {
        let board = board(vec![item(1, 2, "19.99"), item(2, 1, "4.50")]);
        assert_eq!(board.total(), Money::from_str("44.48").unwrap());
        assert_eq!(board.item_count(), 2);
    }

    #[test]
    fn empty_board_totals_zero() {
        let board = board(vec![]);
        assert_eq!(board.total(), Money::ZERO);
        assert_eq!(board.phase(), MutationPhase::Idle);
    }

    #[test]
    fn clear_local_resets_phase() {
        let mut board = board(vec![item(1, 2, "19.99")]);
        board.clear_local();
        assert!(board.items().is_empty());
        assert_eq!(board.phase(), MutationPhase::Idle);
    }

    #[tokio::test]
    async fn add_without_session_short_circuits() {
        let mut board = board(vec![]);
        let err = board.add(VariationId::new(42), 1).await.unwrap_err();
        assert!(matches!(err, StorefrontError::NeedsLogin));
    }
}
