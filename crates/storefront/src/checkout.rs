//! Checkout: turn the cart into an online order.
//!
//! The backend builds the order lines from the server-side cart and clears
//! it on success, so checkout only carries the payment method and delivery
//! address. Online orders are cash on delivery.

use counterline_client::ApiClient;
use counterline_client::models::{Order, UserOrderCreate};
use counterline_core::{AddressId, PaymentMethodId};
use tracing::{info, instrument};

use crate::cart::CartBoard;
use crate::error::StorefrontError;

/// Delivery-address selection plus order submission.
#[derive(Debug, Clone)]
pub struct CheckoutFlow {
    client: ApiClient,
    selected_address: Option<AddressId>,
}

impl CheckoutFlow {
    #[must_use]
    pub const fn new(client: ApiClient) -> Self {
        Self {
            client,
            selected_address: None,
        }
    }

    /// The address the order will be delivered to, if one is selected.
    #[must_use]
    pub const fn selected_address(&self) -> Option<AddressId> {
        self.selected_address
    }

    pub fn select_address(&mut self, address_id: AddressId) {
        self.selected_address = Some(address_id);
    }

    /// Place the order. The cart must be non-empty and a delivery address
    /// selected; on success the board's local lines are dropped to match
    /// the cart the backend already cleared.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an empty cart or a missing address,
    /// `OutOfStock` if stock ran out since the cart was filled, or the
    /// API error.
    #[instrument(skip(self, board), fields(lines = board.item_count()))]
    pub async fn submit(&self, board: &mut CartBoard) -> Result<Order, StorefrontError> {
        if board.items().is_empty() {
            return Err(StorefrontError::Validation(
                "Your cart is empty.".to_owned(),
            ));
        }
        let Some(address_id) = self.selected_address else {
            return Err(StorefrontError::Validation(
                "Please select a delivery address".to_owned(),
            ));
        };

        let request = UserOrderCreate {
            payment_method_id: PaymentMethodId::CASH,
            address_id: Some(address_id),
            note: Some("Online order".to_owned()),
        };
        let order = match self.client.place_order(&request).await {
            Ok(order) => order,
            Err(e) if e.is_stock_conflict() => return Err(StorefrontError::OutOfStock),
            Err(e) => return Err(e.into()),
        };

        board.clear_local();
        info!(order_id = %order.id, "order placed");
        Ok(order)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use counterline_client::{ClientConfig, SessionStore};

    fn flow() -> CheckoutFlow {
        let config = ClientConfig::default();
        CheckoutFlow::new(ApiClient::new(&config, SessionStore::new()))
    }

    #[tokio::test]
    async fn empty_cart_is_rejected_before_any_request() {
        let config = ClientConfig::default();
        let mut board = CartBoard::new(ApiClient::new(&config, SessionStore::new()));
        let err = flow().submit(&mut board).await.unwrap_err();
        assert!(matches!(err, StorefrontError::Validation(_)));
    }

    #[test]
    fn address_selection_is_remembered() {
        let mut checkout = flow();
        assert!(checkout.selected_address().is_none());
        checkout.select_address(AddressId::new(7));
        assert_eq!(checkout.selected_address(), Some(AddressId::new(7)));
    }
}
