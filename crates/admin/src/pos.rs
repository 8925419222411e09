//! The POS register for in-person sales.
//!
//! The register holds a draft sale: lines keyed by variation, an optional
//! customer (guest sales carry none), and the payment method. Quantities
//! are capped at the known stock when a line is added or edited, so a
//! sale that passes the register only fails server-side when stock moved
//! underneath it. Submitting builds a `"POS"` order with explicit lines
//! and resets the draft.

use counterline_client::ApiClient;
use counterline_client::models::{Order, OrderCreate, OrderLineCreate, Variation};
use counterline_core::{CustomerId, EmployeeId, Money, PaymentMethodId, VariationId, line_total};
use tracing::{info, instrument};

use crate::error::AdminError;

/// Payment methods the register offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PosPayment {
    #[default]
    Cash,
    CreditCard,
}

impl PosPayment {
    const fn method_id(self) -> PaymentMethodId {
        match self {
            Self::Cash => PaymentMethodId::CASH,
            Self::CreditCard => PaymentMethodId::CREDIT_CARD,
        }
    }
}

/// One draft line of the sale.
#[derive(Debug, Clone)]
pub struct PosLine {
    pub variation_id: VariationId,
    pub name: String,
    pub unit_price: Money,
    pub quantity: i32,
    pub stock: i32,
}

impl PosLine {
    #[must_use]
    pub fn subtotal(&self) -> Money {
        line_total(self.unit_price, self.quantity)
    }
}

/// Draft in-person sale.
#[derive(Debug, Clone)]
pub struct PosRegister {
    client: ApiClient,
    employee_id: EmployeeId,
    customer_id: Option<CustomerId>,
    payment: PosPayment,
    lines: Vec<PosLine>,
}

impl PosRegister {
    #[must_use]
    pub const fn new(client: ApiClient, employee_id: EmployeeId) -> Self {
        Self {
            client,
            employee_id,
            customer_id: None,
            payment: PosPayment::Cash,
            lines: Vec::new(),
        }
    }

    #[must_use]
    pub fn lines(&self) -> &[PosLine] {
        &self.lines
    }

    #[must_use]
    pub const fn customer(&self) -> Option<CustomerId> {
        self.customer_id
    }

    /// Attach the sale to a customer, or `None` for a guest sale.
    pub fn select_customer(&mut self, customer_id: Option<CustomerId>) {
        self.customer_id = customer_id;
    }

    pub fn select_payment(&mut self, payment: PosPayment) {
        self.payment = payment;
    }

    /// Running total of the draft.
    #[must_use]
    pub fn total(&self) -> Money {
        self.lines.iter().map(PosLine::subtotal).sum()
    }

    /// Variations the register may sell: priced and with stock on hand.
    #[must_use]
    pub fn sellable(variations: &[Variation]) -> Vec<&Variation> {
        variations
            .iter()
            .filter(|v| v.stock() > 0 && v.price.is_some())
            .collect()
    }

    /// Add a variation to the sale, merging into an existing line. The
    /// merged quantity is capped at the variation's stock.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a non-positive quantity, an
    /// unpriced variation, or a variation with no stock.
    pub fn add_line(&mut self, variation: &Variation, quantity: i32) -> Result<(), AdminError> {
        if quantity < 1 {
            return Err(AdminError::validation("Quantity must be at least 1."));
        }
        let Some(unit_price) = variation.price else {
            return Err(AdminError::validation(
                "This variation has no price and cannot be sold.",
            ));
        };
        let stock = variation.stock();
        if stock < 1 {
            return Err(AdminError::validation("This variation is out of stock."));
        }

        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| line.variation_id == variation.id)
        {
            line.quantity = (line.quantity + quantity).min(stock);
            line.stock = stock;
        } else {
            self.lines.push(PosLine {
                variation_id: variation.id,
                name: variation.display_name().to_owned(),
                unit_price,
                quantity: quantity.min(stock),
                stock,
            });
        }
        Ok(())
    }

    /// Set a line's quantity. Zero or below removes the line; above the
    /// known stock is rejected.
    ///
    /// # Errors
    ///
    /// Returns a validation error when the quantity exceeds the line's
    /// stock.
    pub fn set_line_quantity(
        &mut self,
        variation_id: VariationId,
        quantity: i32,
    ) -> Result<(), AdminError> {
        if quantity <= 0 {
            self.remove_line(variation_id);
            return Ok(());
        }
        let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| line.variation_id == variation_id)
        else {
            return Ok(());
        };
        if quantity > line.stock {
            return Err(AdminError::validation(format!(
                "Only {} in stock.",
                line.stock
            )));
        }
        line.quantity = quantity;
        Ok(())
    }

    pub fn remove_line(&mut self, variation_id: VariationId) {
        self.lines.retain(|line| line.variation_id != variation_id);
    }

    /// Submit the sale and reset the draft. The draft is kept intact on
    /// failure so the cashier can retry.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an empty sale, `OutOfStock` when
    /// stock moved since the lines were added, or the API error.
    #[instrument(skip(self), fields(lines = self.lines.len(), total = %self.total()))]
    pub async fn submit(&mut self) -> Result<Order, AdminError> {
        if self.lines.is_empty() {
            return Err(AdminError::validation("Add at least one item to the sale."));
        }

        let body = OrderCreate {
            customer_id: self.customer_id,
            employee_id: Some(self.employee_id),
            payment_method_id: self.payment.method_id(),
            address_id: None,
            note: None,
            order_type: "POS".to_owned(),
            order_lines: self
                .lines
                .iter()
                .map(|line| OrderLineCreate {
                    variation_id: line.variation_id,
                    quantity: line.quantity,
                    unit_price: line.unit_price,
                })
                .collect(),
        };

        let order = match self.client.create_order(&body).await {
            Ok(order) => order,
            Err(e) if e.is_stock_conflict() => return Err(AdminError::OutOfStock),
            Err(e) => return Err(e.into()),
        };

        info!(order_id = %order.id, "pos sale recorded");
        self.lines.clear();
        self.customer_id = None;
        self.payment = PosPayment::Cash;
        Ok(order)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use counterline_client::{ClientConfig, SessionStore};
    use std::str::FromStr;

    fn register() -> PosRegister {
        let config = ClientConfig::default();
        PosRegister::new(
            ApiClient::new(&config, SessionStore::new()),
            EmployeeId::new(3),
        )
    }

    fn variation(id: i32, price: &str, quantity: i32) -> Variation {
        serde_json::from_value(serde_json::json!({
            "PK_Variation": id,
            "ProductID": 7,
            "SKU": format!("SKU-{id}"),
            "Name": format!("Item {id}"),
            "Price": f64::from_str(price).unwrap(),
            "Quantity": quantity,
        }))
        .unwrap()
    }

    #[test]
    fn adding_merges_and_caps_at_stock() {
        let mut register = register();
        let item = variation(42, "19.99", 3);

        register.add_line(&item, 2).unwrap();
        register.add_line(&item, 2).unwrap();

        assert_eq!(register.lines().len(), 1);
        assert_eq!(register.lines()[0].quantity, 3);
        assert_eq!(register.total(), Money::from_str("59.97").unwrap());
    }

    #[test]
    fn out_of_stock_variation_is_rejected() {
        let mut register = register();
        let item = variation(42, "19.99", 0);
        assert!(register.add_line(&item, 1).is_err());
    }

    #[test]
    fn zero_quantity_removes_the_line() {
        let mut register = register();
        let item = variation(42, "19.99", 3);
        register.add_line(&item, 2).unwrap();

        register.set_line_quantity(item.id, 0).unwrap();
        assert!(register.lines().is_empty());
    }

    #[test]
    fn quantity_above_stock_is_rejected() {
        let mut register = register();
        let item = variation(42, "19.99", 3);
        register.add_line(&item, 1).unwrap();

        let err = register.set_line_quantity(item.id, 5).unwrap_err();
        assert!(matches!(err, AdminError::Validation(msg) if msg == "Only 3 in stock."));
        assert_eq!(register.lines()[0].quantity, 1);
    }

    #[test]
    fn sellable_filters_unpriced_and_empty() {
        let stocked = variation(1, "10.00", 5);
        let empty = variation(2, "10.00", 0);
        let pool = vec![stocked, empty];
        let sellable = PosRegister::sellable(&pool);
        assert_eq!(sellable.len(), 1);
        assert_eq!(sellable[0].id, VariationId::new(1));
    }

    #[tokio::test]
    async fn empty_sale_is_rejected_before_any_request() {
        let mut register = register();
        let err = register.submit().await.unwrap_err();
        assert!(matches!(err, AdminError::Validation(_)));
    }
}
