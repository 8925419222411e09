//! Cart line shapes.

use counterline_core::{CartItemId, CustomerId, Money, VariationId, line_total};
use serde::{Deserialize, Serialize};

/// One line of the signed-in customer's cart.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CartItem {
    #[serde(rename = "PK_CartItem")]
    pub id: CartItemId,
    #[serde(rename = "Customer_id")]
    pub customer_id: CustomerId,
    #[serde(rename = "Quantity")]
    pub quantity: i32,
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "VariationID")]
    pub variation_id: VariationId,
    #[serde(rename = "variation_name", default)]
    pub variation_name: Option<String>,
    #[serde(rename = "Price", default, with = "rust_decimal::serde::float_option")]
    pub price: Option<Money>,
}

impl CartItem {
    /// Price of this line (unit price times quantity). Lines the backend
    /// sent without a price count as zero.
    #[must_use]
    pub fn subtotal(&self) -> Money {
        self.price
            .map_or(Money::ZERO, |p| line_total(p, self.quantity))
    }
}

/// `POST /cart/` body.
#[derive(Debug, Clone, Serialize)]
pub struct CartAdd {
    pub variation_id: VariationId,
    pub quantity: i32,
}

/// `PUT /cart/{id}` body.
#[derive(Debug, Clone, Serialize)]
pub struct CartQuantityUpdate {
    pub quantity: i32,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn cart_item_deserializes_mixed_casing() {
        let json = r#"{
            "PK_CartItem": 9,
            "Customer_id": 4,
            "Quantity": 2,
            "Status": "active",
            "VariationID": 42,
            "variation_name": "Black Tee (M)",
            "Price": 19.99
        }"#;
        let item: CartItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.variation_id, VariationId::new(42));
        assert_eq!(item.subtotal(), Money::from_str("39.98").unwrap());
    }

    #[test]
    fn priceless_line_subtotal_is_zero() {
        let json = r#"{
            "PK_CartItem": 9,
            "Customer_id": 4,
            "Quantity": 2,
            "Status": "active",
            "VariationID": 42
        }"#;
        let item: CartItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.subtotal(), Money::ZERO);
    }
}
