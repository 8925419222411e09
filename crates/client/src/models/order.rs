//! Order and order-line shapes.
//!
//! Orders come in two flavors distinguished by `Type_Order`: `"POS"` for
//! in-person sales entered at the register and `"Online"` for storefront
//! checkouts. `Status` is a raw string; parse through
//! [`counterline_core::OrderStatus`] before branching on it.

use chrono::NaiveDateTime;
use counterline_core::{
    AddressId, CustomerId, EmployeeId, Money, OrderId, OrderLineId, OrderStatus, PaymentMethodId,
    VariationId,
};
use serde::{Deserialize, Serialize};

/// An order as returned by both the admin and the user order endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct Order {
    #[serde(rename = "PK_POSOrder")]
    pub id: OrderId,
    #[serde(rename = "CustomerID", default)]
    pub customer_id: Option<CustomerId>,
    #[serde(rename = "EmployeeID", default)]
    pub employee_id: Option<EmployeeId>,
    #[serde(rename = "AddressID", default)]
    pub address_id: Option<AddressId>,
    #[serde(rename = "Creation_date", default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(rename = "Total_Amount", with = "rust_decimal::serde::float")]
    pub total_amount: Money,
    #[serde(rename = "Total_Payment", with = "rust_decimal::serde::float")]
    pub total_payment: Money,
    #[serde(rename = "PaymentMethodID")]
    pub payment_method_id: PaymentMethodId,
    #[serde(rename = "Note", default)]
    pub note: Option<String>,
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "Order_Date", default)]
    pub order_date: Option<NaiveDateTime>,
    #[serde(rename = "Payment_Date", default)]
    pub payment_date: Option<NaiveDateTime>,
    #[serde(rename = "Type_Order")]
    pub order_type: String,
    #[serde(rename = "ShippingAddress", default)]
    pub shipping_address: Option<String>,
}

impl Order {
    /// The parsed lifecycle status, if the backend's string is recognized.
    #[must_use]
    pub fn parsed_status(&self) -> Option<OrderStatus> {
        self.status.parse().ok()
    }
}

/// One line of an order.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderLine {
    #[serde(rename = "PK_OrderLine")]
    pub id: OrderLineId,
    #[serde(rename = "OrderID")]
    pub order_id: OrderId,
    #[serde(rename = "VariationID", default)]
    pub variation_id: Option<VariationId>,
    #[serde(rename = "VariationName", default)]
    pub variation_name: Option<String>,
    #[serde(rename = "Quantity")]
    pub quantity: i32,
    #[serde(rename = "Unit_Price", with = "rust_decimal::serde::float")]
    pub unit_price: Money,
    #[serde(rename = "Price", with = "rust_decimal::serde::float")]
    pub price: Money,
    #[serde(rename = "Status", default)]
    pub status: Option<String>,
    #[serde(rename = "Creation_date", default)]
    pub created_at: Option<NaiveDateTime>,
}

/// An order together with its lines, as storefront detail views need it.
#[derive(Debug, Clone)]
pub struct OrderDetail {
    pub order: Order,
    pub lines: Vec<OrderLine>,
}

/// One line of a `POST /admin/orders/` body.
#[derive(Debug, Clone, Serialize)]
pub struct OrderLineCreate {
    #[serde(rename = "VariationID")]
    pub variation_id: VariationId,
    #[serde(rename = "Quantity")]
    pub quantity: i32,
    #[serde(rename = "Unit_Price", with = "rust_decimal::serde::float")]
    pub unit_price: Money,
}

/// `POST /admin/orders/` body, used by the POS register.
#[derive(Debug, Clone, Serialize)]
pub struct OrderCreate {
    #[serde(rename = "CustomerID", skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<CustomerId>,
    #[serde(rename = "EmployeeID", skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<EmployeeId>,
    #[serde(rename = "PaymentMethodID")]
    pub payment_method_id: PaymentMethodId,
    #[serde(rename = "AddressID", skip_serializing_if = "Option::is_none")]
    pub address_id: Option<AddressId>,
    #[serde(rename = "Note", skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(rename = "Type_Order")]
    pub order_type: String,
    pub order_lines: Vec<OrderLineCreate>,
}

/// `POST /user/orders` body: the backend builds the lines from the
/// customer's cart server-side.
#[derive(Debug, Clone, Serialize)]
pub struct UserOrderCreate {
    pub payment_method_id: PaymentMethodId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_id: Option<AddressId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// `PUT /admin/orders/{id}` body.
#[derive(Debug, Clone, Default, Serialize)]
pub struct OrderUpdate {
    #[serde(rename = "Status", skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(rename = "Note", skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(rename = "Payment_Date", skip_serializing_if = "Option::is_none")]
    pub payment_date: Option<NaiveDateTime>,
}

/// `GET /admin/orders/statistics` response.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderStatistics {
    pub total_orders: u64,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_revenue: Money,
    pub completed_orders: u64,
    pub cancelled_orders: u64,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn order_deserializes_and_parses_status() {
        let json = r#"{
            "PK_POSOrder": 12,
            "CustomerID": 4,
            "EmployeeID": null,
            "AddressID": 2,
            "Creation_date": "2025-11-02T09:30:00",
            "Total_Amount": 59.97,
            "Total_Payment": 59.97,
            "PaymentMethodID": 5,
            "Note": "Online order",
            "Status": "pending",
            "Order_Date": "2025-11-02T09:30:00",
            "Payment_Date": null,
            "Type_Order": "Online"
        }"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.parsed_status(), Some(OrderStatus::Pending));
        assert_eq!(order.total_amount, Money::from_str("59.97").unwrap());
        assert_eq!(order.payment_method_id, PaymentMethodId::CASH);
    }

    #[test]
    fn unknown_status_parses_to_none() {
        let json = r#"{
            "PK_POSOrder": 12,
            "Total_Amount": 1.0,
            "Total_Payment": 1.0,
            "PaymentMethodID": 5,
            "Status": "refunded",
            "Type_Order": "POS"
        }"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.parsed_status(), None);
    }

    #[test]
    fn pos_order_create_serializes_wire_names() {
        let body = OrderCreate {
            customer_id: None,
            employee_id: Some(EmployeeId::new(1)),
            payment_method_id: PaymentMethodId::CASH,
            address_id: None,
            note: Some("walk-in".to_string()),
            order_type: "POS".to_string(),
            order_lines: vec![OrderLineCreate {
                variation_id: VariationId::new(42),
                quantity: 2,
                unit_price: Money::from_str("19.99").unwrap(),
            }],
        };
        let json = serde_json::to_value(&body).unwrap();
        assert!(json.get("CustomerID").is_none());
        assert_eq!(json["Type_Order"], "POS");
        assert_eq!(json["order_lines"][0]["VariationID"], 42);
        assert_eq!(json["order_lines"][0]["Unit_Price"], 19.99);
    }
}
