//! Products, variations, categories, brands, and images.
//!
//! Two families exist on the wire: the authenticated admin shapes
//! ([`Product`], [`Variation`]) and the unauthenticated storefront shapes
//! ([`PublicProduct`], [`PublicVariation`]) served under `/products`.

use counterline_core::{BrandId, CategoryId, ImageId, Money, ProductId, VariationId};
use serde::{Deserialize, Serialize};

/// Admin product record.
#[derive(Debug, Clone, Deserialize)]
pub struct Product {
    #[serde(rename = "PK_Product")]
    pub id: ProductId,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Images", default)]
    pub images: Option<String>,
    #[serde(rename = "CategoryID")]
    pub category_id: CategoryId,
    #[serde(rename = "BrandID")]
    pub brand_id: BrandId,
    #[serde(default)]
    pub variations: Vec<Variation>,
}

/// Admin variation record (one sellable SKU of a product).
#[derive(Debug, Clone, Deserialize)]
pub struct Variation {
    #[serde(rename = "PK_Variation")]
    pub id: VariationId,
    #[serde(rename = "ProductID")]
    pub product_id: ProductId,
    #[serde(rename = "SKU")]
    pub sku: String,
    #[serde(rename = "Name", default)]
    pub name: Option<String>,
    #[serde(rename = "Price", default, with = "rust_decimal::serde::float_option")]
    pub price: Option<Money>,
    #[serde(rename = "Quantity", default)]
    pub quantity: Option<i32>,
    #[serde(rename = "Color", default)]
    pub color: Option<String>,
    #[serde(rename = "Material", default)]
    pub material: Option<String>,
    #[serde(rename = "Size", default)]
    pub size: Option<String>,
    #[serde(rename = "Description", default)]
    pub description: Option<String>,
    #[serde(rename = "Sold", default)]
    pub sold: Option<i32>,
    #[serde(rename = "Status", default)]
    pub status: Option<String>,
}

impl Variation {
    /// Units available for sale. Absent quantity reads as zero.
    #[must_use]
    pub fn stock(&self) -> i32 {
        self.quantity.unwrap_or(0)
    }

    /// Display name, falling back to the SKU for unnamed variations.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.sku)
    }
}

/// Storefront variation as served by the public `/products` endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct PublicVariation {
    #[serde(rename = "PK_Variation")]
    pub id: VariationId,
    #[serde(rename = "SKU")]
    pub sku: String,
    #[serde(rename = "Name", default)]
    pub name: Option<String>,
    #[serde(rename = "Price", with = "rust_decimal::serde::float")]
    pub price: Money,
    #[serde(rename = "Quantity")]
    pub quantity: i32,
    #[serde(rename = "Color", default)]
    pub color: Option<String>,
    #[serde(rename = "Material", default)]
    pub material: Option<String>,
    #[serde(rename = "Size", default)]
    pub size: Option<String>,
    #[serde(rename = "Description", default)]
    pub description: Option<String>,
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "ProductID")]
    pub product_id: ProductId,
    #[serde(rename = "CategoryID", default)]
    pub category_id: Option<CategoryId>,
}

/// Storefront product detail with its variations inlined.
#[derive(Debug, Clone, Deserialize)]
pub struct PublicProduct {
    #[serde(rename = "PK_Product")]
    pub id: ProductId,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Images", default)]
    pub images: Option<String>,
    #[serde(rename = "CategoryID")]
    pub category_id: CategoryId,
    #[serde(rename = "BrandID")]
    pub brand_id: BrandId,
    #[serde(default)]
    pub variations: Vec<PublicVariation>,
}

/// Category record (admin and public share the shape; public omits status).
#[derive(Debug, Clone, Deserialize)]
pub struct Category {
    #[serde(rename = "PK_Category")]
    pub id: CategoryId,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Status", default)]
    pub status: Option<String>,
}

/// Brand record.
#[derive(Debug, Clone, Deserialize)]
pub struct Brand {
    #[serde(rename = "PK_Brand")]
    pub id: BrandId,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Note", default)]
    pub note: Option<String>,
    #[serde(rename = "Status", default)]
    pub status: Option<String>,
}

/// Stored image reference: `Id_Image` is a URL or asset path, never bytes.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductImage {
    #[serde(rename = "PK_Images")]
    pub id: ImageId,
    #[serde(rename = "ProductID", default)]
    pub product_id: Option<ProductId>,
    #[serde(rename = "VariationID", default)]
    pub variation_id: Option<VariationId>,
    #[serde(rename = "Id_Image")]
    pub url: String,
    #[serde(rename = "Set_Default", default)]
    pub is_default: bool,
}

/// `POST /admin/products/` and `PUT /admin/products/{id}` body.
#[derive(Debug, Clone, Serialize)]
pub struct ProductCreate {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Images", skip_serializing_if = "Option::is_none")]
    pub images: Option<String>,
    #[serde(rename = "CategoryID")]
    pub category_id: CategoryId,
    #[serde(rename = "BrandID")]
    pub brand_id: BrandId,
}

/// `POST /admin/categories/` body; updates reuse it with all fields set.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryCreate {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Status", skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// `POST /admin/brands/` body.
#[derive(Debug, Clone, Serialize)]
pub struct BrandCreate {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Note", skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(rename = "Status", skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// `POST /admin/variations/` body.
#[derive(Debug, Clone, Serialize)]
pub struct VariationCreate {
    #[serde(rename = "ProductID")]
    pub product_id: ProductId,
    #[serde(rename = "SKU")]
    pub sku: String,
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(
        rename = "Price",
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::float_option"
    )]
    pub price: Option<Money>,
    #[serde(rename = "Quantity", skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i32>,
    #[serde(rename = "Color", skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(rename = "Material", skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
    #[serde(rename = "Size", skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(rename = "Description", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "Status", skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// `PUT /admin/variations/{id}` body; every field optional.
#[derive(Debug, Clone, Default, Serialize)]
pub struct VariationUpdate {
    #[serde(rename = "SKU", skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(
        rename = "Price",
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::float_option"
    )]
    pub price: Option<Money>,
    #[serde(rename = "Quantity", skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i32>,
    #[serde(rename = "Color", skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(rename = "Material", skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
    #[serde(rename = "Size", skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(rename = "Description", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "Status", skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// `POST /admin/images/` body: registers an image URL against a product
/// or variation.
#[derive(Debug, Clone, Serialize)]
pub struct ImageCreate {
    #[serde(rename = "ProductID", skip_serializing_if = "Option::is_none")]
    pub product_id: Option<ProductId>,
    #[serde(rename = "VariationID", skip_serializing_if = "Option::is_none")]
    pub variation_id: Option<VariationId>,
    #[serde(rename = "Id_Image")]
    pub url: String,
    #[serde(rename = "Set_Default")]
    pub is_default: bool,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn variation_deserializes_wire_names() {
        let json = r#"{
            "PK_Variation": 42,
            "ProductID": 7,
            "SKU": "TS-BLK-M",
            "Name": "Black Tee (M)",
            "Price": 19.99,
            "Quantity": 3,
            "Color": "Black",
            "Material": null,
            "Size": "M",
            "Description": null,
            "Sold": 11,
            "Status": "active"
        }"#;
        let variation: Variation = serde_json::from_str(json).unwrap();
        assert_eq!(variation.id, VariationId::new(42));
        assert_eq!(variation.price, Some(Money::from_str("19.99").unwrap()));
        assert_eq!(variation.stock(), 3);
        assert_eq!(variation.display_name(), "Black Tee (M)");
    }

    #[test]
    fn unnamed_variation_displays_sku() {
        let json = r#"{"PK_Variation": 1, "ProductID": 1, "SKU": "RAW-01"}"#;
        let variation: Variation = serde_json::from_str(json).unwrap();
        assert_eq!(variation.display_name(), "RAW-01");
        assert_eq!(variation.stock(), 0);
    }

    #[test]
    fn product_create_serializes_wire_names() {
        let body = ProductCreate {
            name: "Tee".to_string(),
            images: None,
            category_id: CategoryId::new(2),
            brand_id: BrandId::new(3),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["Name"], "Tee");
        assert_eq!(json["CategoryID"], 2);
        assert!(json.get("Images").is_none());
    }

    #[test]
    fn variation_price_serializes_as_number() {
        let body = VariationUpdate {
            price: Some(Money::from_str("12.5").unwrap()),
            ..VariationUpdate::default()
        };
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"Price":12.5}"#);
    }
}
