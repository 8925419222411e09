//! Admin product CRUD under `/admin/products`.

use counterline_core::{BrandId, CategoryId, ProductId};
use serde::Serialize;
use tracing::instrument;

use crate::error::ApiError;
use crate::http::ApiClient;
use crate::models::{Product, ProductCreate, Variation};

/// Query parameters for the admin product listing.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProductListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<CategoryId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand_id: Option<BrandId>,
}

impl ApiClient {
    /// List products with optional name/category/brand filters.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the session is expired.
    #[instrument(skip(self), fields(request_id))]
    pub async fn products(&self, params: &ProductListParams) -> Result<Vec<Product>, ApiError> {
        self.get_query("/admin/products/", params, "product list")
            .await
    }

    /// Get a product by id, variations included.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the product is gone.
    #[instrument(skip(self), fields(product_id = %id, request_id))]
    pub async fn product(&self, id: ProductId) -> Result<Product, ApiError> {
        self.get(&format!("/admin/products/{id}"), "product").await
    }

    /// Create a product.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body fails server-side
    /// validation.
    #[instrument(skip(self, body), fields(name = %body.name, request_id))]
    pub async fn create_product(&self, body: &ProductCreate) -> Result<Product, ApiError> {
        self.post("/admin/products/", body, "product").await
    }

    /// Update a product.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the product is gone.
    #[instrument(skip(self, body), fields(product_id = %id, request_id))]
    pub async fn update_product(
        &self,
        id: ProductId,
        body: &ProductCreate,
    ) -> Result<Product, ApiError> {
        self.put(&format!("/admin/products/{id}"), body, "product")
            .await
    }

    /// Delete a product.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the product is gone.
    #[instrument(skip(self), fields(product_id = %id, request_id))]
    pub async fn delete_product(&self, id: ProductId) -> Result<(), ApiError> {
        self.delete(&format!("/admin/products/{id}")).await
    }

    /// The variations of one product.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the product is gone.
    #[instrument(skip(self), fields(product_id = %id, request_id))]
    pub async fn product_variations(&self, id: ProductId) -> Result<Vec<Variation>, ApiError> {
        Ok(self.product(id).await?.variations)
    }
}
