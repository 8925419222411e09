//! Public storefront catalog endpoints under `/products`.
//!
//! These are the unauthenticated browse surfaces; a token is still sent
//! when present but never required.

use counterline_core::{CategoryId, ProductId, VariationId};
use serde::Serialize;
use tracing::instrument;

use crate::error::ApiError;
use crate::http::ApiClient;
use crate::models::{Brand, Category, ProductImage, PublicProduct, PublicVariation};

/// Query parameters for the storefront product listing.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ShopListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<CategoryId>,
}

impl ApiClient {
    /// Browse sellable variations, optionally filtered by category.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self), fields(request_id))]
    pub async fn shop_products(
        &self,
        params: &ShopListParams,
    ) -> Result<Vec<PublicVariation>, ApiError> {
        self.get_query("/products/", params, "shop listing").await
    }

    /// Keyword search over the storefront catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self), fields(request_id))]
    pub async fn search_products(&self, keyword: &str) -> Result<Vec<PublicVariation>, ApiError> {
        self.get_query(
            "/products/search",
            &[("keyword", keyword)],
            "search results",
        )
        .await
    }

    /// The storefront's featured variations.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self), fields(request_id))]
    pub async fn featured_products(&self) -> Result<Vec<PublicVariation>, ApiError> {
        self.get("/products/featured", "featured listing").await
    }

    /// Storefront product detail with its variations.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the product is gone.
    #[instrument(skip(self), fields(product_id = %id, request_id))]
    pub async fn public_product(&self, id: ProductId) -> Result<PublicProduct, ApiError> {
        self.get(&format!("/products/{id}"), "product").await
    }

    /// The categories shown on the storefront.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self), fields(request_id))]
    pub async fn public_categories(&self) -> Result<Vec<Category>, ApiError> {
        self.get("/products/categories", "category list").await
    }

    /// The brands shown on the storefront.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self), fields(request_id))]
    pub async fn public_brands(&self) -> Result<Vec<Brand>, ApiError> {
        self.get("/products/brands", "brand list").await
    }

    /// Storefront detail for a single variation.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the variation is gone.
    #[instrument(skip(self), fields(variation_id = %id, request_id))]
    pub async fn public_variation(&self, id: VariationId) -> Result<PublicVariation, ApiError> {
        self.get(&format!("/products/variation/{id}"), "variation")
            .await
    }

    /// Images for a variation, as shown on its storefront detail page.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self), fields(variation_id = %id, request_id))]
    pub async fn variation_images(&self, id: VariationId) -> Result<Vec<ProductImage>, ApiError> {
        self.get(&format!("/products/variation/{id}/images"), "image list")
            .await
    }
}
