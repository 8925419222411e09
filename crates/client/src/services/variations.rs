//! Admin variation CRUD under `/admin/variations`.

use counterline_core::VariationId;
use serde::Serialize;
use tracing::instrument;

use crate::error::ApiError;
use crate::http::ApiClient;
use crate::models::{Variation, VariationCreate, VariationUpdate};

/// Query parameters for the admin variation listing.
#[derive(Debug, Clone, Default, Serialize)]
pub struct VariationListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

/// `POST /admin/variations/{id}/add-image-url` response.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct ImageUrlAdded {
    pub image_url: String,
    pub image_id: i32,
}

impl ApiClient {
    /// List variations across all products.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the session is expired.
    #[instrument(skip(self), fields(request_id))]
    pub async fn variations(
        &self,
        params: &VariationListParams,
    ) -> Result<Vec<Variation>, ApiError> {
        self.get_query("/admin/variations/", params, "variation list")
            .await
    }

    /// Get a variation by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the variation is gone.
    #[instrument(skip(self), fields(variation_id = %id, request_id))]
    pub async fn variation(&self, id: VariationId) -> Result<Variation, ApiError> {
        self.get(&format!("/admin/variations/{id}"), "variation")
            .await
    }

    /// Create a variation.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the SKU already exists.
    #[instrument(skip(self, body), fields(sku = %body.sku, request_id))]
    pub async fn create_variation(&self, body: &VariationCreate) -> Result<Variation, ApiError> {
        self.post("/admin/variations/", body, "variation").await
    }

    /// Update a variation.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the variation is gone.
    #[instrument(skip(self, body), fields(variation_id = %id, request_id))]
    pub async fn update_variation(
        &self,
        id: VariationId,
        body: &VariationUpdate,
    ) -> Result<Variation, ApiError> {
        self.put(&format!("/admin/variations/{id}"), body, "variation")
            .await
    }

    /// Delete a variation.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the variation is gone.
    #[instrument(skip(self), fields(variation_id = %id, request_id))]
    pub async fn delete_variation(&self, id: VariationId) -> Result<(), ApiError> {
        self.delete(&format!("/admin/variations/{id}")).await
    }

    /// Adjust a variation's stock by a signed delta (positive restocks,
    /// negative writes off).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the variation is gone.
    #[instrument(skip(self), fields(variation_id = %id, delta, request_id))]
    pub async fn adjust_variation_quantity(
        &self,
        id: VariationId,
        delta: i32,
    ) -> Result<Variation, ApiError> {
        self.patch_query(
            &format!("/admin/variations/{id}/quantity"),
            &[("quantity_change", delta)],
            "variation",
        )
        .await
    }

    /// Attach an externally hosted image URL to a variation. The backend
    /// caps each variation at three images.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the variation is gone, or
    /// the image cap is hit.
    #[instrument(skip(self, url), fields(variation_id = %id, request_id))]
    pub async fn add_variation_image_url(
        &self,
        id: VariationId,
        url: &str,
        set_default: bool,
    ) -> Result<ImageUrlAdded, ApiError> {
        self.post_query(
            &format!("/admin/variations/{id}/add-image-url"),
            &[
                ("image_url", url),
                ("set_default", if set_default { "true" } else { "false" }),
            ],
            "image response",
        )
        .await
    }
}
