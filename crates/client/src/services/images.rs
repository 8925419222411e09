//! Admin image registry under `/admin/images`.
//!
//! Images are stored as URL references; no binary upload goes through this
//! client. The public per-variation listing lives in the catalog service.

use counterline_core::{ImageId, ProductId, VariationId};
use serde::Serialize;
use tracing::instrument;

use crate::error::ApiError;
use crate::http::ApiClient;
use crate::models::{ImageCreate, ProductImage};

/// Query parameters for the admin image listing. Filter by product or
/// variation, not both.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ImageListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<ProductId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variation_id: Option<VariationId>,
}

impl ApiClient {
    /// List registered images, filtered by product or variation.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the session is expired.
    #[instrument(skip(self), fields(request_id))]
    pub async fn images(&self, params: &ImageListParams) -> Result<Vec<ProductImage>, ApiError> {
        self.get_query("/admin/images/", params, "image list").await
    }

    /// Get an image record by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the image is gone.
    #[instrument(skip(self), fields(image_id = %id, request_id))]
    pub async fn image(&self, id: ImageId) -> Result<ProductImage, ApiError> {
        self.get(&format!("/admin/images/{id}"), "image").await
    }

    /// Register an image URL against a product or variation.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self, body), fields(request_id))]
    pub async fn add_image(&self, body: &ImageCreate) -> Result<ProductImage, ApiError> {
        self.post("/admin/images/", body, "image").await
    }

    /// Update an image record (URL, target, or default flag).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the image is gone.
    #[instrument(skip(self, body), fields(image_id = %id, request_id))]
    pub async fn update_image(
        &self,
        id: ImageId,
        body: &ImageCreate,
    ) -> Result<ProductImage, ApiError> {
        self.put(&format!("/admin/images/{id}"), body, "image").await
    }

    /// Delete an image record.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the image is gone.
    #[instrument(skip(self), fields(image_id = %id, request_id))]
    pub async fn delete_image(&self, id: ImageId) -> Result<(), ApiError> {
        self.delete(&format!("/admin/images/{id}")).await
    }
}
