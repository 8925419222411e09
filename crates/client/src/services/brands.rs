//! Admin brand CRUD under `/admin/brands`.

use counterline_core::BrandId;
use tracing::instrument;

use crate::error::ApiError;
use crate::http::ApiClient;
use crate::models::{Brand, BrandCreate};

impl ApiClient {
    /// List all brands. The backend does not paginate this resource.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the session is expired.
    #[instrument(skip(self), fields(request_id))]
    pub async fn brands(&self) -> Result<Vec<Brand>, ApiError> {
        self.get("/admin/brands/", "brand list").await
    }

    /// Get a brand by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the brand is gone.
    #[instrument(skip(self), fields(brand_id = %id, request_id))]
    pub async fn brand(&self, id: BrandId) -> Result<Brand, ApiError> {
        self.get(&format!("/admin/brands/{id}"), "brand").await
    }

    /// Create a brand.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self, body), fields(name = %body.name, request_id))]
    pub async fn create_brand(&self, body: &BrandCreate) -> Result<Brand, ApiError> {
        self.post("/admin/brands/", body, "brand").await
    }

    /// Update a brand.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the brand is gone.
    #[instrument(skip(self, body), fields(brand_id = %id, request_id))]
    pub async fn update_brand(&self, id: BrandId, body: &BrandCreate) -> Result<Brand, ApiError> {
        self.put(&format!("/admin/brands/{id}"), body, "brand").await
    }

    /// Delete a brand.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or products still reference
    /// the brand.
    #[instrument(skip(self), fields(brand_id = %id, request_id))]
    pub async fn delete_brand(&self, id: BrandId) -> Result<(), ApiError> {
        self.delete(&format!("/admin/brands/{id}")).await
    }
}
