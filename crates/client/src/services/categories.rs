//! Admin category CRUD under `/admin/categories`.

use counterline_core::CategoryId;
use serde::Serialize;
use tracing::instrument;

use crate::error::ApiError;
use crate::http::ApiClient;
use crate::models::{Category, CategoryCreate};

/// Query parameters for the admin category listing.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CategoryListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl ApiClient {
    /// List categories with optional name/status filters.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the session is expired.
    #[instrument(skip(self), fields(request_id))]
    pub async fn categories(&self, params: &CategoryListParams) -> Result<Vec<Category>, ApiError> {
        self.get_query("/admin/categories/", params, "category list")
            .await
    }

    /// Get a category by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the category is gone.
    #[instrument(skip(self), fields(category_id = %id, request_id))]
    pub async fn category(&self, id: CategoryId) -> Result<Category, ApiError> {
        self.get(&format!("/admin/categories/{id}"), "category")
            .await
    }

    /// Create a category.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self, body), fields(name = %body.name, request_id))]
    pub async fn create_category(&self, body: &CategoryCreate) -> Result<Category, ApiError> {
        self.post("/admin/categories/", body, "category").await
    }

    /// Update a category.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the category is gone.
    #[instrument(skip(self, body), fields(category_id = %id, request_id))]
    pub async fn update_category(
        &self,
        id: CategoryId,
        body: &CategoryCreate,
    ) -> Result<Category, ApiError> {
        self.put(&format!("/admin/categories/{id}"), body, "category")
            .await
    }

    /// Delete a category.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or products still reference
    /// the category.
    #[instrument(skip(self), fields(category_id = %id, request_id))]
    pub async fn delete_category(&self, id: CategoryId) -> Result<(), ApiError> {
        self.delete(&format!("/admin/categories/{id}")).await
    }
}
