//! Admin customer CRUD under `/admin/customers`.

use counterline_core::CustomerId;
use serde::Serialize;
use tracing::instrument;

use crate::error::ApiError;
use crate::http::ApiClient;
use crate::models::{Customer, CustomerCreate, CustomerUpdate};

/// Query parameters for the admin customer listing.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CustomerListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl ApiClient {
    /// List customers with optional name/phone/status filters.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the session is expired.
    #[instrument(skip(self), fields(request_id))]
    pub async fn customers(&self, params: &CustomerListParams) -> Result<Vec<Customer>, ApiError> {
        self.get_query("/admin/customers/", params, "customer list")
            .await
    }

    /// Get a customer by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the customer is gone.
    #[instrument(skip(self), fields(customer_id = %id, request_id))]
    pub async fn customer(&self, id: CustomerId) -> Result<Customer, ApiError> {
        self.get(&format!("/admin/customers/{id}"), "customer")
            .await
    }

    /// Create a customer record (walk-in registration at the counter).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self, body), fields(name = %body.name, request_id))]
    pub async fn create_customer(&self, body: &CustomerCreate) -> Result<Customer, ApiError> {
        self.post("/admin/customers/", body, "customer").await
    }

    /// Update a customer.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the customer is gone.
    #[instrument(skip(self, body), fields(customer_id = %id, request_id))]
    pub async fn update_customer(
        &self,
        id: CustomerId,
        body: &CustomerUpdate,
    ) -> Result<Customer, ApiError> {
        self.put(&format!("/admin/customers/{id}"), body, "customer")
            .await
    }

    /// Soft-deactivate a customer. The record stays; its status flips to
    /// inactive.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the customer is gone.
    #[instrument(skip(self), fields(customer_id = %id, request_id))]
    pub async fn deactivate_customer(&self, id: CustomerId) -> Result<Customer, ApiError> {
        self.put_empty(&format!("/admin/customers/{id}/deactivate"), "customer")
            .await
    }
}
