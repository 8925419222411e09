//! Admin employee CRUD under `/admin/employees`.

use counterline_core::EmployeeId;
use serde::Serialize;
use tracing::instrument;

use crate::error::ApiError;
use crate::http::ApiClient;
use crate::models::{Employee, EmployeeCreate, EmployeeUpdate};

/// Query parameters for the admin employee listing.
#[derive(Debug, Clone, Default, Serialize)]
pub struct EmployeeListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl ApiClient {
    /// List employees with optional name/phone/email/status filters.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the session is expired.
    #[instrument(skip(self), fields(request_id))]
    pub async fn employees(&self, params: &EmployeeListParams) -> Result<Vec<Employee>, ApiError> {
        self.get_query("/admin/employees/", params, "employee list")
            .await
    }

    /// Get an employee by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the employee is gone.
    #[instrument(skip(self), fields(employee_id = %id, request_id))]
    pub async fn employee(&self, id: EmployeeId) -> Result<Employee, ApiError> {
        self.get(&format!("/admin/employees/{id}"), "employee")
            .await
    }

    /// Create an employee linked to an existing login account.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self, body), fields(name = %body.name, request_id))]
    pub async fn create_employee(&self, body: &EmployeeCreate) -> Result<Employee, ApiError> {
        self.post("/admin/employees/", body, "employee").await
    }

    /// Update an employee.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the employee is gone.
    #[instrument(skip(self, body), fields(employee_id = %id, request_id))]
    pub async fn update_employee(
        &self,
        id: EmployeeId,
        body: &EmployeeUpdate,
    ) -> Result<Employee, ApiError> {
        self.put(&format!("/admin/employees/{id}"), body, "employee")
            .await
    }

    /// Deactivate an employee's login account.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the employee is gone.
    #[instrument(skip(self), fields(employee_id = %id, request_id))]
    pub async fn deactivate_employee(&self, id: EmployeeId) -> Result<Employee, ApiError> {
        self.put_empty(&format!("/admin/employees/{id}/deactivate"), "employee")
            .await
    }

    /// Reactivate a previously deactivated employee.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the employee is gone.
    #[instrument(skip(self), fields(employee_id = %id, request_id))]
    pub async fn reactivate_employee(&self, id: EmployeeId) -> Result<Employee, ApiError> {
        self.put_empty(&format!("/admin/employees/{id}/reactivate"), "employee")
            .await
    }
}
