//! Customer, employee, and profile shapes.

use chrono::NaiveDateTime;
use counterline_core::{AccountId, CustomerId, EmployeeId};
use serde::{Deserialize, Serialize};

/// The signed-in customer's own profile (`/user/profile` and the
/// `/user/register` echo).
#[derive(Debug, Clone, Deserialize)]
pub struct UserProfile {
    #[serde(rename = "PK_Customer")]
    pub id: CustomerId,
    #[serde(rename = "AccountID")]
    pub account_id: AccountId,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Phone", default)]
    pub phone: Option<String>,
    #[serde(rename = "Address", default)]
    pub address: Option<String>,
    #[serde(rename = "Status", default)]
    pub status: Option<String>,
}

/// `PUT /user/profile` body.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// Admin-side customer record.
#[derive(Debug, Clone, Deserialize)]
pub struct Customer {
    #[serde(rename = "PK_Customer")]
    pub id: CustomerId,
    #[serde(rename = "AccountID", default)]
    pub account_id: Option<AccountId>,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Address", default)]
    pub address: Option<String>,
    #[serde(rename = "Phone", default)]
    pub phone: Option<String>,
    #[serde(rename = "Note", default)]
    pub note: Option<String>,
    #[serde(rename = "Status", default)]
    pub status: Option<String>,
    #[serde(rename = "Creation_date", default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(rename = "Edit_date", default)]
    pub edited_at: Option<NaiveDateTime>,
}

/// `POST /admin/customers/` body.
#[derive(Debug, Clone, Serialize)]
pub struct CustomerCreate {
    #[serde(rename = "AccountID", skip_serializing_if = "Option::is_none")]
    pub account_id: Option<AccountId>,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Address", skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(rename = "Phone", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(rename = "Note", skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(rename = "Status", skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// `PUT /admin/customers/{id}` body; every field optional.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CustomerUpdate {
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "Address", skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(rename = "Phone", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(rename = "Note", skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(rename = "Status", skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Employee record. `Status` mirrors the linked login account's status.
#[derive(Debug, Clone, Deserialize)]
pub struct Employee {
    #[serde(rename = "PK_Employee")]
    pub id: EmployeeId,
    #[serde(rename = "AccountID")]
    pub account_id: AccountId,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Phone", default)]
    pub phone: Option<String>,
    #[serde(rename = "Email", default)]
    pub email: Option<String>,
    #[serde(rename = "Status", default)]
    pub status: Option<String>,
    #[serde(rename = "Creation_date", default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(rename = "Edit_date", default)]
    pub edited_at: Option<NaiveDateTime>,
}

/// `POST /admin/employees/` body.
#[derive(Debug, Clone, Serialize)]
pub struct EmployeeCreate {
    #[serde(rename = "AccountID")]
    pub account_id: AccountId,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Phone", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(rename = "Email", skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// `PUT /admin/employees/{id}` body.
#[derive(Debug, Clone, Default, Serialize)]
pub struct EmployeeUpdate {
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "Phone", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(rename = "Email", skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}
