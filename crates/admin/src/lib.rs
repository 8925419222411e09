//! Back-office flows for the Counterline admin panel.
//!
//! Sign-in with the admin/employee role gate, catalog and people
//! management forms with the client-side checks the backend mirrors,
//! listing filters, the order workbench, and the POS register for
//! in-person sales. Each flow wraps a [`counterline_client::ApiClient`]
//! bound to the admin session slot.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod auth;
pub mod error;
pub mod forms;
pub mod listing;
pub mod orders;
pub mod pos;

pub use auth::BackOfficeAuth;
pub use error::AdminError;
pub use forms::{BrandForm, CategoryForm, CustomerForm, EmployeeForm, ProductForm, VariationForm};
pub use listing::{CustomerFilter, EmployeeFilter, OrderFilter, Pagination, ProductFilter};
pub use orders::OrderWorkbench;
pub use pos::{PosLine, PosPayment, PosRegister};
