//! Per-resource service methods on [`crate::ApiClient`].
//!
//! Each file holds one `impl ApiClient` block mapping typed calls onto the
//! backend's verb+path+body contract. No transformation, aggregation, or
//! caching happens here; errors propagate untouched for callers to surface.

mod addresses;
mod auth;
mod brands;
mod cart;
mod catalog;
mod categories;
mod customers;
mod employees;
mod images;
mod orders;
mod products;
mod users;
mod variations;

pub use catalog::ShopListParams;
pub use categories::CategoryListParams;
pub use customers::CustomerListParams;
pub use employees::EmployeeListParams;
pub use images::ImageListParams;
pub use orders::OrderListParams;
pub use products::ProductListParams;
pub use variations::{ImageUrlAdded, VariationListParams};
