//! Wire models mirroring the backend's response and request shapes.
//!
//! Field names are preserved verbatim via `serde(rename)`: the backend
//! mixes `PK_Product`, `variation_name`, and `Customer_id` casings and the
//! client must not normalize them on the wire. Money fields are
//! [`rust_decimal::Decimal`] serialized as JSON numbers, matching the
//! backend's encoder; timestamps are naive ISO strings.

pub mod address;
pub mod auth;
pub mod cart;
pub mod catalog;
pub mod common;
pub mod order;
pub mod people;

pub use address::*;
pub use auth::*;
pub use cart::*;
pub use catalog::*;
pub use common::*;
pub use order::*;
pub use people::*;
