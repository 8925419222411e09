//! Customer-facing flows for the Counterline storefront.
//!
//! Everything a shopper can do short of rendering: sign in and register
//! (with the client-side validation the backend mirrors), browse their
//! cart with optimistic quantity updates, check out against a saved
//! delivery address, follow their order history, and maintain their
//! profile and address book. Each flow wraps a
//! [`counterline_client::ApiClient`] and owns the view-model state the
//! corresponding page would hold.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod addresses;
pub mod auth;
pub mod cart;
pub mod checkout;
pub mod error;
pub mod orders;
pub mod profile;

pub use addresses::AddressBook;
pub use auth::{CustomerAuth, RegistrationForm};
pub use cart::{CartBoard, MutationPhase};
pub use checkout::CheckoutFlow;
pub use error::StorefrontError;
pub use orders::OrderHistory;
pub use profile::{ChangePasswordForm, PasswordRecovery, ProfileFlow};
