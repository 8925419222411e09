//! Counterline API client.
//!
//! A typed HTTP client for the Counterline commerce backend, covering both
//! the customer storefront surface (catalog, cart, checkout, account) and
//! the back-office surface (catalog management, customers, employees,
//! orders, POS).
//!
//! The backend issues two independent bearer tokens, one per area. The
//! client holds both in a [`session::SessionStore`] and picks the slot for
//! each request from the current navigation location: paths under `/admin`
//! use the admin session, everything else the customer session. A `401`
//! response evicts only the selected slot and reports the matching login
//! route, so an expired back-office session never logs the customer out.
//!
//! # Example
//!
//! ```rust,no_run
//! use counterline_client::{ApiClient, ClientConfig, SessionStore};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ClientConfig::from_env()?;
//! let session = SessionStore::new();
//! let client = ApiClient::new(&config, session);
//!
//! let items = client.cart().await?;
//! println!("{} items in cart", items.len());
//! # Ok(())
//! # }
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod http;
pub mod models;
pub mod services;
pub mod session;

pub use config::{ClientConfig, ConfigError};
pub use error::ApiError;
pub use http::ApiClient;
pub use session::{PathPrefixPolicy, SessionKind, SessionPolicy, SessionStore};
