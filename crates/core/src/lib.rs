//! Counterline Core - Shared types library.
//!
//! This crate provides common types used across all Counterline components:
//! - `client` - Typed API client for the commerce backend
//! - `storefront` - Customer-facing flows (cart, checkout, account)
//! - `admin` - Back-office flows (catalog management, POS register)
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. This keeps
//! it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, roles, statuses, and money

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
