//! Core types for Counterline.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod money;
pub mod role;
pub mod status;

pub use id::*;
pub use money::{Money, line_total};
pub use role::RoleId;
pub use status::{AccountStatus, OrderStatus};
