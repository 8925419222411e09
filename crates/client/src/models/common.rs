//! Shapes shared across resources.

use serde::Deserialize;

/// Bare-message response from action endpoints (`{"message": "..."}`).
#[derive(Debug, Clone, Deserialize)]
pub struct ApiMessage {
    pub message: String,
}

/// Bare-detail response a few endpoints use instead (`{"detail": "..."}`).
#[derive(Debug, Clone, Deserialize)]
pub struct DetailMessage {
    pub detail: String,
}
