//! Error taxonomy for the API client.
//!
//! The backend is FastAPI-shaped: error bodies are `{"detail": ...}` where
//! `detail` is either a plain string or a validation array of objects with a
//! `msg` field. Both forms are flattened into a single human-readable string
//! on [`ApiError::Api`].

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

use crate::session::SessionKind;

/// How much of an unrecognized error body to keep in the message.
const RAW_BODY_LIMIT: usize = 200;

/// Errors produced by [`crate::ApiClient`] requests.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure (connection refused, DNS, malformed URL).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A `401` evicted the active session's token. The caller should send
    /// the user to `login_route` to start a new session.
    #[error("{kind} session expired, sign in again at {login_route}")]
    SessionExpired {
        /// Which session slot was evicted.
        kind: SessionKind,
        /// Login route for that session kind, per the configured policy.
        login_route: String,
    },

    /// The backend rejected the request with a non-2xx status.
    #[error("API error ({status}): {detail}")]
    Api {
        /// HTTP status of the response.
        status: StatusCode,
        /// Flattened `detail` from the error body.
        detail: String,
    },

    /// A 2xx response body did not match the expected shape.
    #[error("parse error in {context}: {message}")]
    Parse {
        /// Which response was being decoded.
        context: &'static str,
        /// The serde error message.
        message: String,
    },
}

impl ApiError {
    /// The HTTP status carried by this error, if any.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Http(e) => e.status(),
            Self::SessionExpired { .. } => Some(StatusCode::UNAUTHORIZED),
            Self::Api { status, .. } => Some(*status),
            Self::Parse { .. } => None,
        }
    }

    /// The backend's `detail` message, if this is an API error.
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Api { detail, .. } => Some(detail),
            _ => None,
        }
    }

    /// Whether the backend answered `401`, either as a session eviction or
    /// as a plain API error on the login endpoint.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(StatusCode::UNAUTHORIZED)
    }

    /// Whether the backend rejected the request for lack of stock.
    ///
    /// The backend signals this as a `400` whose detail mentions "stock"
    /// (`"Not enough stock"`); there is no dedicated status code for it.
    #[must_use]
    pub fn is_stock_conflict(&self) -> bool {
        self.detail()
            .is_some_and(|d| d.to_ascii_lowercase().contains("stock"))
    }
}

/// FastAPI error body: `{"detail": "..."}"` or `{"detail": [{"msg": ...}]}`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: ErrorDetail,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ErrorDetail {
    Message(String),
    Validation(Vec<FieldError>),
}

/// One entry of a Pydantic validation array. Other fields (`loc`, `type`)
/// are ignored.
#[derive(Debug, Deserialize)]
struct FieldError {
    msg: String,
}

/// Flatten an error response body into a single detail string.
///
/// Unparseable bodies fall back to the raw text (truncated) or, for empty
/// bodies, the canonical status reason.
pub(crate) fn parse_error_detail(status: StatusCode, body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        return match parsed.detail {
            ErrorDetail::Message(msg) => msg,
            ErrorDetail::Validation(fields) => fields
                .into_iter()
                .map(|f| f.msg)
                .collect::<Vec<_>>()
                .join("; "),
        };
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("unknown error")
            .to_string()
    } else {
        trimmed.chars().take(RAW_BODY_LIMIT).collect()
    }
}
