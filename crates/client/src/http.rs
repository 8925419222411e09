//! HTTP transport: bearer attachment and auth-failure interception.
//!
//! Every request resolves its session kind from the store's current
//! location, attaches that slot's bearer token when present, and tags the
//! request with an `x-request-id` UUID. On a `401` to anything other than
//! the login endpoint the selected slot is evicted and the error carries
//! the matching login route; the other slot is never touched.
//!
//! There is deliberately no retry, backoff, timeout, or caching policy:
//! each call maps to exactly one request, and every non-auth failure is the
//! caller's to surface.

use std::sync::Arc;

use reqwest::{Method, RequestBuilder, StatusCode};
use secrecy::ExposeSecret;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::config::ClientConfig;
use crate::error::{ApiError, parse_error_detail};
use crate::session::{SessionKind, SessionStore};

/// Request correlation header, echoed by proxies and logged server-side.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// The one endpoint whose `401` means "bad credentials", not "expired
/// session": it must never evict a token slot.
const LOGIN_PATH: &str = "/auth/login";

/// Typed client for the commerce backend.
///
/// Cheap to clone; all clones share the underlying connection pool and
/// session store.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http: reqwest::Client,
    base_url: String,
    session: SessionStore,
}

impl ApiClient {
    /// Create a client for the configured backend, sharing `session` for
    /// token storage and kind selection.
    #[must_use]
    pub fn new(config: &ClientConfig, session: SessionStore) -> Self {
        Self {
            inner: Arc::new(ClientInner {
                http: reqwest::Client::new(),
                base_url: config.base_url().to_string(),
                session,
            }),
        }
    }

    /// The session store this client reads tokens from.
    #[must_use]
    pub fn session(&self) -> &SessionStore {
        &self.inner.session
    }

    /// GET `path` and decode the JSON body.
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        context: &'static str,
    ) -> Result<T, ApiError> {
        self.send(self.request(Method::GET, path), path, context)
            .await
    }

    /// GET `path` with serialized query parameters.
    pub(crate) async fn get_query<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
        context: &'static str,
    ) -> Result<T, ApiError> {
        self.send(self.request(Method::GET, path).query(query), path, context)
            .await
    }

    /// POST a JSON body to `path` and decode the response.
    pub(crate) async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        context: &'static str,
    ) -> Result<T, ApiError> {
        self.send(self.request(Method::POST, path).json(body), path, context)
            .await
    }

    /// POST to `path` without a body (action endpoints like cancel).
    pub(crate) async fn post_empty<T: DeserializeOwned>(
        &self,
        path: &str,
        context: &'static str,
    ) -> Result<T, ApiError> {
        self.send(self.request(Method::POST, path), path, context)
            .await
    }

    /// PUT a JSON body to `path` and decode the response.
    pub(crate) async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        context: &'static str,
    ) -> Result<T, ApiError> {
        self.send(self.request(Method::PUT, path).json(body), path, context)
            .await
    }

    /// PUT to `path` without a body (deactivate/reactivate endpoints).
    pub(crate) async fn put_empty<T: DeserializeOwned>(
        &self,
        path: &str,
        context: &'static str,
    ) -> Result<T, ApiError> {
        self.send(self.request(Method::PUT, path), path, context)
            .await
    }

    /// POST to `path` with serialized query parameters and no body. A few
    /// action endpoints take their arguments this way.
    pub(crate) async fn post_query<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
        context: &'static str,
    ) -> Result<T, ApiError> {
        self.send(
            self.request(Method::POST, path).query(query),
            path,
            context,
        )
        .await
    }

    /// PATCH `path` with serialized query parameters and no body.
    pub(crate) async fn patch_query<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
        context: &'static str,
    ) -> Result<T, ApiError> {
        self.send(
            self.request(Method::PATCH, path).query(query),
            path,
            context,
        )
        .await
    }

    /// DELETE `path`, discarding any response body.
    pub(crate) async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let kind = self.inner.session.active_kind();
        let response = self.request(Method::DELETE, path).send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        Err(self.error_from_status(kind, path, status, response).await)
    }

    /// Build a request with the bearer token for the active session kind
    /// and a fresh request id attached.
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{path}", self.inner.base_url);
        let request_id = Uuid::new_v4();
        tracing::Span::current().record("request_id", request_id.to_string());

        let mut builder = self
            .inner
            .http
            .request(method, url)
            .header(REQUEST_ID_HEADER, request_id.to_string());

        if let Some(token) = self.inner.session.active_token() {
            builder = builder.bearer_auth(token.expose_secret());
        }

        builder
    }

    async fn send<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        path: &str,
        context: &'static str,
    ) -> Result<T, ApiError> {
        // Kind is captured before the round trip: eviction must hit the slot
        // the token was read from, even if the location changes mid-flight.
        let kind = self.inner.session.active_kind();
        let response = builder.send().await?;
        let status = response.status();

        if status.is_success() {
            let body = response.text().await?;
            return serde_json::from_str(&body).map_err(|e| {
                warn!(context, error = %e, "response body did not match expected shape");
                ApiError::Parse {
                    context,
                    message: e.to_string(),
                }
            });
        }

        Err(self.error_from_status(kind, path, status, response).await)
    }

    async fn error_from_status(
        &self,
        kind: SessionKind,
        path: &str,
        status: StatusCode,
        response: reqwest::Response,
    ) -> ApiError {
        if status == StatusCode::UNAUTHORIZED && path != LOGIN_PATH {
            debug!(%kind, path, "401 on authenticated endpoint, evicting session token");
            self.inner.session.clear_token(kind);
            return ApiError::SessionExpired {
                kind,
                login_route: self.inner.session.login_route(kind),
            };
        }

        let body = response.text().await.unwrap_or_default();
        ApiError::Api {
            status,
            detail: parse_error_detail(status, &body),
        }
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.inner.base_url)
            .finish_non_exhaustive()
    }
}
