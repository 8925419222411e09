//! Dual-session token store.
//!
//! The backend hands out two unrelated bearer tokens: one for the customer
//! storefront, one for the back office. Which one a request uses is decided
//! by the current navigation location, not by the flow issuing the request:
//! while the location is under the admin prefix every request resolves to
//! the admin session, everything else resolves to the customer session.
//!
//! The two slots are fully independent. Storing, reading, or clearing one
//! kind never observes or disturbs the other, so an expired back-office
//! session cannot log the customer out.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use counterline_core::RoleId;
use secrecy::SecretString;

/// Which of the two sessions a token belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionKind {
    /// Storefront shopper session.
    Customer,
    /// Back-office (admin panel, POS) session.
    Admin,
}

impl std::fmt::Display for SessionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Customer => write!(f, "customer"),
            Self::Admin => write!(f, "admin"),
        }
    }
}

/// Maps navigation locations to session kinds and kinds to login routes.
///
/// Injectable so hosts with a different route layout can supply their own
/// mapping; [`PathPrefixPolicy`] is the stock implementation.
pub trait SessionPolicy: Send + Sync {
    /// The session kind serving requests issued from `path`.
    fn kind_for_path(&self, path: &str) -> SessionKind;

    /// Where to send the user to start a new session of `kind`.
    fn login_route(&self, kind: SessionKind) -> &str;
}

/// Prefix-based policy: locations under the admin prefix belong to the
/// admin session, everything else to the customer session.
#[derive(Debug, Clone)]
pub struct PathPrefixPolicy {
    admin_prefix: String,
    admin_login_route: String,
    customer_login_route: String,
}

impl PathPrefixPolicy {
    /// Create a policy with custom routes.
    #[must_use]
    pub fn new(
        admin_prefix: impl Into<String>,
        admin_login_route: impl Into<String>,
        customer_login_route: impl Into<String>,
    ) -> Self {
        Self {
            admin_prefix: admin_prefix.into(),
            admin_login_route: admin_login_route.into(),
            customer_login_route: customer_login_route.into(),
        }
    }
}

impl Default for PathPrefixPolicy {
    fn default() -> Self {
        Self::new("/admin", "/admin/login", "/login")
    }
}

impl SessionPolicy for PathPrefixPolicy {
    fn kind_for_path(&self, path: &str) -> SessionKind {
        if path.starts_with(&self.admin_prefix) {
            SessionKind::Admin
        } else {
            SessionKind::Customer
        }
    }

    fn login_route(&self, kind: SessionKind) -> &str {
        match kind {
            SessionKind::Admin => &self.admin_login_route,
            SessionKind::Customer => &self.customer_login_route,
        }
    }
}

#[derive(Debug)]
struct SessionState {
    customer_token: Option<SecretString>,
    admin_token: Option<SecretString>,
    role: Option<RoleId>,
    location: String,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            customer_token: None,
            admin_token: None,
            role: None,
            location: "/".to_string(),
        }
    }
}

struct StoreInner {
    state: RwLock<SessionState>,
    policy: Arc<dyn SessionPolicy>,
}

/// Shared, interior-mutable holder for both session tokens, the remembered
/// back-office role, and the current navigation location.
///
/// Cheap to clone; all clones observe the same state.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<StoreInner>,
}

impl SessionStore {
    /// Create a store with the default [`PathPrefixPolicy`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_policy(PathPrefixPolicy::default())
    }

    /// Create a store with a custom path-to-session policy.
    #[must_use]
    pub fn with_policy(policy: impl SessionPolicy + 'static) -> Self {
        Self {
            inner: Arc::new(StoreInner {
                state: RwLock::new(SessionState::default()),
                policy: Arc::new(policy),
            }),
        }
    }

    /// Record a navigation to `path`. Subsequent requests resolve their
    /// session kind from this location.
    pub fn navigate(&self, path: impl Into<String>) {
        self.write_state().location = path.into();
    }

    /// The current navigation location.
    #[must_use]
    pub fn location(&self) -> String {
        self.read_state().location.clone()
    }

    /// The session kind serving requests at the current location.
    ///
    /// Selection looks only at the location: a request issued from a
    /// customer flow while the location is under the admin prefix resolves
    /// to the admin session.
    #[must_use]
    pub fn active_kind(&self) -> SessionKind {
        self.inner.policy.kind_for_path(&self.read_state().location)
    }

    /// The token stored for `kind`, if any.
    #[must_use]
    pub fn token(&self, kind: SessionKind) -> Option<SecretString> {
        let state = self.read_state();
        match kind {
            SessionKind::Customer => state.customer_token.clone(),
            SessionKind::Admin => state.admin_token.clone(),
        }
    }

    /// Store a token under `kind`, replacing any previous one.
    pub fn set_token(&self, kind: SessionKind, token: SecretString) {
        let mut state = self.write_state();
        match kind {
            SessionKind::Customer => state.customer_token = Some(token),
            SessionKind::Admin => state.admin_token = Some(token),
        }
    }

    /// Drop the token stored under `kind`. The other slot is untouched.
    pub fn clear_token(&self, kind: SessionKind) {
        let mut state = self.write_state();
        match kind {
            SessionKind::Customer => state.customer_token = None,
            SessionKind::Admin => state.admin_token = None,
        }
    }

    /// The token for the currently active session kind.
    #[must_use]
    pub fn active_token(&self) -> Option<SecretString> {
        self.token(self.active_kind())
    }

    /// Whether the active session kind holds a token.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.active_token().is_some()
    }

    /// The remembered role of the signed-in back-office account.
    #[must_use]
    pub fn role(&self) -> Option<RoleId> {
        self.read_state().role
    }

    /// Remember the role of the signed-in back-office account.
    pub fn set_role(&self, role: RoleId) {
        self.write_state().role = Some(role);
    }

    /// Forget the remembered role.
    pub fn clear_role(&self) {
        self.write_state().role = None;
    }

    /// The login route for `kind`, per the configured policy.
    #[must_use]
    pub fn login_route(&self, kind: SessionKind) -> String {
        self.inner.policy.login_route(kind).to_string()
    }

    /// End the active session: drop its token (and, for the admin session,
    /// the remembered role) and return the login route to send the user to.
    pub fn logout(&self) -> String {
        let kind = self.active_kind();
        self.clear_token(kind);
        if kind == SessionKind::Admin {
            self.clear_role();
        }
        self.login_route(kind)
    }

    fn read_state(&self) -> RwLockReadGuard<'_, SessionState> {
        self.inner
            .state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, SessionState> {
        self.inner
            .state
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.read_state();
        f.debug_struct("SessionStore")
            .field("customer_token", &state.customer_token.as_ref().map(|_| "[REDACTED]"))
            .field("admin_token", &state.admin_token.as_ref().map(|_| "[REDACTED]"))
            .field("role", &state.role)
            .field("location", &state.location)
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    fn secret(s: &str) -> SecretString {
        SecretString::from(s.to_string())
    }

    #[test]
    fn test_default_location_is_customer() {
        let store = SessionStore::new();
        assert_eq!(store.active_kind(), SessionKind::Customer);
    }

    #[test]
    fn test_admin_prefix_selects_admin_session() {
        let store = SessionStore::new();
        store.navigate("/admin/products");
        assert_eq!(store.active_kind(), SessionKind::Admin);

        store.navigate("/shop");
        assert_eq!(store.active_kind(), SessionKind::Customer);
    }

    #[test]
    fn test_slots_are_independent() {
        let store = SessionStore::new();
        store.set_token(SessionKind::Customer, secret("cust-token"));
        store.set_token(SessionKind::Admin, secret("admin-token"));

        store.clear_token(SessionKind::Admin);

        assert!(store.token(SessionKind::Admin).is_none());
        let customer = store.token(SessionKind::Customer).unwrap();
        assert_eq!(customer.expose_secret(), "cust-token");
    }

    #[test]
    fn test_active_token_follows_location() {
        let store = SessionStore::new();
        store.set_token(SessionKind::Customer, secret("cust-token"));
        store.set_token(SessionKind::Admin, secret("admin-token"));

        store.navigate("/admin/orders");
        assert_eq!(store.active_token().unwrap().expose_secret(), "admin-token");

        store.navigate("/cart");
        assert_eq!(store.active_token().unwrap().expose_secret(), "cust-token");
    }

    #[test]
    fn test_logout_clears_only_active_session() {
        let store = SessionStore::new();
        store.set_token(SessionKind::Customer, secret("cust-token"));
        store.set_token(SessionKind::Admin, secret("admin-token"));
        store.set_role(RoleId::ADMIN);

        store.navigate("/admin/customers");
        let route = store.logout();

        assert_eq!(route, "/admin/login");
        assert!(store.token(SessionKind::Admin).is_none());
        assert!(store.role().is_none());
        assert!(store.token(SessionKind::Customer).is_some());
    }

    #[test]
    fn test_customer_logout_keeps_admin_role() {
        let store = SessionStore::new();
        store.set_token(SessionKind::Customer, secret("cust-token"));
        store.set_role(RoleId::EMPLOYEE);

        let route = store.logout();

        assert_eq!(route, "/login");
        assert!(store.token(SessionKind::Customer).is_none());
        assert_eq!(store.role(), Some(RoleId::EMPLOYEE));
    }

    #[test]
    fn test_is_authenticated_tracks_active_slot() {
        let store = SessionStore::new();
        assert!(!store.is_authenticated());

        store.set_token(SessionKind::Customer, secret("cust-token"));
        assert!(store.is_authenticated());

        store.navigate("/admin");
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_custom_policy() {
        let policy = PathPrefixPolicy::new("/backoffice", "/backoffice/signin", "/signin");
        let store = SessionStore::with_policy(policy);

        store.navigate("/backoffice/products");
        assert_eq!(store.active_kind(), SessionKind::Admin);
        assert_eq!(store.login_route(SessionKind::Admin), "/backoffice/signin");
        assert_eq!(store.login_route(SessionKind::Customer), "/signin");
    }

    #[test]
    fn test_store_clones_share_state() {
        let store = SessionStore::new();
        let clone = store.clone();

        store.set_token(SessionKind::Admin, secret("admin-token"));
        assert!(clone.token(SessionKind::Admin).is_some());
    }

    #[test]
    fn test_debug_redacts_tokens() {
        let store = SessionStore::new();
        store.set_token(SessionKind::Customer, secret("super-secret-value"));

        let output = format!("{store:?}");
        assert!(output.contains("[REDACTED]"));
        assert!(!output.contains("super-secret-value"));
    }

    #[test]
    fn test_session_kind_display() {
        assert_eq!(SessionKind::Customer.to_string(), "customer");
        assert_eq!(SessionKind::Admin.to_string(), "admin");
    }

    #[test]
    fn test_store_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SessionStore>();
    }
}
