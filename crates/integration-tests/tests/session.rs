//! Dual-session behavior: independent token slots, 401 eviction, role
//! gates, and logout scope.

#![allow(clippy::unwrap_used)]

use counterline_admin::{AdminError, BackOfficeAuth};
use counterline_client::services::ProductListParams;
use counterline_client::{ApiError, SessionKind};
use counterline_core::RoleId;
use counterline_integration_tests::{ADMIN_USERNAME, CUSTOMER_USERNAME, PASSWORD, TestContext};
use counterline_storefront::{CustomerAuth, StorefrontError};
use secrecy::SecretString;

fn password() -> SecretString {
    SecretString::from(PASSWORD.to_string())
}

#[tokio::test]
async fn customer_and_admin_sessions_coexist() {
    let ctx = TestContext::start().await;
    let session = ctx.client.session().clone();

    let role = CustomerAuth::new(ctx.client.clone())
        .login(CUSTOMER_USERNAME, &password())
        .await
        .unwrap();
    assert!(!role.has_back_office_access());

    session.navigate("/admin");
    let role = BackOfficeAuth::new(ctx.client.clone())
        .login(ADMIN_USERNAME, &password())
        .await
        .unwrap();
    assert_eq!(role, RoleId::ADMIN);

    assert!(session.token(SessionKind::Customer).is_some());
    assert!(session.token(SessionKind::Admin).is_some());

    // Each area's requests carry that area's token.
    session.navigate("/shop");
    ctx.client.cart().await.unwrap();

    session.navigate("/admin/products");
    ctx.client
        .products(&ProductListParams::default())
        .await
        .unwrap();
}

#[tokio::test]
async fn expired_admin_session_evicts_only_the_admin_slot() {
    let ctx = TestContext::start().await;
    let session = ctx.client.session().clone();

    CustomerAuth::new(ctx.client.clone())
        .login(CUSTOMER_USERNAME, &password())
        .await
        .unwrap();
    session.set_token(
        SessionKind::Admin,
        SecretString::from("stale-token".to_string()),
    );

    session.navigate("/admin/products");
    let err = ctx
        .client
        .products(&ProductListParams::default())
        .await
        .unwrap_err();
    match err {
        ApiError::SessionExpired { kind, login_route } => {
            assert_eq!(kind, SessionKind::Admin);
            assert_eq!(login_route, "/admin/login");
        }
        other => panic!("expected session eviction, got {other:?}"),
    }

    assert!(session.token(SessionKind::Admin).is_none());
    assert!(session.token(SessionKind::Customer).is_some());

    // The customer session keeps working.
    session.navigate("/shop");
    ctx.client.cart().await.unwrap();
}

#[tokio::test]
async fn failed_login_does_not_evict_the_current_session() {
    let ctx = TestContext::start().await;
    let session = ctx.client.session().clone();

    CustomerAuth::new(ctx.client.clone())
        .login(CUSTOMER_USERNAME, &password())
        .await
        .unwrap();

    let err = CustomerAuth::new(ctx.client.clone())
        .login(CUSTOMER_USERNAME, &SecretString::from("wrong-password".to_string()))
        .await
        .unwrap_err();
    match err {
        StorefrontError::Api(api) => {
            assert!(api.is_unauthorized());
            assert!(!matches!(api, ApiError::SessionExpired { .. }));
        }
        other => panic!("expected an API error, got {other:?}"),
    }

    assert!(session.token(SessionKind::Customer).is_some());
}

#[tokio::test]
async fn customer_accounts_are_refused_at_the_admin_login() {
    let ctx = TestContext::start().await;
    let session = ctx.client.session().clone();
    session.navigate("/admin/login");

    let err = BackOfficeAuth::new(ctx.client.clone())
        .login(CUSTOMER_USERNAME, &password())
        .await
        .unwrap_err();
    assert!(matches!(err, AdminError::AccessDenied(_)));
    assert!(session.token(SessionKind::Admin).is_none());
    assert!(session.role().is_none());
}

#[tokio::test]
async fn back_office_accounts_are_refused_at_the_customer_login() {
    let ctx = TestContext::start().await;

    let err = CustomerAuth::new(ctx.client.clone())
        .login(ADMIN_USERNAME, &password())
        .await
        .unwrap_err();
    assert!(matches!(err, StorefrontError::AccessDenied(_)));
    assert!(
        ctx.client
            .session()
            .token(SessionKind::Customer)
            .is_none()
    );
}

#[tokio::test]
async fn registration_then_login_round_trip() {
    let ctx = TestContext::start().await;
    let auth = CustomerAuth::new(ctx.client.clone());

    let form = counterline_storefront::RegistrationForm {
        username: "newshopper".to_string(),
        password: PASSWORD.to_string(),
        confirm_password: PASSWORD.to_string(),
        name: "New Shopper".to_string(),
        phone: String::new(),
        address: String::new(),
    };
    let profile = auth.register(&form).await.unwrap();
    assert_eq!(profile.name, "New Shopper");

    let role = auth.login("newshopper", &password()).await.unwrap();
    assert!(!role.has_back_office_access());
    assert!(
        ctx.client
            .session()
            .token(SessionKind::Customer)
            .is_some()
    );
}

#[tokio::test]
async fn logout_clears_only_the_active_slot() {
    let ctx = TestContext::start().await;
    let session = ctx.client.session().clone();

    CustomerAuth::new(ctx.client.clone())
        .login(CUSTOMER_USERNAME, &password())
        .await
        .unwrap();
    session.navigate("/admin");
    BackOfficeAuth::new(ctx.client.clone())
        .login(ADMIN_USERNAME, &password())
        .await
        .unwrap();

    session.navigate("/shop");
    let route = CustomerAuth::new(ctx.client.clone()).logout();
    assert_eq!(route, "/login");
    assert!(session.token(SessionKind::Customer).is_none());
    assert!(session.token(SessionKind::Admin).is_some());
}
