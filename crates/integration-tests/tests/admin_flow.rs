//! Admin flows against the stub backend: form gating, error surfacing,
//! and POS sales.

#![allow(clippy::unwrap_used)]

use counterline_admin::{
    AdminError, BackOfficeAuth, Pagination, PosRegister, ProductFilter, ProductForm,
};
use counterline_client::ApiError;
use counterline_client::models::{ProductCreate, Variation};
use counterline_core::{BrandId, CategoryId, EmployeeId, RoleId};
use counterline_integration_tests::{
    ADMIN_USERNAME, EMPLOYEE_USERNAME, LIMITED_STOCK, LIMITED_VARIATION, PASSWORD, TestContext,
};
use reqwest::StatusCode;
use secrecy::SecretString;

async fn admin_context(username: &str) -> TestContext {
    let ctx = TestContext::start().await;
    ctx.client.session().navigate("/admin");
    BackOfficeAuth::new(ctx.client.clone())
        .login(username, &SecretString::from(PASSWORD.to_string()))
        .await
        .unwrap();
    ctx
}

fn limited_variation() -> Variation {
    serde_json::from_value(serde_json::json!({
        "PK_Variation": LIMITED_VARIATION,
        "ProductID": 7,
        "SKU": "TS-BLK-M",
        "Name": "Black Tee (M)",
        "Price": 19.99,
        "Quantity": LIMITED_STOCK,
    }))
    .unwrap()
}

#[tokio::test]
async fn invalid_product_form_produces_no_traffic() {
    let ctx = admin_context(ADMIN_USERNAME).await;

    let form = ProductForm {
        name: "   ".to_string(),
        images: None,
        category_id: Some(CategoryId::new(1)),
        brand_id: Some(BrandId::new(1)),
    };
    let err = form.validate().unwrap_err();
    assert!(matches!(err, AdminError::Validation(_)));
    assert_eq!(ctx.backend.requests_under("/admin/products"), 0);
}

#[tokio::test]
async fn validated_product_form_creates_the_product() {
    let ctx = admin_context(ADMIN_USERNAME).await;

    let form = ProductForm {
        name: " Classic Tee ".to_string(),
        images: None,
        category_id: Some(CategoryId::new(1)),
        brand_id: Some(BrandId::new(1)),
    };
    let body = form.validate().unwrap();
    let product = ctx.client.create_product(&body).await.unwrap();

    assert_eq!(product.name, "Classic Tee");
    assert_eq!(ctx.backend.requests_under("/admin/products"), 1);
}

#[tokio::test]
async fn product_listing_sends_pagination_in_the_query_string() {
    let ctx = admin_context(ADMIN_USERNAME).await;

    let page = Pagination {
        page: 1,
        page_size: 5,
    };
    ctx.client
        .products(&ProductFilter::default().params(page))
        .await
        .unwrap();

    let listed = ctx
        .backend
        .requests()
        .into_iter()
        .find(|r| r.method == "GET" && r.path == "/admin/products/")
        .unwrap();
    assert_eq!(listed.query.as_deref(), Some("skip=5&limit=5"));
}

#[tokio::test]
async fn validation_array_details_are_flattened() {
    let ctx = admin_context(ADMIN_USERNAME).await;

    // Bypass the form to exercise the backend's 422 shape.
    let body = ProductCreate {
        name: String::new(),
        images: None,
        category_id: CategoryId::new(1),
        brand_id: BrandId::new(1),
    };
    let err = ctx.client.create_product(&body).await.unwrap_err();
    match err {
        ApiError::Api { status, detail } => {
            assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
            assert_eq!(detail, "field required");
        }
        other => panic!("expected an API error, got {other:?}"),
    }
}

#[tokio::test]
async fn pos_sale_decrements_stock_and_resets_the_draft() {
    let ctx = admin_context(EMPLOYEE_USERNAME).await;
    assert_eq!(
        ctx.client.session().role(),
        Some(RoleId::EMPLOYEE)
    );

    let mut register = PosRegister::new(ctx.client.clone(), EmployeeId::new(3));
    register.add_line(&limited_variation(), 2).unwrap();

    let order = register.submit().await.unwrap();
    assert_eq!(order.order_type, "POS");
    assert!(register.lines().is_empty());
    assert_eq!(ctx.backend.stock(LIMITED_VARIATION), LIMITED_STOCK - 2);
}

#[tokio::test]
async fn pos_sale_surfaces_stale_stock_and_keeps_the_draft() {
    let ctx = admin_context(ADMIN_USERNAME).await;

    // The register's stock snapshot is ahead of the backend.
    let mut stale: Variation = limited_variation();
    stale.quantity = Some(LIMITED_STOCK + 10);

    let mut register = PosRegister::new(ctx.client.clone(), EmployeeId::new(3));
    register.add_line(&stale, LIMITED_STOCK + 5).unwrap();

    let err = register.submit().await.unwrap_err();
    assert!(matches!(err, AdminError::OutOfStock));
    assert_eq!(register.lines().len(), 1);
    assert_eq!(ctx.backend.stock(LIMITED_VARIATION), LIMITED_STOCK);
}
