//! Cart flow against the stub backend: optimistic updates, rollback on
//! stock conflicts, and checkout.

#![allow(clippy::unwrap_used)]

use counterline_core::{AddressId, Money, VariationId};
use counterline_integration_tests::{
    CUSTOMER_USERNAME, DEEP_VARIATION, LIMITED_STOCK, LIMITED_VARIATION, PASSWORD, TestContext,
};
use counterline_storefront::{CartBoard, CheckoutFlow, CustomerAuth, MutationPhase, StorefrontError};
use secrecy::SecretString;
use std::str::FromStr;

async fn signed_in_context() -> TestContext {
    let ctx = TestContext::start().await;
    CustomerAuth::new(ctx.client.clone())
        .login(CUSTOMER_USERNAME, &SecretString::from(PASSWORD.to_string()))
        .await
        .unwrap();
    ctx
}

#[tokio::test]
async fn quantity_update_commits_optimistically() {
    let ctx = signed_in_context().await;
    let mut board = CartBoard::new(ctx.client.clone());

    board.add(VariationId::new(LIMITED_VARIATION), 1).await.unwrap();
    assert_eq!(board.item_count(), 1);

    let line_id = board.items()[0].id;
    board.change_quantity(line_id, 2).await.unwrap();

    assert_eq!(board.phase(), MutationPhase::Committed);
    assert_eq!(board.items()[0].quantity, 2);
    assert_eq!(ctx.backend.cart_quantity(LIMITED_VARIATION), 2);
    assert_eq!(board.total(), Money::from_str("39.98").unwrap());
}

#[tokio::test]
async fn rejected_quantity_update_restores_the_snapshot() {
    let ctx = signed_in_context().await;
    let mut board = CartBoard::new(ctx.client.clone());

    board.add(VariationId::new(LIMITED_VARIATION), 2).await.unwrap();
    let line_id = board.items()[0].id;

    let err = board
        .change_quantity(line_id, LIMITED_STOCK + 10)
        .await
        .unwrap_err();
    assert!(matches!(err, StorefrontError::OutOfStock));

    assert_eq!(board.phase(), MutationPhase::RolledBack);
    assert_eq!(board.items()[0].quantity, 2);
    assert_eq!(ctx.backend.cart_quantity(LIMITED_VARIATION), 2);
}

#[tokio::test]
async fn adding_beyond_stock_is_a_stock_error() {
    let ctx = signed_in_context().await;
    let mut board = CartBoard::new(ctx.client.clone());

    let err = board
        .add(VariationId::new(LIMITED_VARIATION), LIMITED_STOCK + 1)
        .await
        .unwrap_err();
    assert!(matches!(err, StorefrontError::OutOfStock));
    assert_eq!(board.item_count(), 0);
}

#[tokio::test]
async fn unauthenticated_add_makes_no_request() {
    let ctx = TestContext::start().await;
    let mut board = CartBoard::new(ctx.client.clone());

    let err = board
        .add(VariationId::new(LIMITED_VARIATION), 1)
        .await
        .unwrap_err();
    assert!(matches!(err, StorefrontError::NeedsLogin));
    assert_eq!(ctx.backend.requests_under("/cart"), 0);
}

#[tokio::test]
async fn zero_quantity_deletes_instead_of_updating() {
    let ctx = signed_in_context().await;
    let mut board = CartBoard::new(ctx.client.clone());

    board.add(VariationId::new(LIMITED_VARIATION), 1).await.unwrap();
    let line_id = board.items()[0].id;

    board.change_quantity(line_id, 0).await.unwrap();

    assert_eq!(board.item_count(), 0);
    assert_eq!(ctx.backend.cart_quantity(LIMITED_VARIATION), 0);
    let puts = ctx
        .backend
        .requests()
        .iter()
        .filter(|r| r.method == "PUT")
        .count();
    assert_eq!(puts, 0);
}

#[tokio::test]
async fn clear_empties_board_and_backend() {
    let ctx = signed_in_context().await;
    let mut board = CartBoard::new(ctx.client.clone());

    board.add(VariationId::new(LIMITED_VARIATION), 1).await.unwrap();
    board.add(VariationId::new(DEEP_VARIATION), 4).await.unwrap();
    assert_eq!(board.item_count(), 2);

    board.clear().await.unwrap();
    assert_eq!(board.item_count(), 0);

    board.refresh().await.unwrap();
    assert_eq!(board.item_count(), 0);
}

#[tokio::test]
async fn checkout_requires_an_address_and_clears_the_cart() {
    let ctx = signed_in_context().await;
    let mut board = CartBoard::new(ctx.client.clone());
    board.add(VariationId::new(LIMITED_VARIATION), 2).await.unwrap();

    let mut checkout = CheckoutFlow::new(ctx.client.clone());
    let err = checkout.submit(&mut board).await.unwrap_err();
    assert!(matches!(err, StorefrontError::Validation(_)));

    checkout.select_address(AddressId::new(1));
    let order = checkout.submit(&mut board).await.unwrap();

    assert_eq!(order.order_type, "Online");
    assert_eq!(board.item_count(), 0);
    assert_eq!(ctx.backend.cart_quantity(LIMITED_VARIATION), 0);
    assert_eq!(ctx.backend.stock(LIMITED_VARIATION), LIMITED_STOCK - 2);
}
