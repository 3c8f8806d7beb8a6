//! Integration tests for the order client.

#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;
use secrecy::SecretString;

use little_sprout_client::{OrderClient, OrderError, SessionClient};
use little_sprout_core::{OrderId, OrderStatus, ProductId};
use little_sprout_integration_tests::{ALICE, StubBackend};

async fn logged_in(backend: &StubBackend) -> SecretString {
    SessionClient::new(&backend.config())
        .login(ALICE.0, ALICE.1)
        .await
        .expect("login should succeed")
        .token
}

#[tokio::test]
async fn checkout_records_a_paid_order() {
    let backend = StubBackend::spawn().await;
    let token = logged_in(&backend).await;
    let client = OrderClient::new(&backend.config());

    let order = client
        .create_order(&token, ProductId::new(1), "4242424242424242")
        .await
        .expect("checkout should succeed");

    assert_eq!(order.product_name, "Baby Romper");
    assert_eq!(order.product_price, "19.99".parse::<Decimal>().unwrap());
    assert_eq!(order.card_last_four, "4242");
    assert_eq!(order.status, OrderStatus::Paid);
}

#[tokio::test]
async fn checkout_is_not_idempotent() {
    let backend = StubBackend::spawn().await;
    let token = logged_in(&backend).await;
    let client = OrderClient::new(&backend.config());

    let first = client
        .create_order(&token, ProductId::new(1), "4242424242424242")
        .await
        .expect("first checkout should succeed");
    let second = client
        .create_order(&token, ProductId::new(1), "4242424242424242")
        .await
        .expect("second checkout should succeed");

    // Identical submissions produce two distinct orders.
    assert_ne!(first.id, second.id);
}

#[tokio::test]
async fn decline_with_recorded_order_carries_its_id() {
    let backend = StubBackend::spawn().await;
    let token = logged_in(&backend).await;
    let client = OrderClient::new(&backend.config());

    let err = client
        .create_order(&token, ProductId::new(1), "4000000000000002")
        .await
        .expect_err("declined card should fail");

    let recorded = err
        .created_order_id()
        .expect("the declined order should have been recorded");
    match &err {
        OrderError::Rejected { message, .. } => assert_eq!(message, "Card declined"),
        other => panic!("expected rejection, got {other:?}"),
    }

    // The recorded order is fetchable, with failed status.
    let order = client
        .get_order(&token, recorded)
        .await
        .expect("recorded order should be fetchable");
    assert_eq!(order.status, OrderStatus::Failed);
}

#[tokio::test]
async fn decline_without_recorded_order_has_no_id() {
    let backend = StubBackend::spawn().await;
    let token = logged_in(&backend).await;
    let client = OrderClient::new(&backend.config());

    let err = client
        .create_order(&token, ProductId::new(1), "4000000000000003")
        .await
        .expect_err("declined card should fail");

    // Same message as the recorded-order decline; only the id field
    // distinguishes the two shapes.
    match &err {
        OrderError::Rejected { message, order_id } => {
            assert_eq!(message, "Card declined");
            assert!(order_id.is_none());
        }
        other => panic!("expected rejection, got {other:?}"),
    }

    let orders = client
        .get_orders(&token)
        .await
        .expect("listing should succeed");
    assert!(orders.is_empty());
}

#[tokio::test]
async fn listing_preserves_backend_order() {
    let backend = StubBackend::spawn().await;
    let token = logged_in(&backend).await;
    let client = OrderClient::new(&backend.config());

    let first = client
        .create_order(&token, ProductId::new(1), "4242424242424242")
        .await
        .expect("first checkout should succeed");
    let second = client
        .create_order(&token, ProductId::new(2), "4242424242424242")
        .await
        .expect("second checkout should succeed");

    let orders = client
        .get_orders(&token)
        .await
        .expect("listing should succeed");
    let ids: Vec<_> = orders.iter().map(|o| o.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);
}

#[tokio::test]
async fn missing_order_fails_with_the_generic_message() {
    let backend = StubBackend::spawn().await;
    let token = logged_in(&backend).await;

    let err = OrderClient::new(&backend.config())
        .get_order(&token, OrderId::new(999))
        .await
        .expect_err("missing order should fail");

    match err {
        OrderError::Rejected { message, order_id } => {
            assert_eq!(message, "Failed to fetch order");
            assert!(order_id.is_none());
        }
        other => panic!("expected rejection, got {other:?}"),
    }
}
