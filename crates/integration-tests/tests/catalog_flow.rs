//! Integration tests for the catalog client.

#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;

use little_sprout_client::{CatalogClient, CatalogError};
use little_sprout_core::ProductId;
use little_sprout_integration_tests::StubBackend;

#[tokio::test]
async fn listing_returns_the_catalog() {
    let backend = StubBackend::spawn().await;

    let products = CatalogClient::new(&backend.config())
        .get_products()
        .await
        .expect("listing should succeed");

    assert_eq!(products.len(), 2);
    let romper = &products[0];
    assert_eq!(romper.name, "Baby Romper");
    assert_eq!(romper.price, "19.99".parse::<Decimal>().unwrap());
    assert_eq!(romper.image_url, "/images/romper.jpg");
}

#[tokio::test]
async fn single_product_fetch() {
    let backend = StubBackend::spawn().await;

    let product = CatalogClient::new(&backend.config())
        .get_product(ProductId::new(2))
        .await
        .expect("fetch should succeed");

    assert_eq!(product.name, "Baby Dress");
}

#[tokio::test]
async fn missing_product_fails_with_the_generic_message() {
    let backend = StubBackend::spawn().await;

    let err = CatalogClient::new(&backend.config())
        .get_product(ProductId::new(999))
        .await
        .expect_err("missing product should fail");

    match err {
        CatalogError::Rejected { message } => assert_eq!(message, "Failed to fetch product"),
        CatalogError::Transport(e) => panic!("expected rejection, got transport error: {e}"),
    }
}
