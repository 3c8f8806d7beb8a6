//! Product catalog client.
//!
//! Public reads of the storefront's product list; no credential attached.

use std::sync::Arc;

use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;
use tracing::instrument;
use url::Url;

use little_sprout_core::ProductId;

use crate::config::ClientConfig;
use crate::http;

/// Fixed message for failed product-list fetches.
const FETCH_PRODUCTS_FAILED: &str = "Failed to fetch products";

/// Fixed message for failed single-product fetches.
const FETCH_PRODUCT_FAILED: &str = "Failed to fetch product";

/// Errors that can occur during catalog reads.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The backend rejected the request with a non-success status.
    #[error("{message}")]
    Rejected {
        /// Human-readable failure reason.
        message: String,
    },

    /// Network or protocol failure before a usable response arrived.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// A storefront product.
#[derive(Debug, Clone, Deserialize)]
pub struct Product {
    /// Product's backend ID.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Long-form description.
    pub description: String,
    /// Unit price; the backend serializes it as a decimal string ("19.99").
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
    /// Image reference.
    #[serde(rename = "imageUrl")]
    pub image_url: String,
}

/// Client for the backend's public product endpoints.
#[derive(Clone)]
pub struct CatalogClient {
    inner: Arc<CatalogClientInner>,
}

struct CatalogClientInner {
    client: reqwest::Client,
    base_url: Url,
}

impl CatalogClient {
    /// Create a new catalog client.
    #[must_use]
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            inner: Arc::new(CatalogClientInner {
                client: http::build_client(),
                base_url: config.api_base_url.clone(),
            }),
        }
    }

    /// Fetch every product in the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Rejected`] with the fixed message "Failed to
    /// fetch products" on any non-success status, [`CatalogError::Transport`]
    /// when no response arrived.
    #[instrument(skip(self))]
    pub async fn get_products(&self) -> Result<Vec<Product>, CatalogError> {
        let url = format!("{}products/", self.inner.base_url);
        let response = self.inner.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(CatalogError::Rejected {
                message: FETCH_PRODUCTS_FAILED.to_string(),
            });
        }

        Ok(response.json().await?)
    }

    /// Fetch a single product by id.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Rejected`] with the fixed message "Failed to
    /// fetch product" on any non-success status, [`CatalogError::Transport`]
    /// when no response arrived.
    #[instrument(skip(self), fields(product_id = %product_id))]
    pub async fn get_product(&self, product_id: ProductId) -> Result<Product, CatalogError> {
        let url = format!("{}products/{product_id}/", self.inner.base_url);
        let response = self.inner.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(CatalogError::Rejected {
                message: FETCH_PRODUCT_FAILED.to_string(),
            });
        }

        Ok(response.json().await?)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_product_wire_shape() {
        // The backend names the image field in camelCase, unlike the rest
        // of its payloads.
        let product: Product = serde_json::from_str(
            r#"{
                "id": 1,
                "name": "Baby Romper",
                "description": "Soft cotton romper for newborns",
                "price": "19.99",
                "imageUrl": "/images/romper.jpg"
            }"#,
        )
        .unwrap();
        assert_eq!(product.id, ProductId::new(1));
        assert_eq!(product.price, "19.99".parse::<Decimal>().unwrap());
        assert_eq!(product.image_url, "/images/romper.jpg");
    }
}
