//! Order client: checkout and order history.
//!
//! Calls the backend's `orders/` and `admin/orders/` endpoints. Every call
//! attaches the bearer credential the same way, `Authorization: Token
//! <token>`.
//!
//! Two error signals are contract, not cosmetics, because they change caller
//! branching:
//!
//! - Order creation may fail *after* the backend persisted an order row
//!   (payment declined). The error then carries the recorded order's id; see
//!   [`OrderError::Rejected`].
//! - The admin listing special-cases HTTP 403 as [`OrderError::AdminRequired`]
//!   so callers can render an access-denied state distinct from a
//!   network/server failure.

mod error;
mod types;

pub use error::OrderError;
pub use types::{AdminOrder, Order};

use std::sync::Arc;

use reqwest::{StatusCode, header};
use secrecy::SecretString;
use serde::Serialize;
use tracing::{debug, instrument};
use url::Url;

use little_sprout_core::{OrderId, ProductId};

use crate::config::ClientConfig;
use crate::http;

/// Fallback message when a failed order creation carries no error body.
const CREATE_FALLBACK: &str = "Order creation failed";

/// Fixed message for failed list fetches; the backend surfaces no
/// structured detail on these.
const FETCH_ORDERS_FAILED: &str = "Failed to fetch orders";

/// Fixed message for failed single-order fetches.
const FETCH_ORDER_FAILED: &str = "Failed to fetch order";

/// Client for the backend's order endpoints.
#[derive(Clone)]
pub struct OrderClient {
    inner: Arc<OrderClientInner>,
}

struct OrderClientInner {
    client: reqwest::Client,
    base_url: Url,
}

#[derive(Serialize)]
struct CreateOrderBody<'a> {
    product_id: ProductId,
    card_number: &'a str,
}

impl OrderClient {
    /// Create a new order client.
    #[must_use]
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            inner: Arc::new(OrderClientInner {
                client: http::build_client(),
                base_url: config.api_base_url.clone(),
            }),
        }
    }

    /// Check out a product.
    ///
    /// The card number is sent to the backend as-is; the backend masks it
    /// down to its last four digits before storing. Submissions are not
    /// idempotent: a double submit produces two orders.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::Rejected`] on any non-success status, carrying
    /// the server message (fallback "Order creation failed") and, when the
    /// backend recorded an order despite the failure, that order's id.
    /// [`OrderError::Transport`] when no response arrived.
    #[instrument(skip(self, token, card_number), fields(product_id = %product_id))]
    pub async fn create_order(
        &self,
        token: &SecretString,
        product_id: ProductId,
        card_number: &str,
    ) -> Result<Order, OrderError> {
        let url = format!("{}orders/", self.inner.base_url);
        let body = CreateOrderBody {
            product_id,
            card_number,
        };
        let response = self
            .inner
            .client
            .post(url)
            .header(header::AUTHORIZATION, http::auth_header(token))
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error = http::error_body(response).await;
            let order_id = error.order_id.map(OrderId::new);
            let message = error.message_or(CREATE_FALLBACK);
            debug!(%status, %message, ?order_id, "order creation rejected");
            return Err(OrderError::Rejected { message, order_id });
        }

        let order: Order = response.json().await?;
        debug!(order_id = %order.id, status = %order.status, "order created");
        Ok(order)
    }

    /// Fetch the calling user's orders.
    ///
    /// The backend's response order is preserved; no client-side re-sort.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::Rejected`] with the fixed message "Failed to
    /// fetch orders" on any non-success status, [`OrderError::Transport`]
    /// when no response arrived.
    #[instrument(skip(self, token))]
    pub async fn get_orders(&self, token: &SecretString) -> Result<Vec<Order>, OrderError> {
        let url = format!("{}orders/", self.inner.base_url);
        let response = self
            .inner
            .client
            .get(url)
            .header(header::AUTHORIZATION, http::auth_header(token))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(rejected(FETCH_ORDERS_FAILED));
        }

        Ok(response.json().await?)
    }

    /// Fetch a single order by id.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::Rejected`] with the fixed message "Failed to
    /// fetch order" on any non-success status, [`OrderError::Transport`]
    /// when no response arrived.
    #[instrument(skip(self, token), fields(order_id = %order_id))]
    pub async fn get_order(
        &self,
        token: &SecretString,
        order_id: OrderId,
    ) -> Result<Order, OrderError> {
        let url = format!("{}orders/{order_id}/", self.inner.base_url);
        let response = self
            .inner
            .client
            .get(url)
            .header(header::AUTHORIZATION, http::auth_header(token))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(rejected(FETCH_ORDER_FAILED));
        }

        Ok(response.json().await?)
    }

    /// Fetch every user's orders (admin only).
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::AdminRequired`] on HTTP 403, so callers can
    /// branch on lack of privilege. Any other non-success status returns
    /// [`OrderError::Rejected`] with the fixed message "Failed to fetch
    /// orders". [`OrderError::Transport`] when no response arrived.
    #[instrument(skip(self, token))]
    pub async fn get_admin_orders(
        &self,
        token: &SecretString,
    ) -> Result<Vec<AdminOrder>, OrderError> {
        let url = format!("{}admin/orders/", self.inner.base_url);
        let response = self
            .inner
            .client
            .get(url)
            .header(header::AUTHORIZATION, http::auth_header(token))
            .send()
            .await?;

        if response.status() == StatusCode::FORBIDDEN {
            return Err(OrderError::AdminRequired);
        }
        if !response.status().is_success() {
            return Err(rejected(FETCH_ORDERS_FAILED));
        }

        Ok(response.json().await?)
    }
}

/// A rejection that carries no recorded order.
fn rejected(message: &str) -> OrderError {
    OrderError::Rejected {
        message: message.to_owned(),
        order_id: None,
    }
}
