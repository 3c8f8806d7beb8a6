//! Order wire types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;

use little_sprout_core::{Email, OrderId, OrderStatus, ProductId, UserId};

/// A single checkout transaction record returned by the backend.
///
/// Immutable from the client's perspective after creation, except for
/// status transitions observed via re-fetch.
#[derive(Debug, Clone, Deserialize)]
pub struct Order {
    /// Order's backend ID.
    pub id: OrderId,
    /// Product that was ordered.
    #[serde(rename = "product")]
    pub product_id: ProductId,
    /// Product name at checkout time.
    pub product_name: String,
    /// Unit price at checkout time; the backend serializes it as a decimal
    /// string ("19.99").
    #[serde(with = "rust_decimal::serde::str")]
    pub product_price: Decimal,
    /// Product image reference.
    pub product_image: String,
    /// Last four digits of the card used at checkout.
    pub card_last_four: String,
    /// Payment status.
    pub status: OrderStatus,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// An [`Order`] with its owner attached.
///
/// The cross-user view returned by the admin listing; requires elevated
/// privilege, not ownership.
#[derive(Debug, Clone, Deserialize)]
pub struct AdminOrder {
    /// The order itself.
    #[serde(flatten)]
    pub order: Order,
    /// Owner's backend ID.
    #[serde(rename = "user")]
    pub user_id: UserId,
    /// Owner's login name.
    pub username: String,
    /// Owner's contact address.
    pub user_email: Email,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const ORDER_JSON: &str = r#"{
        "id": 12,
        "product": 3,
        "product_name": "Baby Romper",
        "product_price": "19.99",
        "product_image": "/images/romper.jpg",
        "card_last_four": "4242",
        "status": "paid",
        "created_at": "2026-03-02T10:30:00Z"
    }"#;

    #[test]
    fn test_order_wire_shape() {
        let order: Order = serde_json::from_str(ORDER_JSON).unwrap();
        assert_eq!(order.id, OrderId::new(12));
        assert_eq!(order.product_id, ProductId::new(3));
        assert_eq!(order.product_price, "19.99".parse::<Decimal>().unwrap());
        assert_eq!(order.card_last_four, "4242");
        assert_eq!(order.status, OrderStatus::Paid);
    }

    #[test]
    fn test_admin_order_flattens_owner_fields() {
        let json = r#"{
            "id": 12,
            "product": 3,
            "product_name": "Baby Romper",
            "product_price": "19.99",
            "product_image": "/images/romper.jpg",
            "card_last_four": "4242",
            "status": "failed",
            "created_at": "2026-03-02T10:30:00Z",
            "user": 7,
            "username": "alice",
            "user_email": "alice@example.com"
        }"#;
        let admin_order: AdminOrder = serde_json::from_str(json).unwrap();
        assert_eq!(admin_order.user_id, UserId::new(7));
        assert_eq!(admin_order.username, "alice");
        assert_eq!(admin_order.order.id, OrderId::new(12));
        assert_eq!(admin_order.order.status, OrderStatus::Failed);
    }
}
