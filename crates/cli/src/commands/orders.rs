//! Order commands: checkout, history and the admin listing.

use little_sprout_client::{ClientConfig, Order, OrderClient, OrderError};
use little_sprout_core::{OrderId, ProductId};

use super::{CliError, require_session, session_store};

/// List the logged-in user's orders, in the order the backend sends them.
pub async fn list() -> Result<(), CliError> {
    let store = session_store();
    let session = require_session(&store)?;

    let config = ClientConfig::from_env()?;
    let client = OrderClient::new(&config);

    let orders = client.get_orders(&session.token).await?;

    tracing::info!("{} order(s):", orders.len());
    for order in orders {
        print_order(&order);
    }
    Ok(())
}

/// Show a single order.
pub async fn show(id: i32) -> Result<(), CliError> {
    let store = session_store();
    let session = require_session(&store)?;

    let config = ClientConfig::from_env()?;
    let client = OrderClient::new(&config);

    let order = client.get_order(&session.token, OrderId::new(id)).await?;
    print_order(&order);
    Ok(())
}

/// Check out a product with the given card number.
pub async fn create(product: i32, card: &str) -> Result<(), CliError> {
    let store = session_store();
    let session = require_session(&store)?;

    let config = ClientConfig::from_env()?;
    let client = OrderClient::new(&config);

    let result = client
        .create_order(&session.token, ProductId::new(product), card)
        .await;

    match result {
        Ok(order) => {
            tracing::info!("Order placed!");
            print_order(&order);
            Ok(())
        }
        Err(e) => {
            // A declined payment can still leave an order behind with
            // failed status; point the user at it before bailing.
            if let Some(order_id) = e.created_order_id() {
                tracing::warn!(
                    "The order was recorded as {order_id} with failed status; \
                     see `sprout-cli orders show {order_id}`"
                );
            }
            Err(e.into())
        }
    }
}

/// List all orders across users (admin accounts only).
pub async fn admin() -> Result<(), CliError> {
    let store = session_store();
    let session = require_session(&store)?;

    let config = ClientConfig::from_env()?;
    let client = OrderClient::new(&config);

    let orders = match client.get_admin_orders(&session.token).await {
        Ok(orders) => orders,
        Err(OrderError::AdminRequired) => {
            tracing::error!("This account does not have admin privileges");
            return Err(OrderError::AdminRequired.into());
        }
        Err(e) => return Err(e.into()),
    };

    tracing::info!("{} order(s) across all users:", orders.len());
    for admin_order in orders {
        tracing::info!(
            "  #{} {} <{}>",
            admin_order.order.id,
            admin_order.username,
            admin_order.user_email
        );
        print_order(&admin_order.order);
    }
    Ok(())
}

/// One-order summary lines shared by every listing.
fn print_order(order: &Order) {
    tracing::info!(
        "  #{}: {} - {} [{}] card ending {}",
        order.id,
        order.product_name,
        order.product_price,
        order.status,
        order.card_last_four
    );
    tracing::info!("      placed {}", order.created_at);
}
