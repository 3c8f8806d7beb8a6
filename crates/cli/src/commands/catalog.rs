//! Catalog commands: browse the product list.

use little_sprout_client::{CatalogClient, ClientConfig};
use little_sprout_core::ProductId;

use super::CliError;

/// List every product in the catalog.
pub async fn list() -> Result<(), CliError> {
    let config = ClientConfig::from_env()?;
    let client = CatalogClient::new(&config);

    let products = client.get_products().await?;

    tracing::info!("{} product(s):", products.len());
    for product in products {
        tracing::info!("  [{}] {} - {}", product.id, product.name, product.price);
    }
    Ok(())
}

/// Show a single product.
pub async fn show(id: i32) -> Result<(), CliError> {
    let config = ClientConfig::from_env()?;
    let client = CatalogClient::new(&config);

    let product = client.get_product(ProductId::new(id)).await?;

    tracing::info!("[{}] {}", product.id, product.name);
    tracing::info!("  Price: {}", product.price);
    tracing::info!("  Image: {}", product.image_url);
    tracing::info!("  {}", product.description);
    Ok(())
}
