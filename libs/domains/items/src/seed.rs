//! Demo rows for a fresh database.

use tracing::{debug, info};

use crate::error::ItemResult;
use crate::models::ItemInput;
use crate::repository::ItemRepository;
use crate::service::ItemService;

/// The three items a new database starts with
pub fn default_items() -> Vec<ItemInput> {
    [
        ("Laptop", "High-performance laptop with 16GB RAM", 999.99),
        ("Smartphone", "Latest model with 128GB storage", 699.99),
        ("Headphones", "Wireless noise-cancelling headphones", 149.99),
    ]
    .into_iter()
    .map(|(name, description, price)| ItemInput {
        name: name.to_string(),
        description: Some(description.to_string()),
        price,
    })
    .collect()
}

/// Inserts [`default_items`] when the table is empty; a no-op otherwise.
///
/// Run once at start-up, after migrations. Concurrent start-ups against one
/// database are not coordinated.
pub async fn seed_default_items<R: ItemRepository>(service: &ItemService<R>) -> ItemResult<u64> {
    let inserted = service.seed_items(default_items()).await?;

    if inserted > 0 {
        info!(count = inserted, "Added default items to the database");
    } else {
        debug!("Items already present, default items not added");
    }

    Ok(inserted)
}
