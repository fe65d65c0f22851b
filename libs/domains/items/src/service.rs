//! Item Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{ItemError, ItemResult};
use crate::models::{Item, ItemInput, Pagination};
use crate::repository::ItemRepository;

/// Item service providing business logic operations
///
/// Turns "no such row" answers from the repository into `ItemError::NotFound`
/// and re-checks input rules for callers that bypass the HTTP extractors.
pub struct ItemService<R: ItemRepository> {
    repository: Arc<R>,
}

impl<R: ItemRepository> ItemService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    #[instrument(skip(self, input), fields(item_name = %input.name))]
    pub async fn create_item(&self, input: ItemInput) -> ItemResult<Item> {
        input.validate()?;
        self.repository.create(input).await
    }

    #[instrument(skip(self))]
    pub async fn get_item(&self, id: i64) -> ItemResult<Item> {
        self.repository
            .get_by_id(key(id)?)
            .await?
            .ok_or(ItemError::NotFound(id))
    }

    #[instrument(skip(self))]
    pub async fn list_items(&self, page: Pagination) -> ItemResult<Vec<Item>> {
        self.repository.list(page).await
    }

    /// Replace every field of an existing item
    #[instrument(skip(self, input))]
    pub async fn update_item(&self, id: i64, input: ItemInput) -> ItemResult<Item> {
        input.validate()?;
        self.repository.update(key(id)?, input).await
    }

    #[instrument(skip(self))]
    pub async fn delete_item(&self, id: i64) -> ItemResult<()> {
        if self.repository.delete(key(id)?).await? {
            Ok(())
        } else {
            Err(ItemError::NotFound(id))
        }
    }

    #[instrument(skip(self))]
    pub async fn count_items(&self) -> ItemResult<u64> {
        self.repository.count().await
    }

    /// Insert `inputs` only when there are no items yet
    #[instrument(skip(self, inputs), fields(batch = inputs.len()))]
    pub async fn seed_items(&self, inputs: Vec<ItemInput>) -> ItemResult<u64> {
        for input in &inputs {
            input.validate()?;
        }
        self.repository.insert_if_empty(inputs).await
    }
}

// Ids outside the i32 key range cannot name a stored row
fn key(id: i64) -> ItemResult<i32> {
    i32::try_from(id).map_err(|_| ItemError::NotFound(id))
}

impl<R: ItemRepository> Clone for ItemService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
