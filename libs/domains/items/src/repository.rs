use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{ItemError, ItemResult};
use crate::models::{Item, ItemInput, Pagination};

/// Repository trait for Item persistence
///
/// Reads never mutate. Every write is all-or-nothing.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Insert a new item; the store assigns the id
    async fn create(&self, input: ItemInput) -> ItemResult<Item>;

    async fn get_by_id(&self, id: i32) -> ItemResult<Option<Item>>;

    /// Items ordered by id ascending, after skipping `skip`, at most `limit`
    async fn list(&self, page: Pagination) -> ItemResult<Vec<Item>>;

    /// Replace name, description and price. `NotFound` if the id is absent,
    /// in which case nothing is written.
    async fn update(&self, id: i32, input: ItemInput) -> ItemResult<Item>;

    /// Returns whether a row was removed
    async fn delete(&self, id: i32) -> ItemResult<bool>;

    async fn count(&self) -> ItemResult<u64>;

    /// Insert `inputs` as one batch only if the store holds no items.
    /// Returns the number of rows inserted.
    async fn insert_if_empty(&self, inputs: Vec<ItemInput>) -> ItemResult<u64>;
}

#[derive(Default)]
struct Store {
    items: BTreeMap<i32, Item>,
    last_id: i32,
}

impl Store {
    fn insert(&mut self, input: ItemInput) -> ItemResult<Item> {
        let id = self
            .last_id
            .checked_add(1)
            .ok_or_else(|| ItemError::Internal("item id space exhausted".to_string()))?;
        self.last_id = id;

        let item = Item {
            id,
            name: input.name,
            description: input.description,
            price: input.price,
        };
        self.items.insert(id, item.clone());
        Ok(item)
    }
}

/// In-memory implementation of ItemRepository (for development/testing)
///
/// Ids are never reused after delete, matching an autoincrement column.
#[derive(Clone, Default)]
pub struct InMemoryItemRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryItemRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn create(&self, input: ItemInput) -> ItemResult<Item> {
        let mut store = self.store.write().await;
        store.insert(input)
    }

    async fn get_by_id(&self, id: i32) -> ItemResult<Option<Item>> {
        let store = self.store.read().await;
        Ok(store.items.get(&id).cloned())
    }

    async fn list(&self, page: Pagination) -> ItemResult<Vec<Item>> {
        let store = self.store.read().await;
        let skip = usize::try_from(page.skip).unwrap_or(usize::MAX);
        let limit = usize::try_from(page.limit).unwrap_or(usize::MAX);

        Ok(store.items.values().skip(skip).take(limit).cloned().collect())
    }

    async fn update(&self, id: i32, input: ItemInput) -> ItemResult<Item> {
        let mut store = self.store.write().await;
        let item = store.items.get_mut(&id).ok_or(ItemError::NotFound(id.into()))?;

        item.name = input.name;
        item.description = input.description;
        item.price = input.price;

        Ok(item.clone())
    }

    async fn delete(&self, id: i32) -> ItemResult<bool> {
        let mut store = self.store.write().await;
        Ok(store.items.remove(&id).is_some())
    }

    async fn count(&self) -> ItemResult<u64> {
        let store = self.store.read().await;
        Ok(store.items.len() as u64)
    }

    async fn insert_if_empty(&self, inputs: Vec<ItemInput>) -> ItemResult<u64> {
        let mut store = self.store.write().await;
        if !store.items.is_empty() {
            return Ok(0);
        }

        let mut inserted = 0;
        for input in inputs {
            store.insert(input)?;
            inserted += 1;
        }
        Ok(inserted)
    }
}
