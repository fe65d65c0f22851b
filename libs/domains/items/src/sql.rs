use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder, QuerySelect,
    TransactionTrait,
};

use crate::{
    entity,
    error::{ItemError, ItemResult},
    models::{Item, ItemInput, Pagination},
    repository::ItemRepository,
};

/// SeaORM-backed repository, works against SQLite and PostgreSQL.
///
/// Each write opens one transaction and commits it once; returning early
/// drops the transaction, which rolls it back. Reads go straight to the pool.
#[derive(Clone)]
pub struct SqlItemRepository {
    db: DatabaseConnection,
}

impl SqlItemRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// Bound parameters are signed 64-bit on every backend
fn clamp(n: u64) -> u64 {
    n.min(i64::MAX as u64)
}

#[async_trait]
impl ItemRepository for SqlItemRepository {
    async fn create(&self, input: ItemInput) -> ItemResult<Item> {
        let txn = self.db.begin().await?;

        let active_model: entity::ActiveModel = input.into();
        let model = active_model.insert(&txn).await?;

        txn.commit().await?;

        tracing::info!(item_id = model.id, "Created item");
        Ok(model.into())
    }

    async fn get_by_id(&self, id: i32) -> ItemResult<Option<Item>> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Into::into))
    }

    async fn list(&self, page: Pagination) -> ItemResult<Vec<Item>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .offset(clamp(page.skip))
            .limit(clamp(page.limit))
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn update(&self, id: i32, input: ItemInput) -> ItemResult<Item> {
        let txn = self.db.begin().await?;

        let model = entity::Entity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or(ItemError::NotFound(id.into()))?;

        let mut active_model: entity::ActiveModel = model.into();
        active_model.replace_with(input);
        let model = active_model.update(&txn).await?;

        txn.commit().await?;

        tracing::info!(item_id = model.id, "Updated item");
        Ok(model.into())
    }

    async fn delete(&self, id: i32) -> ItemResult<bool> {
        let txn = self.db.begin().await?;
        let result = entity::Entity::delete_by_id(id).exec(&txn).await?;
        txn.commit().await?;

        let deleted = result.rows_affected > 0;
        if deleted {
            tracing::info!(item_id = id, "Deleted item");
        }
        Ok(deleted)
    }

    async fn count(&self) -> ItemResult<u64> {
        Ok(entity::Entity::find().count(&self.db).await?)
    }

    async fn insert_if_empty(&self, inputs: Vec<ItemInput>) -> ItemResult<u64> {
        if inputs.is_empty() {
            return Ok(0);
        }

        let txn = self.db.begin().await?;

        let existing = entity::Entity::find().count(&txn).await?;
        if existing > 0 {
            tracing::debug!(existing, "Items table not empty, skipping batch insert");
            return Ok(0);
        }

        let inserted = inputs.len() as u64;
        entity::Entity::insert_many(inputs.into_iter().map(entity::ActiveModel::from))
            .exec(&txn)
            .await?;

        txn.commit().await?;
        Ok(inserted)
    }
}
