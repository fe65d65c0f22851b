use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;

use crate::models::{Item, ItemInput};

/// Sea-ORM Entity for the items table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "items")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    #[sea_orm(column_type = "Double")]
    pub price: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Item {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            price: model.price,
        }
    }
}

// id stays NotSet so the database assigns it
impl From<ItemInput> for ActiveModel {
    fn from(input: ItemInput) -> Self {
        ActiveModel {
            name: Set(input.name),
            description: Set(input.description),
            price: Set(input.price),
            ..Default::default()
        }
    }
}

impl ActiveModel {
    /// Overwrites every mutable column from `input`, keeping the primary key.
    pub fn replace_with(&mut self, input: ItemInput) {
        self.name = Set(input.name);
        self.description = Set(input.description);
        self.price = Set(input.price);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::ActiveValue::NotSet;

    #[test]
    fn test_active_model_from_input_leaves_id_unset() {
        let active: ActiveModel = ItemInput {
            name: "Pen".to_string(),
            description: None,
            price: 1.25,
        }
        .into();

        assert_eq!(active.id, NotSet);
        assert_eq!(active.name, Set("Pen".to_string()));
        assert_eq!(active.description, Set(None));
        assert_eq!(active.price, Set(1.25));
    }

    #[test]
    fn test_model_into_item() {
        let item: Item = Model {
            id: 7,
            name: "Mug".to_string(),
            description: Some("Ceramic".to_string()),
            price: 8.5,
        }
        .into();

        assert_eq!(item.id, 7);
        assert_eq!(item.description.as_deref(), Some("Ceramic"));
    }
}
