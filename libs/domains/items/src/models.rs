use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Longest `name` the items table accepts
pub const NAME_MAX_LEN: u64 = 255;

/// A stored item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Item {
    /// Assigned by the database on insert
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Laptop")]
    pub name: String,
    #[schema(example = "High-performance laptop with 16GB RAM")]
    pub description: Option<String>,
    #[schema(example = 999.99)]
    pub price: f64,
}

/// Body for creating an item or replacing all of its fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct ItemInput {
    #[validate(length(max = NAME_MAX_LEN, message = "name must be at most 255 characters"))]
    #[schema(example = "Laptop", max_length = 255)]
    pub name: String,
    /// Omitted or `null` is stored as NULL
    #[serde(default)]
    #[schema(example = "High-performance laptop with 16GB RAM")]
    pub description: Option<String>,
    #[schema(example = 999.99)]
    pub price: f64,
}

/// Offset pagination for the item list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct Pagination {
    /// Number of items to skip
    #[serde(default)]
    #[param(default = 0, minimum = 0)]
    pub skip: u64,
    /// Maximum number of items to return
    #[serde(default = "default_limit")]
    #[param(default = 100, minimum = 0)]
    pub limit: u64,
}

fn default_limit() -> u64 {
    100
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: default_limit(),
        }
    }
}

/// Generic `{"message": ...}` body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Item deleted successfully")]
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_input_description_is_optional() {
        let input: ItemInput = serde_json::from_value(json!({"name": "Pen", "price": 2})).unwrap();
        assert_eq!(input.description, None);
        assert_eq!(input.price, 2.0);

        let input: ItemInput =
            serde_json::from_value(json!({"name": "Pen", "description": null, "price": 2.5}))
                .unwrap();
        assert_eq!(input.description, None);
    }

    #[test]
    fn test_input_requires_name_and_price() {
        assert!(serde_json::from_value::<ItemInput>(json!({"price": 1.0})).is_err());
        assert!(serde_json::from_value::<ItemInput>(json!({"name": "Pen"})).is_err());
        assert!(serde_json::from_value::<ItemInput>(json!({"name": "Pen", "price": "1"})).is_err());
    }

    #[test]
    fn test_name_length_limit() {
        let mut input = ItemInput {
            name: "x".repeat(255),
            description: None,
            price: 1.0,
        };
        assert!(input.validate().is_ok());

        input.name.push('x');
        let errors = input.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }

    #[test]
    fn test_item_serializes_null_description() {
        let item = Item {
            id: 1,
            name: "Pen".to_string(),
            description: None,
            price: 2.5,
        };
        assert_eq!(
            serde_json::to_value(&item).unwrap(),
            json!({"id": 1, "name": "Pen", "description": null, "price": 2.5})
        );
    }

    #[test]
    fn test_pagination_defaults() {
        let page: Pagination = serde_json::from_value(json!({})).unwrap();
        assert_eq!(page, Pagination::default());
        assert_eq!(page.skip, 0);
        assert_eq!(page.limit, 100);
    }
}
