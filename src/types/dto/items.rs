use poem_openapi::Object;

use crate::types::db::item;

/// Request model for adding a new item
///
/// The id is supplied by the caller and must not already exist.
#[derive(Object, Debug, Clone, PartialEq, Eq)]
pub struct AddItemRequest {
    /// Unique identifier for the item
    pub id: i32,

    /// Name of the item
    pub name: String,

    /// Description of the item
    pub description: String,
}

/// Request model for updating an existing item
#[derive(Object, Debug, Clone, PartialEq, Eq)]
pub struct UpdateItemRequest {
    /// New name of the item
    pub name: String,

    /// New description of the item
    pub description: String,
}

/// Response model representing an item
#[derive(Object, Debug, Clone, PartialEq, Eq)]
pub struct ItemResponse {
    pub id: i32,
    pub name: String,
    pub description: String,
}

impl From<item::Model> for ItemResponse {
    fn from(model: item::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
        }
    }
}
