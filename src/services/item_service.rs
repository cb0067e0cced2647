use crate::errors::InternalError;
use crate::stores::ItemRepository;
use crate::types::db::item;
use crate::types::dto::items::{AddItemRequest, UpdateItemRequest};

/// Item use-case service
///
/// Forwards every call to the repository and returns its result unchanged.
/// The API layer only ever talks to this type, so the persistence side can be
/// swapped for a mock in tests.
pub struct ItemService<R: ItemRepository> {
    repository: R,
}

impl<R: ItemRepository> ItemService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub async fn get_items(&self) -> Result<Vec<item::Model>, InternalError> {
        self.repository.list_all().await
    }

    pub async fn get_item_by_id(&self, id: i32) -> Result<item::Model, InternalError> {
        self.repository.get(id).await
    }

    pub async fn add_item(&self, request: AddItemRequest) -> Result<item::Model, InternalError> {
        self.repository.add(request).await
    }

    pub async fn update_item(
        &self,
        id: i32,
        request: UpdateItemRequest,
    ) -> Result<(), InternalError> {
        self.repository.update(id, request).await
    }

    pub async fn delete_item_by_id(&self, id: i32) -> Result<(), InternalError> {
        self.repository.delete(id).await
    }
}
