use poem_openapi::param::Path;
use poem_openapi::{ApiResponse, OpenApi, Tags, payload::Json};
use std::sync::Arc;

use crate::app_data::AppData;
use crate::errors::ItemsError;
use crate::types::dto::items::{AddItemRequest, ItemResponse, UpdateItemRequest};

/// Item CRUD endpoints
///
/// Every handler opens its own database session, runs one service call on it
/// and hands the result to `DatabaseSession::finish`, which commits on success
/// and rolls back on failure.
pub struct ItemsApi {
    app_data: Arc<AppData>,
}

impl ItemsApi {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self { app_data }
    }
}

/// API tags for item endpoints
#[derive(Tags)]
enum ItemsTags {
    /// Item management endpoints
    Items,
}

#[derive(ApiResponse, Debug)]
pub enum AddItemResponse {
    /// Item created
    #[oai(status = 201)]
    Created(Json<ItemResponse>),
}

#[derive(ApiResponse, Debug)]
pub enum UpdateItemResponse {
    /// Item updated
    #[oai(status = 200)]
    Ok,
}

#[derive(ApiResponse, Debug)]
pub enum DeleteItemResponse {
    /// Item deleted
    #[oai(status = 204)]
    NoContent,
}

#[OpenApi]
impl ItemsApi {
    /// List all items ordered by id
    #[oai(path = "/all", method = "get", tag = "ItemsTags::Items")]
    async fn get_all(&self) -> Result<Json<Vec<ItemResponse>>, ItemsError> {
        let session = self.app_data.database.session().await?;
        let result = self.app_data.item_service(&session).get_items().await;
        let items = session.finish(result).await?;

        Ok(Json(items.into_iter().map(ItemResponse::from).collect()))
    }

    /// Get a single item
    #[oai(path = "/get/:id", method = "get", tag = "ItemsTags::Items")]
    async fn get(&self, id: Path<i32>) -> Result<Json<ItemResponse>, ItemsError> {
        let session = self.app_data.database.session().await?;
        let result = self.app_data.item_service(&session).get_item_by_id(id.0).await;
        let item = session.finish(result).await?;

        Ok(Json(item.into()))
    }

    /// Add a new item with a caller-supplied id
    #[oai(path = "/add", method = "post", tag = "ItemsTags::Items")]
    async fn add(&self, body: Json<AddItemRequest>) -> Result<AddItemResponse, ItemsError> {
        let session = self.app_data.database.session().await?;
        let result = self.app_data.item_service(&session).add_item(body.0).await;
        let item = session.finish(result).await?;

        tracing::info!("Item {} added", item.id);

        Ok(AddItemResponse::Created(Json(item.into())))
    }

    /// Replace the name and description of an item
    #[oai(path = "/update/:id", method = "put", tag = "ItemsTags::Items")]
    async fn update(
        &self,
        id: Path<i32>,
        body: Json<UpdateItemRequest>,
    ) -> Result<UpdateItemResponse, ItemsError> {
        let session = self.app_data.database.session().await?;
        let result = self
            .app_data
            .item_service(&session)
            .update_item(id.0, body.0)
            .await;
        session.finish(result).await?;

        Ok(UpdateItemResponse::Ok)
    }

    /// Delete an item
    #[oai(path = "/delete/:id", method = "delete", tag = "ItemsTags::Items")]
    async fn delete(&self, id: Path<i32>) -> Result<DeleteItemResponse, ItemsError> {
        let session = self.app_data.database.session().await?;
        let result = self
            .app_data
            .item_service(&session)
            .delete_item_by_id(id.0)
            .await;
        session.finish(result).await?;

        tracing::info!("Item {} deleted", id.0);

        Ok(DeleteItemResponse::NoContent)
    }
}
