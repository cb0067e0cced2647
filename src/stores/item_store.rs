use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
    SqlErr,
};

use crate::errors::InternalError;
use crate::types::db::item::{self, ActiveModel, Entity as Item};
use crate::types::dto::items::{AddItemRequest, UpdateItemRequest};

/// Persistence operations for items
///
/// All access to the `item` table goes through this trait. Implementations
/// report a missing row as `ItemError::NotFound` and a duplicate id on insert
/// as `ItemError::AlreadyExists`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// All items ordered by ascending id
    async fn list_all(&self) -> Result<Vec<item::Model>, InternalError>;

    async fn get(&self, id: i32) -> Result<item::Model, InternalError>;

    async fn add(&self, request: AddItemRequest) -> Result<item::Model, InternalError>;

    /// Overwrite name and description; the id never changes
    async fn update(&self, id: i32, request: UpdateItemRequest) -> Result<(), InternalError>;

    async fn delete(&self, id: i32) -> Result<(), InternalError>;
}

/// ItemStore runs item statements against a borrowed connection
///
/// The connection is usually the per-request `DatabaseTransaction`, but any
/// sea-orm connection works (tests use the pooled connection directly).
pub struct ItemStore<'a, C> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> ItemStore<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl<'a, C> ItemRepository for ItemStore<'a, C>
where
    C: ConnectionTrait + Send + Sync,
{
    async fn list_all(&self) -> Result<Vec<item::Model>, InternalError> {
        Item::find()
            .order_by_asc(item::Column::Id)
            .all(self.conn)
            .await
            .map_err(|e| InternalError::database("list_items", e))
    }

    async fn get(&self, id: i32) -> Result<item::Model, InternalError> {
        tracing::debug!("Fetching item {}", id);

        Item::find_by_id(id)
            .one(self.conn)
            .await
            .map_err(|e| InternalError::database("get_item", e))?
            .ok_or_else(|| InternalError::item_not_found(id))
    }

    async fn add(&self, request: AddItemRequest) -> Result<item::Model, InternalError> {
        let id = request.id;
        let new_item = ActiveModel {
            id: Set(request.id),
            name: Set(request.name),
            description: Set(request.description),
        };

        // Uniqueness is enforced by the primary key; a concurrent insert of the
        // same id loses here rather than on a pre-check.
        let model = new_item.insert(self.conn).await.map_err(|e| match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => InternalError::item_already_exists(id),
            _ => InternalError::database("add_item", e),
        })?;

        tracing::debug!("Added item {}", id);

        Ok(model)
    }

    async fn update(&self, id: i32, request: UpdateItemRequest) -> Result<(), InternalError> {
        let result = Item::update_many()
            .col_expr(item::Column::Name, Expr::value(request.name))
            .col_expr(item::Column::Description, Expr::value(request.description))
            .filter(item::Column::Id.eq(id))
            .exec(self.conn)
            .await
            .map_err(|e| InternalError::database("update_item", e))?;

        if result.rows_affected == 0 {
            return Err(InternalError::item_not_found(id));
        }

        tracing::debug!("Updated item {}", id);

        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<(), InternalError> {
        let result = Item::delete_by_id(id)
            .exec(self.conn)
            .await
            .map_err(|e| InternalError::database("delete_item", e))?;

        if result.rows_affected == 0 {
            return Err(InternalError::item_not_found(id));
        }

        tracing::debug!("Deleted item {}", id);

        Ok(())
    }
}

impl<C> std::fmt::Debug for ItemStore<'_, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ItemStore")
            .field("conn", &"<connection>")
            .finish()
    }
}
