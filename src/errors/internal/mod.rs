use thiserror::Error;

pub mod database;
pub mod item;

pub use database::DatabaseError;
pub use item::ItemError;

/// Internal error type for store and service operations
///
/// Infrastructure errors (database) are kept apart from domain errors (item).
/// Not exposed via API - endpoints convert to ItemsError.
#[derive(Error, Debug)]
pub enum InternalError {
    #[error(transparent)]
    Database(#[from] DatabaseError),

    #[error(transparent)]
    Item(#[from] ItemError),
}

impl InternalError {
    pub fn database(operation: &str, source: sea_orm::DbErr) -> InternalError {
        InternalError::Database(DatabaseError::Operation {
            operation: operation.to_string(),
            source,
        })
    }

    pub fn item_not_found(id: i32) -> InternalError {
        InternalError::Item(ItemError::not_found(id))
    }

    pub fn item_already_exists(id: i32) -> InternalError {
        InternalError::Item(ItemError::AlreadyExists { id })
    }
}
