use crate::errors::internal::{DatabaseError, InternalError, ItemError};
use poem_openapi::{ApiResponse, Object, payload::Json};
use std::fmt;

/// Error body returned by item endpoints
#[derive(Object, Debug)]
pub struct ItemsErrorResponse {
    /// Human-readable error message
    pub detail: String,
}

/// Item operation error types
#[derive(ApiResponse, Debug)]
pub enum ItemsError {
    /// No item with the requested id
    #[oai(status = 404)]
    NotFound(Json<ItemsErrorResponse>),

    /// An item with the same id already exists
    #[oai(status = 409)]
    Conflict(Json<ItemsErrorResponse>),

    /// Request body or path parameter failed validation
    #[oai(status = 422)]
    Validation(Json<ItemsErrorResponse>),

    /// Internal server error
    #[oai(status = 500)]
    InternalError(Json<ItemsErrorResponse>),
}

impl ItemsError {
    /// Create a NotFound error
    pub fn not_found(detail: String) -> Self {
        ItemsError::NotFound(Json(ItemsErrorResponse { detail }))
    }

    /// Create a Conflict error
    pub fn conflict(detail: String) -> Self {
        ItemsError::Conflict(Json(ItemsErrorResponse { detail }))
    }

    /// Create a Validation error from an extractor rejection
    pub fn validation(detail: String) -> Self {
        ItemsError::Validation(Json(ItemsErrorResponse { detail }))
    }

    /// Convert InternalError to ItemsError
    ///
    /// This is the explicit conversion point from internal errors to API errors.
    /// Internal error details are logged but not exposed to clients.
    pub fn from_internal_error(err: InternalError) -> Self {
        match &err {
            InternalError::Item(item_err @ ItemError::NotFound { .. }) => {
                tracing::debug!("{}", item_err);
                Self::not_found(item_err.to_string())
            }
            InternalError::Item(item_err @ ItemError::AlreadyExists { .. }) => {
                tracing::debug!("{}", item_err);
                Self::conflict(item_err.to_string())
            }
            InternalError::Database(DatabaseError::Operation { operation, .. }) => {
                tracing::error!("Database error in {}: {}", operation, err);
                Self::internal_server_error()
            }
            InternalError::Database(_) => {
                tracing::error!("Database session error: {}", err);
                Self::internal_server_error()
            }
        }
    }

    /// Create a generic internal server error
    ///
    /// Always returns a generic message without exposing internal details.
    fn internal_server_error() -> Self {
        ItemsError::InternalError(Json(ItemsErrorResponse {
            detail: "An internal error occurred".to_string(),
        }))
    }

    /// Get the error detail from the error variant
    pub fn detail(&self) -> &str {
        match self {
            ItemsError::NotFound(json)
            | ItemsError::Conflict(json)
            | ItemsError::Validation(json)
            | ItemsError::InternalError(json) => &json.0.detail,
        }
    }

    /// Get the HTTP status code from the error variant
    pub fn status_code(&self) -> u16 {
        match self {
            ItemsError::NotFound(_) => 404,
            ItemsError::Conflict(_) => 409,
            ItemsError::Validation(_) => 422,
            ItemsError::InternalError(_) => 500,
        }
    }
}

impl From<InternalError> for ItemsError {
    fn from(err: InternalError) -> Self {
        Self::from_internal_error(err)
    }
}

impl fmt::Display for ItemsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.detail())
    }
}
