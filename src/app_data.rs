use std::sync::Arc;

use crate::config::{BootstrapSettings, DatabaseProvider, DatabaseSession};
use crate::errors::InternalError;
use crate::services::ItemService;
use crate::stores::ItemStore;

/// Per-request item service bound to one session
pub type SessionItemService<'a> = ItemService<ItemStore<'a, sea_orm::DatabaseTransaction>>;

/// Centralized application data
///
/// Created once in main.rs and shared with the API layer.
///
/// ```text
/// main.rs
///   ↓
/// AppData::init()
///   ↓ creates once
///   └─ database (Arc<DatabaseProvider>)
///   ↓ wrapped in Arc<AppData>
///   ↓ passed to ItemsApi
///   ↓ per request
///   database.session() → item_service(&session) → ItemService<ItemStore>
/// ```
pub struct AppData {
    pub database: Arc<DatabaseProvider>,
}

impl AppData {
    /// Connect to the database and make sure the schema exists
    ///
    /// # Errors
    ///
    /// Returns `InternalError` when the connection or schema creation fails
    pub async fn init(settings: &BootstrapSettings) -> Result<Self, InternalError> {
        tracing::info!("Initializing AppData...");

        let database = DatabaseProvider::connect(settings).await?;
        database.create_schema().await?;

        tracing::info!("AppData initialization complete");

        Ok(Self::new(database))
    }

    pub fn new(database: DatabaseProvider) -> Self {
        Self {
            database: Arc::new(database),
        }
    }

    /// Wire a fresh store and service onto the request's session
    pub fn item_service<'a>(&self, session: &'a DatabaseSession) -> SessionItemService<'a> {
        ItemService::new(ItemStore::new(session.connection()))
    }
}
