use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DatabaseTransaction, Schema,
    TransactionTrait,
};

use crate::config::BootstrapSettings;
use crate::errors::InternalError;
use crate::errors::internal::DatabaseError;
use crate::types::db::item;

/// Owns the connection pool shared by every request
///
/// One instance is created at startup. Each request takes its own
/// `DatabaseSession` from it; nothing else is shared between requests.
pub struct DatabaseProvider {
    conn: DatabaseConnection,
}

impl DatabaseProvider {
    /// Connect using the bootstrap settings
    ///
    /// # Returns
    /// * `Ok(DatabaseProvider)` - Connection pool established
    /// * `Err(InternalError)` - Connection failed
    pub async fn connect(settings: &BootstrapSettings) -> Result<Self, InternalError> {
        let mut options = ConnectOptions::new(settings.database_url());
        options.sqlx_logging(settings.database_echo());

        // Every pooled connection to an in-memory SQLite database sees its own
        // empty database, so those keep the driver's single-connection default.
        if !settings.database_url().contains(":memory:") {
            options.max_connections(settings.database_max_connections());
        }

        let provider = Self::connect_with(options).await?;

        tracing::debug!("Connected to database: {}", settings.database_url());

        Ok(provider)
    }

    pub async fn connect_with(options: ConnectOptions) -> Result<Self, InternalError> {
        let conn = Database::connect(options)
            .await
            .map_err(|source| DatabaseError::Connect { source })?;

        Ok(Self { conn })
    }

    pub fn from_connection(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.conn
    }

    /// Create the `item` table from the entity definition if it is missing
    pub async fn create_schema(&self) -> Result<(), InternalError> {
        let backend = self.conn.get_database_backend();
        let schema = Schema::new(backend);

        let mut statement = schema.create_table_from_entity(item::Entity);
        statement.if_not_exists();

        self.conn
            .execute(backend.build(&statement))
            .await
            .map_err(|e| InternalError::database("create_schema", e))?;

        tracing::debug!("Database schema ready");

        Ok(())
    }

    /// Open the unit of work for one request
    pub async fn session(&self) -> Result<DatabaseSession, InternalError> {
        let txn = self
            .conn
            .begin()
            .await
            .map_err(|source| DatabaseError::TransactionBegin { source })?;

        Ok(DatabaseSession { txn })
    }
}

impl std::fmt::Debug for DatabaseProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseProvider")
            .field("conn", &"<connection>")
            .finish()
    }
}

/// One request's database scope
///
/// Wraps a transaction. `commit` makes the work visible; dropping the session
/// without committing rolls it back and releases the connection, so every
/// early return from a handler cleans up.
pub struct DatabaseSession {
    txn: DatabaseTransaction,
}

impl DatabaseSession {
    pub fn connection(&self) -> &DatabaseTransaction {
        &self.txn
    }

    pub async fn commit(self) -> Result<(), InternalError> {
        self.txn
            .commit()
            .await
            .map_err(|source| DatabaseError::TransactionCommit { source })?;
        Ok(())
    }

    /// Commit when the unit of work succeeded, otherwise drop the session
    ///
    /// Dropping rolls the transaction back, so a failed result leaves no trace.
    pub async fn finish<T>(self, result: Result<T, InternalError>) -> Result<T, InternalError> {
        let value = result?;
        self.commit().await?;
        Ok(value)
    }

    pub async fn rollback(self) -> Result<(), InternalError> {
        self.txn
            .rollback()
            .await
            .map_err(|e| InternalError::database("rollback", e))
    }
}
