// Common test utilities for integration tests
#![allow(dead_code)]

use itemstash_backend::AppData;
use itemstash_backend::api::build_routes;
use itemstash_backend::config::DatabaseProvider;
use poem::Endpoint;
use sea_orm::Database;
use std::sync::Arc;

/// Creates an in-memory database with the item table in place
pub async fn setup_test_database() -> DatabaseProvider {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    let database = DatabaseProvider::from_connection(db);
    database
        .create_schema()
        .await
        .expect("Failed to create schema");

    database
}

/// Creates the full HTTP application over a fresh in-memory database
pub async fn setup_test_app() -> impl Endpoint {
    let database = setup_test_database().await;
    build_routes(Arc::new(AppData::new(database)))
}
