use poem_openapi::{OpenApi, Tags, payload::Json};

use crate::types::dto::common::HealthResponse;

/// Health check API
pub struct HealthApi;

/// API tags for health endpoints
#[derive(Tags)]
enum HealthTags {
    /// Health check endpoints
    Health,
}

#[OpenApi]
impl HealthApi {
    /// Health check endpoint
    ///
    /// Does not touch the database.
    #[oai(path = "/", method = "get", tag = "HealthTags::Health")]
    async fn status(&self) -> Json<HealthResponse> {
        Json(HealthResponse::ok())
    }
}
