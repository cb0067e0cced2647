// API layer - HTTP endpoints
pub mod health;
pub mod items;

use std::sync::Arc;

use poem::middleware::Tracing;
use poem::{Endpoint, EndpointExt, Route};
use poem_openapi::OpenApiService;
use poem_openapi::error::{ParseParamError, ParseRequestPayloadError};

pub use health::HealthApi;
pub use items::ItemsApi;

use crate::app_data::AppData;
use crate::errors::ItemsError;

/// Prefix every item route is mounted under
pub const ITEMS_PREFIX: &str = "/items";

/// Build the full HTTP application
///
/// Item and health endpoints live under `/items`, Swagger UI under `/swagger`.
/// Rejected request bodies and path parameters answer 422 with a `detail` body.
pub fn build_routes(app_data: Arc<AppData>) -> impl Endpoint {
    let api_service = OpenApiService::new(
        (HealthApi, ItemsApi::new(app_data)),
        "Itemstash API",
        env!("CARGO_PKG_VERSION"),
    )
    .server(ITEMS_PREFIX);

    let ui = api_service.swagger_ui();

    Route::new()
        .nest(ITEMS_PREFIX, api_service)
        .nest("/swagger", ui)
        .catch_error(|err: ParseRequestPayloadError| async move {
            ItemsError::validation(err.to_string())
        })
        .catch_error(|err: ParseParamError| async move {
            ItemsError::validation(err.to_string())
        })
        .with(Tracing)
}
