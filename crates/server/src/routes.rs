use std::sync::Arc;

use axum::{routing::get, Json, Router};
use service::VendorStore;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::Health;

use crate::openapi::ApiDoc;

pub mod cloud_vendor;

/// Shared handler state. The store is injected here and nowhere else.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn VendorStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn VendorStore>) -> Self {
        Self { store }
    }
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Vendor CRUD routes, without any middleware.
pub fn vendor_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/cloudvendor/",
            get(cloud_vendor::get_all_cloud_vendors)
                .post(cloud_vendor::create_cloud_vendor)
                .put(cloud_vendor::update_cloud_vendor),
        )
        .route(
            "/cloudvendor/:id",
            get(cloud_vendor::get_cloud_vendor).delete(cloud_vendor::delete_cloud_vendor),
        )
}

/// Build the full application router: vendor CRUD, health, OpenAPI document.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let public = Router::new()
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json));

    public
        .merge(vendor_routes())
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
