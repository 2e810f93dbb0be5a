use std::sync::Arc;

use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::AppConfig;
use crate::handlers;
use crate::openapi;

/// Build the application router around a shared, read-only config.
pub fn create_router(config: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/", get(handlers::read_root))
        .route("/average", get(handlers::average))
        .route("/reverse", get(handlers::reverse))
        .route("/health", get(handlers::health_check))
        .route("/openapi.json", get(openapi::openapi_json))
        .fallback(handlers::not_found)
        .method_not_allowed_fallback(handlers::method_not_allowed)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(config)
}
