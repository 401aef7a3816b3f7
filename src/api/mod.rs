//! REST API
//!
//! Routes, handlers and the shared router layers.

pub mod app_state;
pub mod dto;
pub mod handlers;
pub mod routes;
pub mod validation;

use crate::api::app_state::AppState;
use crate::config::config::ServerConfig;
use axum::Router;
use axum::http::HeaderValue;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// CORS policy for the configured origins; `*` allows any origin.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if origins.is_empty() || origins.iter().any(|o| o == "*") {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|o| match o.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %o, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    layer.allow_origin(AllowOrigin::list(origins))
}

/// Router serving the API under `/api`.
pub fn create_router(app_state: AppState, server: &ServerConfig) -> Router {
    let api = Router::new()
        .merge(routes::activity_routes::create_activity_router())
        .merge(routes::rating_routes::create_rating_router())
        .merge(routes::system_routes::create_system_router());

    Router::new()
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&server.cors_origins))
        .with_state(app_state)
}
